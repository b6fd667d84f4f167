//! Package Sorter - sorts packages into STANDARD, SPECIAL or REJECTED stacks
//!
//! This library provides the classification rule used by the factory's robotic
//! arm and the HTTP handlers that expose it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{classify, is_bulky, is_heavy};
pub use error::SortError;
pub use models::{Category, PackageMeasurement, SortRequest, SortResponse, SortResult};

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PackageMeasurement, Category, SortResult};
pub use requests::SortRequest;
pub use responses::{SortResponse, ServiceInfo, ErrorResponse};

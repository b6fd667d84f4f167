use serde::{Deserialize, Serialize};
use crate::models::domain::{Category, SortResult};

/// Response for the sort endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortResponse {
    pub stack: Category,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl From<SortResult> for SortResponse {
    fn from(result: SortResult) -> Self {
        let m = result.measurement;
        Self {
            stack: result.category,
            width: m.width,
            height: m.height,
            length: m.length,
            mass: m.mass,
        }
    }
}

/// Service descriptor returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "Package Sorter API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Sort packages into STANDARD, SPECIAL, or REJECTED stacks".to_string(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

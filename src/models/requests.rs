use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::domain::PackageMeasurement;

/// Inbound package measurement.
///
/// Used for both the JSON body of `POST /sort` and the query string of
/// `GET /sort`, so the two entry points share one set of constraints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct SortRequest {
    /// Package width in centimeters
    #[validate(range(min = 0.0, message = "width must be non-negative"))]
    pub width: f64,
    /// Package height in centimeters
    #[validate(range(min = 0.0, message = "height must be non-negative"))]
    pub height: f64,
    /// Package length in centimeters
    #[validate(range(min = 0.0, message = "length must be non-negative"))]
    pub length: f64,
    /// Package mass in kilograms
    #[validate(range(min = 0.0, message = "mass must be non-negative"))]
    pub mass: f64,
}

impl SortRequest {
    /// Run the field constraints and produce a measurement for the classifier.
    pub fn into_measurement(self) -> Result<PackageMeasurement> {
        self.validate()?;
        PackageMeasurement::new(self.width, self.height, self.length, self.mass)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SortError};

/// Dimensions (cm) and mass (kg) of a single package
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageMeasurement {
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub mass: f64,
}

impl PackageMeasurement {
    /// Build a measurement, rejecting any field that is not a finite `>= 0` value.
    ///
    /// Infinities are refused here so the echoed response always
    /// serializes back to numbers.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self> {
        let fields = [("width", width), ("height", height), ("length", length), ("mass", mass)];

        let offending: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| !(value.is_finite() && is_non_negative(*value)))
            .map(|(name, _)| *name)
            .collect();

        if !offending.is_empty() {
            return Err(SortError::invalid_input(format!(
                "Dimensions and mass must be finite, non-negative values (invalid: {})",
                offending.join(", ")
            )));
        }

        Ok(Self { width, height, length, mass })
    }

    /// Volume in cubic centimeters
    #[inline]
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    pub fn classify(&self) -> Result<Category> {
        crate::core::classify(self.width, self.height, self.length, self.mass)
    }
}

#[inline]
pub(crate) fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

/// Destination stack for a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Standard,
    Special,
    Rejected,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Standard => "STANDARD",
            Category::Special => "SPECIAL",
            Category::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement together with the stack it was sorted into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortResult {
    pub category: Category,
    pub measurement: PackageMeasurement,
}

impl SortResult {
    pub fn from_measurement(measurement: PackageMeasurement) -> Result<Self> {
        let category = measurement.classify()?;
        Ok(Self { category, measurement })
    }
}

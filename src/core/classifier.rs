use crate::error::{Result, SortError};
use crate::models::domain::{is_non_negative, Category};

/// Volume at or above which a package is bulky (cm³)
pub const VOLUME_THRESHOLD_CM3: f64 = 1_000_000.0;

/// Single dimension at or above which a package is bulky (cm)
pub const DIMENSION_THRESHOLD_CM: f64 = 150.0;

/// Mass at or above which a package is heavy (kg)
pub const MASS_THRESHOLD_KG: f64 = 20.0;

/// Check whether a package is bulky
///
/// A package is bulky when its volume reaches [`VOLUME_THRESHOLD_CM3`] or
/// any one dimension reaches [`DIMENSION_THRESHOLD_CM`]. Both comparisons
/// are inclusive.
#[inline]
pub fn is_bulky(width: f64, height: f64, length: f64) -> bool {
    let volume = width * height * length;

    volume >= VOLUME_THRESHOLD_CM3
        || width >= DIMENSION_THRESHOLD_CM
        || height >= DIMENSION_THRESHOLD_CM
        || length >= DIMENSION_THRESHOLD_CM
}

/// Check whether a package is heavy (inclusive)
#[inline]
pub fn is_heavy(mass: f64) -> bool {
    mass >= MASS_THRESHOLD_KG
}

/// Sort a package into its stack
///
/// # Arguments
/// * `width` - Width in centimeters
/// * `height` - Height in centimeters
/// * `length` - Length in centimeters
/// * `mass` - Mass in kilograms
///
/// # Returns
/// `REJECTED` when bulky and heavy, `SPECIAL` when exactly one of the two,
/// `STANDARD` otherwise. Fails with `InvalidInput` if any value is negative.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    if ![width, height, length, mass].into_iter().all(is_non_negative) {
        return Err(SortError::invalid_input(
            "Dimensions and mass must be non-negative values",
        ));
    }

    let category = match (is_bulky(width, height, length), is_heavy(mass)) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    };

    Ok(category)
}

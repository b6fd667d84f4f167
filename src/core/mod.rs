// Core algorithm exports
pub mod classifier;

pub use classifier::{
    classify, is_bulky, is_heavy, DIMENSION_THRESHOLD_CM, MASS_THRESHOLD_KG, VOLUME_THRESHOLD_CM3,
};

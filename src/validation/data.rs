//! Range checks for angles, heights and series depths

use crate::core::{DEPTH_LIMIT, MAX_ANGLE_RAD, MAX_HEIGHT_M, MIN_DEPTH};
use crate::validation::error::ValidationError;

/// Accepts `0 < value <= 1.4`. NaN is rejected.
pub fn check_angle(parameter: &str, value: f64) -> Result<f64, ValidationError> {
    if value > 0.0 && value <= MAX_ANGLE_RAD {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            parameter,
            value,
            &format!("(0, {}]", MAX_ANGLE_RAD),
        ))
    }
}

/// Accepts `0 < value <= 100`. NaN is rejected.
pub fn check_height(parameter: &str, value: f64) -> Result<f64, ValidationError> {
    if value > 0.0 && value <= MAX_HEIGHT_M {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            parameter,
            value,
            &format!("(0, {}]", MAX_HEIGHT_M),
        ))
    }
}

/// Accepts `1 <= depth < 14`
pub fn check_depth(parameter: &str, depth: u32) -> Result<u32, ValidationError> {
    if (MIN_DEPTH..DEPTH_LIMIT).contains(&depth) {
        Ok(depth)
    } else {
        Err(ValidationError::out_of_range(
            parameter,
            depth,
            &format!("[{}, {})", MIN_DEPTH, DEPTH_LIMIT),
        ))
    }
}

pub fn check_depth_range(from: u32, to: u32) -> Result<(), ValidationError> {
    check_depth("from", from)?;
    check_depth("to", to)?;
    if from > to {
        return Err(ValidationError::EmptyRange { from, to });
    }
    Ok(())
}

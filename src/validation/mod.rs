//! Input validation

pub mod data;
pub mod error;

pub use data::{check_angle, check_depth, check_depth_range, check_height};
pub use error::ValidationError;

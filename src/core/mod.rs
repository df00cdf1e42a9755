//! Core types and constants for the tangent approximations

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;

//! Tangent approximations and two-angle sighting
//!
//! Two ways of approximating tan(x), a truncated Taylor series and a
//! continued fraction, plus the distance and height formulas of a simple
//! right-triangle sighting built on the continued fraction.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use core::{Angle, DepthRange, Height, DEFAULT_OBSERVER_HEIGHT, PRODUCTION_DEPTH};
pub use algorithms::{
    cfrac_tan, distance_from_angle, height_from_angles, taylor_tan, SightingSolution,
    SightingSolver,
};
pub use processing::{comparison_report, ComparisonReport, ReportRow};
pub use validation::ValidationError;
pub use utils::{ConfigError, ToolConfig};
pub use api::{CommandError, CommandResult, OutputFormat};

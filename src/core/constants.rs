//! Coefficient tables and fixed parameters

/// Number of entries in the Taylor coefficient tables
pub const TAYLOR_TABLE_LEN: usize = 13;

/// Numerators of the Maclaurin coefficients of tan(x), term `i` multiplies x^(2i+1)
pub static TAYLOR_NUMERATORS: [f64; TAYLOR_TABLE_LEN] = [
    1.0,
    1.0,
    2.0,
    17.0,
    62.0,
    1382.0,
    21844.0,
    929569.0,
    6404582.0,
    443861162.0,
    18888466084.0,
    113927491862.0,
    58870668456604.0,
];

/// Denominators matching [`TAYLOR_NUMERATORS`].
///
/// The last entry is above 2^53 and is stored as the nearest `f64`.
pub static TAYLOR_DENOMINATORS: [f64; TAYLOR_TABLE_LEN] = [
    1.0,
    3.0,
    15.0,
    315.0,
    2835.0,
    155925.0,
    6081075.0,
    638512875.0,
    10854718875.0,
    1856156927625.0,
    194896477400625.0,
    49308808782358125.0,
    3698160658676859375.0,
];

/// Continued fraction depth used for distance and height calculations
pub const PRODUCTION_DEPTH: u32 = 10;

/// Observer eye height used when none is given (meters)
pub const DEFAULT_OBSERVER_HEIGHT: f64 = 1.5;

/// Largest accepted sighting angle (radians, inclusive)
pub const MAX_ANGLE_RAD: f64 = 1.4;

/// Largest accepted observer height (meters, inclusive)
pub const MAX_HEIGHT_M: f64 = 100.0;

/// Smallest accepted series depth (inclusive)
pub const MIN_DEPTH: u32 = 1;

/// Series depth upper bound (exclusive)
pub const DEPTH_LIMIT: u32 = 14;

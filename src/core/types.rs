//! Validated input values for the sighting and comparison modes

use crate::validation::data::{check_angle, check_depth_range, check_height};
use crate::validation::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Sighting angle in radians, within (0, 1.4]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Result<Self, ValidationError> {
        check_angle("angle", radians).map(Angle)
    }

    pub fn radians(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Angle {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Angle::new(value)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.0
    }
}

/// Observer eye height in meters, within (0, 100]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Height(f64);

impl Height {
    pub fn new(meters: f64) -> Result<Self, ValidationError> {
        check_height("height", meters).map(Height)
    }

    pub fn meters(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Height {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Height::new(value)
    }
}

impl From<Height> for f64 {
    fn from(height: Height) -> Self {
        height.0
    }
}

/// Inclusive range of series depths with `1 <= from <= to < 14`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRange {
    from: u32,
    to: u32,
}

impl DepthRange {
    pub fn new(from: u32, to: u32) -> Result<Self, ValidationError> {
        check_depth_range(from, to)?;
        Ok(Self { from, to })
    }

    pub fn from(&self) -> u32 {
        self.from
    }

    pub fn to(&self) -> u32 {
        self.to
    }

    /// Depths in ascending order
    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.from..=self.to
    }
}

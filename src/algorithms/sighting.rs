//! Two-angle sighting: distance to an object and the object's height
//!
//! The observer's eye sits `height` above the ground at the origin. The
//! first angle sights down to the object's base, the optional second angle
//! sights up to its top.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::continued_fraction::cfrac_tan;
use crate::core::{Angle, Height, PRODUCTION_DEPTH};

/// Horizontal distance from an observer at `height` to the base of an
/// object seen `alpha` radians below the horizon.
pub fn distance_from_angle(height: f64, alpha: f64) -> f64 {
    height / cfrac_tan(alpha, PRODUCTION_DEPTH)
}

/// Height above ground of an object top seen `beta` radians above the
/// horizon from `distance` away.
pub fn height_from_angles(height: f64, beta: f64, distance: f64) -> f64 {
    height + cfrac_tan(beta, PRODUCTION_DEPTH) * distance
}

/// Result of one sighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingSolution {
    /// Horizontal distance to the object (meters)
    pub distance_m: f64,
    /// Object height above ground, when a second angle was given (meters)
    pub object_height_m: Option<f64>,
    /// Observer eye, ground distance on x and height on y
    pub observer: Point2<f64>,
    /// Object base on the ground
    pub object_base: Point2<f64>,
    /// Object top, when a second angle was given
    pub object_top: Option<Point2<f64>>,
}

/// Solves sightings at the fixed production depth
#[derive(Debug, Clone, Default)]
pub struct SightingSolver;

impl SightingSolver {
    pub fn new() -> Self {
        Self
    }

    pub fn solve(&self, height: Height, alpha: Angle, beta: Option<Angle>) -> SightingSolution {
        let eye = height.meters();
        let distance = distance_from_angle(eye, alpha.radians());
        let object_height = beta.map(|beta| height_from_angles(eye, beta.radians(), distance));

        debug!(
            height = eye,
            alpha = alpha.radians(),
            beta = beta.map(Angle::radians),
            depth = PRODUCTION_DEPTH,
            distance,
            "solved sighting"
        );

        SightingSolution {
            distance_m: distance,
            object_height_m: object_height,
            observer: Point2::new(0.0, eye),
            object_base: Point2::new(distance, 0.0),
            object_top: object_height.map(|h| Point2::new(distance, h)),
        }
    }
}

impl SightingSolution {
    /// Straight-line distance from the observer's eye to the object's base
    pub fn line_of_sight_m(&self) -> f64 {
        nalgebra::distance(&self.observer, &self.object_base)
    }
}

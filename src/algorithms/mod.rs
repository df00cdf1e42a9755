//! Tangent approximations and the formulas built on them

pub mod taylor;
pub mod continued_fraction;
pub mod sighting;

pub use taylor::taylor_tan;
pub use continued_fraction::cfrac_tan;
pub use sighting::{distance_from_angle, height_from_angles, SightingSolution, SightingSolver};

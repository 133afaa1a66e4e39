//! # Attitude
//!
//! Value types and pure geometry for displaying a rigid body's orientation.
//!
//! ## Conventions
//!
//! - Angles enter and leave the crate in degrees and are converted to radians
//!   internally.
//! - Roll rotates about the body's lateral (X) axis, pitch about the vertical (Y)
//!   axis.
//! - The combined rotation applies roll first, then pitch: `R = Ry(pitch) * Rx(roll)`.
//! - Yaw is carried on samples but does not contribute to the rotation.

pub mod error;
pub mod geometry;
pub mod rotation;
pub mod sample;
pub mod utils;

pub use error::{AttitudeError, AttitudeResult, Axis};
pub use rotation::{rotation_matrix, RotationEngine, RotationResult};
pub use sample::AttitudeSample;

use nalgebra as na;

use crate::{geometry, utils, AttitudeSample};

/// Rotation about the X axis (roll)
pub fn roll_matrix(roll_rad: f64) -> na::Matrix3<f64> {
    let (s, c) = roll_rad.sin_cos();
    na::Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Rotation about the Y axis (pitch)
pub fn pitch_matrix(pitch_rad: f64) -> na::Matrix3<f64> {
    let (s, c) = pitch_rad.sin_cos();
    na::Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Combined body-to-world rotation for the given angles in degrees
///
/// Roll is applied first, then pitch: `Ry(pitch) * Rx(roll)`. The result is not
/// renormalized.
pub fn rotation_matrix(pitch_deg: f64, roll_deg: f64) -> na::Matrix3<f64> {
    pitch_matrix(utils::deg_to_rad(pitch_deg)) * roll_matrix(utils::deg_to_rad(roll_deg))
}

/// Geometry derived from one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationResult {
    /// Body-to-world rotation matrix
    pub matrix: na::Matrix3<f64>,

    /// Single-axis tilt used by the bar display, in degrees (equals pitch)
    pub tilt_deg: f64,
}

impl RotationResult {
    /// Level attitude
    pub fn identity() -> Self {
        Self {
            matrix: na::Matrix3::identity(),
            tilt_deg: 0.0,
        }
    }

    /// Images of the unit X, Y and Z axes under this rotation
    pub fn rotated_axes(&self) -> [na::Vector3<f64>; 3] {
        geometry::rotate_axes(&self.matrix)
    }
}

impl Default for RotationResult {
    fn default() -> Self {
        Self::identity()
    }
}

/// Stateless converter from samples to display geometry
#[derive(Debug, Default, Clone, Copy)]
pub struct RotationEngine;

impl RotationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the rotation for a sample; yaw is ignored
    pub fn compute(&self, sample: &AttitudeSample) -> RotationResult {
        RotationResult {
            matrix: rotation_matrix(sample.pitch_deg, sample.roll_deg),
            tilt_deg: sample.pitch_deg,
        }
    }
}

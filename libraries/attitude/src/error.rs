use std::fmt;
use thiserror::Error;

/// Errors raised while constructing attitude values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AttitudeError {
    /// An angle was NaN or infinite
    #[error("Non-finite {axis} angle: {value}")]
    NonFiniteAngle {
        /// Axis the angle belongs to
        axis: Axis,
        /// The offending value in degrees
        value: f64,
    },
}

/// Rotation axes of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pitch,
    Roll,
    Yaw,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Pitch => write!(f, "pitch"),
            Axis::Roll => write!(f, "roll"),
            Axis::Yaw => write!(f, "yaw"),
        }
    }
}

/// Type alias for Result with AttitudeError
pub type AttitudeResult<T> = Result<T, AttitudeError>;

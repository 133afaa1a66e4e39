use crate::error::{AttitudeError, AttitudeResult, Axis};

/// One attitude reading
///
/// Angles are in degrees and are not range-clamped. `seq` is assigned by the
/// producer and increases by one per sample produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttitudeSample {
    /// Rotation about the lateral axis in degrees
    pub pitch_deg: f64,

    /// Rotation about the longitudinal axis in degrees
    pub roll_deg: f64,

    /// Rotation about the vertical axis in degrees
    pub yaw_deg: f64,

    /// Producer-assigned sequence number
    pub seq: u64,
}

impl AttitudeSample {
    /// Create a sample with zero yaw
    pub fn new(pitch_deg: f64, roll_deg: f64, seq: u64) -> Self {
        Self {
            pitch_deg,
            roll_deg,
            yaw_deg: 0.0,
            seq,
        }
    }

    /// Create a sample, rejecting NaN or infinite angles
    pub fn try_new(pitch_deg: f64, roll_deg: f64, yaw_deg: f64, seq: u64) -> AttitudeResult<Self> {
        for (axis, value) in [(Axis::Pitch, pitch_deg), (Axis::Roll, roll_deg), (Axis::Yaw, yaw_deg)] {
            if !value.is_finite() {
                return Err(AttitudeError::NonFiniteAngle { axis, value });
            }
        }

        Ok(Self {
            pitch_deg,
            roll_deg,
            yaw_deg,
            seq,
        })
    }

    /// Return a copy of this sample carrying the given yaw
    pub fn with_yaw(self, yaw_deg: f64) -> Self {
        Self { yaw_deg, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_yaw_to_zero() {
        let sample = AttitudeSample::new(10.0, -5.0, 3);
        assert_eq!(sample.yaw_deg, 0.0);
        assert_eq!(sample.seq, 3);
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        let err = AttitudeSample::try_new(1.0, f64::NAN, 0.0, 1).unwrap_err();
        match err {
            AttitudeError::NonFiniteAngle { axis, value } => {
                assert_eq!(axis, Axis::Roll);
                assert!(value.is_nan());
            }
        }

        assert!(AttitudeSample::try_new(f64::NEG_INFINITY, 0.0, 0.0, 1).is_err());
        assert!(AttitudeSample::try_new(0.0, 0.0, f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_try_new_accepts_large_angles() {
        // No range clamping is applied
        let sample = AttitudeSample::try_new(720.0, -400.0, 1e6, 9).expect("finite angles are valid");
        assert_eq!(sample.pitch_deg, 720.0);
        assert_eq!(sample.roll_deg, -400.0);
        assert_eq!(sample.yaw_deg, 1e6);
    }

    #[test]
    fn test_with_yaw() {
        let sample = AttitudeSample::new(1.0, 2.0, 7).with_yaw(3.0);
        assert_eq!(sample, AttitudeSample::try_new(1.0, 2.0, 3.0, 7).unwrap());
    }
}

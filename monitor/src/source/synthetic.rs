use attitude::AttitudeSample;

use super::SampleSource;
use crate::error::SourceError;

/// Peak pitch of the synthetic signal in degrees
pub const PITCH_AMPLITUDE_DEG: f64 = 45.0;

/// Peak roll of the synthetic signal in degrees
pub const ROLL_AMPLITUDE_DEG: f64 = 30.0;

/// Phase advance per step in radians
pub const PHASE_STEP: f64 = 0.1;

/// The `t`-th synthetic sample: pitch follows a sine, roll a cosine
pub fn synthetic_sample(t: u64) -> AttitudeSample {
    let phase = PHASE_STEP * t as f64;
    AttitudeSample::new(PITCH_AMPLITUDE_DEG * phase.sin(), ROLL_AMPLITUDE_DEG * phase.cos(), t)
}

/// Deterministic oscillating source that never runs dry
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    next_step: u64,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Resume the signal at step `t`
    pub fn starting_at(t: u64) -> Self {
        Self { next_step: t }
    }

    /// Step the next poll will produce
    pub fn next_step(&self) -> u64 {
        self.next_step
    }
}

impl SampleSource for SyntheticGenerator {
    fn poll(&mut self) -> Result<Option<AttitudeSample>, SourceError> {
        let sample = synthetic_sample(self.next_step);
        self.next_step += 1;
        Ok(Some(sample))
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_polls_follow_formula() {
        let mut generator = SyntheticGenerator::new();
        for t in 1..=50u64 {
            let sample = generator.poll().unwrap().expect("synthetic source never runs dry");
            assert_eq!(sample.pitch_deg, 45.0 * (0.1 * t as f64).sin());
            assert_eq!(sample.roll_deg, 30.0 * (0.1 * t as f64).cos());
            assert_eq!(sample.yaw_deg, 0.0);
            assert_eq!(sample.seq, t);
        }
        assert_eq!(generator.next_step(), 51);
    }

    #[test]
    fn test_starting_at_matches_pure_function() {
        let mut generator = SyntheticGenerator::starting_at(1000);
        assert_eq!(generator.poll().unwrap(), Some(synthetic_sample(1000)));
        assert_eq!(generator.poll().unwrap(), Some(synthetic_sample(1001)));
    }

    #[test]
    fn test_amplitudes_are_bounded() {
        for t in 0..2000 {
            let sample = synthetic_sample(t);
            assert!(sample.pitch_deg.abs() <= PITCH_AMPLITUDE_DEG);
            assert!(sample.roll_deg.abs() <= ROLL_AMPLITUDE_DEG);
        }
    }
}

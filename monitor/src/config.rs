use std::time::Duration;

use crate::error::ConfigError;

/// Number of samples kept in the history window
pub const DEFAULT_WINDOW: usize = 200;

/// Tick interval for the synthetic generator (~33 Hz)
pub const SYNTHETIC_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Tick interval for a live stream (20 Hz)
pub const STREAM_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Longest a stream poll may block waiting for a line
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Where samples come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Synthetic,
    Stream,
}

impl SourceKind {
    pub fn default_tick_interval(self) -> Duration {
        match self {
            SourceKind::Synthetic => SYNTHETIC_TICK_INTERVAL,
            SourceKind::Stream => STREAM_TICK_INTERVAL,
        }
    }

    /// Display that goes with this source unless overridden
    pub fn default_display(self) -> DisplayMode {
        match self {
            SourceKind::Synthetic => DisplayMode::TiltBar,
            SourceKind::Stream => DisplayMode::AxisFrame,
        }
    }
}

/// How the current attitude is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// 2D seesaw bar rotated by pitch
    TiltBar,
    /// 3D unit axes rotated by the full rotation matrix
    AxisFrame,
}

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// History capacity `W`
    pub window: usize,

    /// Fixed delay between tick starts
    pub tick_interval: Duration,

    /// Stop after this many ticks; `None` runs until stopped
    pub max_ticks: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_source(SourceKind::Synthetic)
    }
}

impl PipelineConfig {
    /// Defaults paired with the given source
    pub fn for_source(kind: SourceKind) -> Self {
        Self {
            window: DEFAULT_WINDOW,
            tick_interval: kind.default_tick_interval(),
            max_ticks: None,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::InvalidWindow(self.window));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval));
        }
        Ok(())
    }
}

/// Stream reader configuration
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    /// Upper bound on how long one poll waits for a line
    pub read_timeout: Duration,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

impl StreamConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_timeout.is_zero() {
            return Err(ConfigError::InvalidReadTimeout(self.read_timeout));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_paired_per_source() {
        let synthetic = PipelineConfig::for_source(SourceKind::Synthetic);
        assert_eq!(synthetic.window, 200);
        assert_eq!(synthetic.tick_interval, Duration::from_millis(30));
        assert_eq!(SourceKind::Synthetic.default_display(), DisplayMode::TiltBar);

        let stream = PipelineConfig::for_source(SourceKind::Stream);
        assert_eq!(stream.tick_interval, Duration::from_millis(50));
        assert_eq!(SourceKind::Stream.default_display(), DisplayMode::AxisFrame);

        assert_eq!(PipelineConfig::default(), synthetic);
        assert!(synthetic.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_window = PipelineConfig::default().with_window(0);
        assert_eq!(zero_window.validate(), Err(ConfigError::InvalidWindow(0)));

        let zero_interval = PipelineConfig::default().with_tick_interval(Duration::ZERO);
        assert_eq!(
            zero_interval.validate(),
            Err(ConfigError::InvalidTickInterval(Duration::ZERO))
        );

        let stream = StreamConfig {
            read_timeout: Duration::ZERO,
        };
        assert_eq!(
            stream.validate(),
            Err(ConfigError::InvalidReadTimeout(Duration::ZERO))
        );
        assert!(StreamConfig::default().validate().is_ok());
    }
}

use std::time::Duration;

use clap::{Parser, ValueEnum};
use monitor::{DisplayMode, PipelineConfig, SourceKind, StreamConfig, DEFAULT_WINDOW};

/// Live pitch/roll display for a synthetic signal or a serial attitude stream
#[derive(Parser, Debug)]
#[command(name = "attitude-monitor", version, about)]
pub struct Args {
    /// Where samples come from
    #[arg(long, value_enum, default_value_t = SourceArg::Synthetic)]
    pub source: SourceArg,

    /// Device to read `pitch,roll,yaw` lines from; `-` reads stdin
    ///
    /// The device must already be configured (baud rate, raw mode).
    #[arg(long, default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Number of samples kept on screen
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    pub window: usize,

    /// Tick interval in milliseconds [default: 30 synthetic, 50 stream]
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Longest a tick waits for a stream line, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub read_timeout_ms: u64,

    /// Attitude view [default: bar for synthetic, frame for stream]
    #[arg(long, value_enum)]
    pub display: Option<DisplayArg>,

    /// Log frames instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    Synthetic,
    Stream,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayArg {
    /// Seesaw bar tilted by pitch
    Bar,
    /// Rotated X/Y/Z axes
    Frame,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Synthetic => SourceKind::Synthetic,
            SourceArg::Stream => SourceKind::Stream,
        }
    }
}

impl From<DisplayArg> for DisplayMode {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Bar => DisplayMode::TiltBar,
            DisplayArg::Frame => DisplayMode::AxisFrame,
        }
    }
}

impl Args {
    pub fn source_kind(&self) -> SourceKind {
        self.source.into()
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        let kind = self.source_kind();
        let tick_interval = self
            .interval_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| kind.default_tick_interval());

        PipelineConfig::for_source(kind)
            .with_window(self.window)
            .with_tick_interval(tick_interval)
            .with_max_ticks(self.ticks)
    }

    pub fn stream_config(&self) -> StreamConfig {
        StreamConfig {
            read_timeout: Duration::from_millis(self.read_timeout_ms),
        }
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
            .map(DisplayMode::from)
            .unwrap_or_else(|| self.source_kind().default_display())
    }
}

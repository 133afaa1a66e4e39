//! # Monitor
//!
//! Real-time attitude pipeline: a fixed-interval [`FrameScheduler`] pulls samples
//! from a [`SampleSource`], keeps a bounded [`HistoryBuffer`], computes the body
//! rotation and hands an immutable [`RenderState`] to a [`Renderer`] once per tick.
//!
//! Transient source faults are isolated to the tick they happen on; only a
//! permanently closed source stops the pipeline.

mod config;
mod error;
mod history;
mod render;
mod scheduler;
pub mod source;

pub use config::{
    DisplayMode, PipelineConfig, SourceKind, StreamConfig, DEFAULT_READ_TIMEOUT, DEFAULT_WINDOW,
    STREAM_TICK_INTERVAL, SYNTHETIC_TICK_INTERVAL,
};
pub use error::{ConfigError, ParseFailure, PipelineError, PipelineResult, SourceError};
pub use history::HistoryBuffer;
pub use render::{DisplayWindow, RenderState, Renderer};
pub use scheduler::{FrameScheduler, SchedulerCommand, SchedulerState, TickOutcome, TickStats};
pub use source::{SampleSource, StreamReader, SyntheticGenerator};

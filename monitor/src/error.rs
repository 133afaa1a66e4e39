use std::time::Duration;

use attitude::AttitudeError;
use hal::TransportError;
use thiserror::Error;

use crate::scheduler::SchedulerState;

/// Invalid startup configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid window size: {0} (must be at least 1)")]
    InvalidWindow(usize),

    #[error("Invalid tick interval: {0:?} (must be non-zero)")]
    InvalidTickInterval(Duration),

    #[error("Invalid read timeout: {0:?} (must be non-zero)")]
    InvalidReadTimeout(Duration),
}

/// Why a stream record was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseFailure {
    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("expected 3 comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("field {index} is not a number: {text:?}")]
    InvalidNumber { index: usize, text: String },

    #[error(transparent)]
    NonFinite(#[from] AttitudeError),
}

/// Faults reported by a sample source
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// A record arrived but could not be parsed; recoverable
    #[error("Malformed record {line:?}: {reason}")]
    Parse { line: String, reason: ParseFailure },

    /// The transport hiccupped but remains usable; recoverable
    #[error("Transport fault: {0}")]
    Transport(String),

    /// The source can never produce another sample
    #[error("Source unavailable: {0}")]
    Fatal(String),
}

impl SourceError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, SourceError::Fatal(_))
    }
}

impl From<TransportError> for SourceError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Closed => SourceError::Fatal(err.to_string()),
            TransportError::Transient(message) => SourceError::Transport(message),
        }
    }
}

/// Errors that end or refuse a scheduler operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source failed: {0}")]
    SourceFatal(SourceError),

    #[error("Scheduler is not running (state: {0:?})")]
    NotRunning(SchedulerState),

    #[error("Invalid scheduler transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: SchedulerState,
        to: SchedulerState,
    },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_map_to_source_errors() {
        let closed: SourceError = TransportError::Closed.into();
        assert!(closed.is_fatal());

        let glitch: SourceError = TransportError::Transient("framing error".into()).into();
        assert_eq!(glitch, SourceError::Transport("framing error".into()));
        assert!(!glitch.is_fatal());
    }

    #[test]
    fn test_parse_error_message() {
        let err = SourceError::Parse {
            line: "1.0,2.0".into(),
            reason: ParseFailure::FieldCount(2),
        };
        assert_eq!(
            err.to_string(),
            "Malformed record \"1.0,2.0\": expected 3 comma-separated fields, found 2"
        );
    }
}

/// Transport fault classification
use alloc::string::String;
use thiserror::Error;

/// Errors reported by a line transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The link is gone for good (device unplugged, stream hit end of file)
    #[error("transport closed")]
    Closed,

    /// A read failed but the link is still usable
    #[error("transient transport fault: {0}")]
    Transient(String),
}

//! Sample producers polled once per tick

mod stream;
mod synthetic;

pub use stream::{parse_record, StreamReader};
pub use synthetic::{synthetic_sample, SyntheticGenerator};

use attitude::AttitudeSample;

use crate::error::SourceError;

/// Something that yields at most one sample per poll
pub trait SampleSource {
    /// Produce the next sample
    ///
    /// - `Ok(Some(sample))`: a new sample
    /// - `Ok(None)`: nothing available this tick
    /// - `Err(_)`: a recoverable fault, or a fatal one when
    ///   [`SourceError::is_fatal`] holds
    fn poll(&mut self) -> Result<Option<AttitudeSample>, SourceError>;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

impl<S: SampleSource + ?Sized> SampleSource for Box<S> {
    fn poll(&mut self) -> Result<Option<AttitudeSample>, SourceError> {
        (**self).poll()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Line-oriented transport interface
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use crate::error::TransportError;

/// Byte stream that delivers newline-delimited records
///
/// Implementations own the physical connection (port name, baud rate, buffering).
/// Consumers only ever ask for the next complete line.
pub trait LineTransport {
    /// Read one complete line, without its terminator
    ///
    /// Blocks for at most `timeout`. Returns `Ok(None)` when no complete line
    /// became available in that time.
    fn read_line(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, TransportError>;
}

impl<T: LineTransport + ?Sized> LineTransport for &mut T {
    fn read_line(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, TransportError> {
        (**self).read_line(timeout)
    }
}

impl<T: LineTransport + ?Sized> LineTransport for Box<T> {
    fn read_line(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, TransportError> {
        (**self).read_line(timeout)
    }
}

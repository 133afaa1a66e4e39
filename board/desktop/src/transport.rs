use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use hal::{LineTransport, TransportError};
use log::{debug, error, warn};

/// Lines held between the reader thread and the consumer
///
/// Once full, the reader thread blocks and input backs up into the OS buffer.
pub const LINE_QUEUE_DEPTH: usize = 8;

/// Longest accepted line, terminator excluded
pub const MAX_LINE_LEN: usize = 256;

/// Line transport backed by a blocking reader on its own thread
///
/// The reader thread forwards complete lines through a bounded channel of
/// [`LINE_QUEUE_DEPTH`] entries. Oversized lines are reported as
/// [`TransportError::Transient`]. When the underlying stream ends or fails, the
/// thread exits and the transport reports [`TransportError::Closed`].
pub struct ThreadedLineReader {
    lines: mpsc::Receiver<Result<Vec<u8>, TransportError>>,
}

impl ThreadedLineReader {
    /// Open a device path, or stdin for `-`
    pub fn open(port: &str) -> anyhow::Result<Self> {
        if port == "-" {
            Self::spawn("stdin", io::stdin())
        } else {
            let device = File::open(port).with_context(|| format!("Failed to open {}", port))?;
            Self::spawn(port, device)
        }
    }

    pub fn spawn<R: Read + Send + 'static>(label: &str, source: R) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::sync_channel(LINE_QUEUE_DEPTH);
        let label = label.to_owned();

        // Never joined: a read on a silent device cannot be interrupted
        thread::Builder::new()
            .name("line-reader".into())
            .spawn(move || forward_lines(&label, BufReader::new(source), tx))
            .context("Failed to spawn line reader thread")?;

        Ok(Self { lines: rx })
    }
}

fn forward_lines<R: BufRead>(
    label: &str,
    mut reader: R,
    tx: mpsc::SyncSender<Result<Vec<u8>, TransportError>>,
) {
    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                debug!("{}: end of stream", label);
                return;
            }
            Ok(_) => {
                if line.last() != Some(&b'\n') {
                    debug!("{}: dropping partial line at end of stream", label);
                    return;
                }
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                let item = if line.len() > MAX_LINE_LEN {
                    warn!("{}: discarding {}-byte line", label, line.len());
                    Err(TransportError::Transient(format!(
                        "line of {} bytes exceeds {}",
                        line.len(),
                        MAX_LINE_LEN
                    )))
                } else {
                    Ok(line)
                };
                if tx.send(item).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                thread::sleep(Duration::from_millis(5));
            }
            Err(e) => {
                error!("{}: read failed: {}", label, e);
                return;
            }
        }
    }
}

impl LineTransport for ThreadedLineReader {
    fn read_line(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, TransportError> {
        match self.lines.recv_timeout(timeout) {
            Ok(line) => line.map(Some),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(TransportError::Closed),
        }
    }
}

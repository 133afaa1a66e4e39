use attitude::AttitudeSample;
use hal::LineTransport;
use log::trace;

use super::SampleSource;
use crate::config::StreamConfig;
use crate::error::{ConfigError, ParseFailure, SourceError};

/// Parse a `pitch,roll,yaw` record in degrees
///
/// The record is rejected as a whole unless it has exactly three fields, each a
/// finite floating-point number. Whitespace around fields is ignored.
pub fn parse_record(line: &str, seq: u64) -> Result<AttitudeSample, ParseFailure> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ParseFailure::FieldCount(fields.len()));
    }

    let mut values = [0.0f64; 3];
    for (index, field) in fields.iter().enumerate() {
        values[index] = field.parse().map_err(|_| ParseFailure::InvalidNumber {
            index,
            text: field.to_string(),
        })?;
    }

    Ok(AttitudeSample::try_new(values[0], values[1], values[2], seq)?)
}

/// Reads attitude records from a line transport
pub struct StreamReader<T> {
    transport: T,
    config: StreamConfig,
    next_seq: u64,
}

impl<T: LineTransport> StreamReader<T> {
    pub fn new(transport: T, config: StreamConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            transport,
            config,
            next_seq: 1,
        })
    }

    /// Sequence number the next accepted record will carry
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }
}

impl<T: LineTransport> SampleSource for StreamReader<T> {
    fn poll(&mut self) -> Result<Option<AttitudeSample>, SourceError> {
        let bytes = match self.transport.read_line(self.config.read_timeout)? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        let line = std::str::from_utf8(&bytes).map_err(|_| SourceError::Parse {
            line: String::from_utf8_lossy(&bytes).into_owned(),
            reason: ParseFailure::NotUtf8,
        })?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let sample = parse_record(line, self.next_seq).map_err(|reason| SourceError::Parse {
            line: line.to_string(),
            reason,
        })?;
        trace!("record {} accepted: {:?}", self.next_seq, sample);
        self.next_seq += 1;

        Ok(Some(sample))
    }

    fn name(&self) -> &'static str {
        "stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::time::Duration;

    use attitude::{AttitudeError, Axis};
    use hal::TransportError;

    /// Replays canned transport results, then reports the link closed
    struct ScriptedTransport {
        script: VecDeque<Result<Option<Vec<u8>>, TransportError>>,
        timeouts: Vec<Duration>,
    }

    impl ScriptedTransport {
        fn lines(lines: &[&str]) -> Self {
            Self {
                script: lines.iter().map(|l| Ok(Some(l.as_bytes().to_vec()))).collect(),
                timeouts: Vec::new(),
            }
        }
    }

    impl LineTransport for ScriptedTransport {
        fn read_line(&mut self, timeout: Duration) -> Result<Option<Vec<u8>>, TransportError> {
            self.timeouts.push(timeout);
            self.script.pop_front().unwrap_or(Err(TransportError::Closed))
        }
    }

    fn reader(transport: ScriptedTransport) -> StreamReader<ScriptedTransport> {
        StreamReader::new(transport, StreamConfig::default()).expect("default config is valid")
    }

    #[test]
    fn test_parse_record_accepts_three_floats() {
        let sample = parse_record("1.0,2.0,3.0", 1).unwrap();
        assert_eq!(sample, AttitudeSample::try_new(1.0, 2.0, 3.0, 1).unwrap());

        let sample = parse_record(" -12.5 , 4e1,\t0 ", 2).unwrap();
        assert_eq!((sample.pitch_deg, sample.roll_deg, sample.yaw_deg), (-12.5, 40.0, 0.0));
    }

    #[test]
    fn test_parse_record_rejects_wrong_field_count() {
        assert_eq!(parse_record("1.0,2.0", 1), Err(ParseFailure::FieldCount(2)));
        assert_eq!(parse_record("1,2,3,4", 1), Err(ParseFailure::FieldCount(4)));
        assert_eq!(parse_record("1.0 2.0 3.0", 1), Err(ParseFailure::FieldCount(1)));
    }

    #[test]
    fn test_parse_record_rejects_bad_numbers() {
        assert_eq!(
            parse_record("1.0,abc,3.0", 1),
            Err(ParseFailure::InvalidNumber {
                index: 1,
                text: "abc".into()
            })
        );
        assert!(matches!(
            parse_record("1.0,,3.0", 1),
            Err(ParseFailure::InvalidNumber { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_record_rejects_non_finite() {
        match parse_record("nan,0,0", 1) {
            Err(ParseFailure::NonFinite(AttitudeError::NonFiniteAngle { axis, .. })) => {
                assert_eq!(axis, Axis::Pitch)
            }
            other => panic!("expected non-finite failure, got {:?}", other),
        }
        assert!(parse_record("0,inf,0", 1).is_err());
    }

    #[test]
    fn test_poll_assigns_seq_per_accepted_sample() {
        let mut source = reader(ScriptedTransport::lines(&["1,2,3", "garbage", "", "4,5,6\r"]));

        assert_eq!(source.poll().unwrap().map(|s| s.seq), Some(1));
        assert!(matches!(source.poll(), Err(SourceError::Parse { .. })));
        assert_eq!(source.poll(), Ok(None));

        let sample = source.poll().unwrap().expect("valid record");
        assert_eq!(sample.seq, 2);
        assert_eq!(sample.pitch_deg, 4.0);
        assert_eq!(source.next_seq(), 3);
    }

    #[test]
    fn test_poll_reports_missing_field_as_parse_error() {
        let mut source = reader(ScriptedTransport::lines(&["1.0,2.0"]));
        assert_eq!(
            source.poll(),
            Err(SourceError::Parse {
                line: "1.0,2.0".into(),
                reason: ParseFailure::FieldCount(2),
            })
        );
    }

    #[test]
    fn test_poll_rejects_invalid_utf8() {
        let transport = ScriptedTransport {
            script: VecDeque::from(vec![Ok(Some(vec![0xff, b',', b'1']))]),
            timeouts: Vec::new(),
        };
        let mut source = reader(transport);
        assert!(matches!(
            source.poll(),
            Err(SourceError::Parse {
                reason: ParseFailure::NotUtf8,
                ..
            })
        ));
    }

    #[test]
    fn test_poll_maps_transport_results() {
        let transport = ScriptedTransport {
            script: VecDeque::from(vec![
                Ok(None),
                Err(TransportError::Transient("overrun".into())),
            ]),
            timeouts: Vec::new(),
        };
        let mut source = reader(transport);

        assert_eq!(source.poll(), Ok(None));
        assert_eq!(source.poll(), Err(SourceError::Transport("overrun".into())));
        let fatal = source.poll().unwrap_err();
        assert!(fatal.is_fatal());
        assert_eq!(source.next_seq(), 1);
    }

    #[test]
    fn test_poll_uses_configured_timeout() {
        let config = StreamConfig {
            read_timeout: Duration::from_millis(75),
        };
        let mut source = StreamReader::new(ScriptedTransport::lines(&["0,0,0"]), config).unwrap();
        source.poll().unwrap();
        assert_eq!(source.transport.timeouts, vec![Duration::from_millis(75)]);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = StreamConfig {
            read_timeout: Duration::ZERO,
        };
        assert!(StreamReader::new(ScriptedTransport::lines(&[]), config).is_err());
    }
}

use std::collections::VecDeque;

use attitude::AttitudeSample;

use crate::error::ConfigError;
use crate::render::DisplayWindow;

/// Fixed-capacity FIFO of the most recent samples
///
/// Pushing onto a full buffer evicts the oldest sample. The buffer also counts
/// every sample ever pushed so the display window can keep scrolling after
/// eviction starts.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<AttitudeSample>,
    capacity: usize,
    total_pushed: u64,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidWindow(capacity));
        }

        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            total_pushed: 0,
        })
    }

    /// Append a sample, returning the evicted one if the buffer was full
    pub fn push(&mut self, sample: AttitudeSample) -> Option<AttitudeSample> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        self.total_pushed += 1;
        evicted
    }

    /// Copy of the buffered samples, oldest first
    pub fn snapshot(&self) -> Vec<AttitudeSample> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AttitudeSample> + '_ {
        self.samples.iter()
    }

    pub fn latest(&self) -> Option<&AttitudeSample> {
        self.samples.back()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples pushed since creation, including evicted ones
    pub fn total_pushed(&self) -> u64 {
        self.total_pushed
    }

    pub fn display_window(&self) -> DisplayWindow {
        DisplayWindow::for_count(self.total_pushed, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seq: u64) -> AttitudeSample {
        AttitudeSample::new(seq as f64, -(seq as f64), seq)
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(HistoryBuffer::new(0).unwrap_err(), ConfigError::InvalidWindow(0));
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        for capacity in 1..=8 {
            let mut buffer = HistoryBuffer::new(capacity).unwrap();
            for seq in 1..=30 {
                buffer.push(sample(seq));
                assert!(buffer.len() <= capacity, "len {} > capacity {}", buffer.len(), capacity);
            }
            assert_eq!(buffer.len(), capacity);
            assert_eq!(buffer.total_pushed(), 30);
        }
    }

    #[test]
    fn test_snapshot_keeps_last_capacity_samples_in_order() {
        let capacity = 4;
        for extra in 0..6u64 {
            let mut buffer = HistoryBuffer::new(capacity).unwrap();
            let pushes = capacity as u64 + extra;
            for seq in 1..=pushes {
                buffer.push(sample(seq));
            }

            let seqs: Vec<u64> = buffer.snapshot().iter().map(|s| s.seq).collect();
            let expected: Vec<u64> = (extra + 1..=pushes).collect();
            assert_eq!(seqs, expected);
        }
    }

    #[test]
    fn test_push_reports_evicted_sample() {
        let mut buffer = HistoryBuffer::new(2).unwrap();
        assert_eq!(buffer.push(sample(1)), None);
        assert_eq!(buffer.push(sample(2)), None);
        assert_eq!(buffer.push(sample(3)), Some(sample(1)));
        assert_eq!(buffer.latest(), Some(&sample(3)));
    }

    #[test]
    fn test_snapshot_is_detached_from_later_pushes() {
        let mut buffer = HistoryBuffer::new(3).unwrap();
        buffer.push(sample(1));
        let snapshot = buffer.snapshot();
        buffer.push(sample(2));
        assert_eq!(snapshot, vec![sample(1)]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_display_window_scrolls_after_fill() {
        let mut buffer = HistoryBuffer::new(5).unwrap();
        assert_eq!(buffer.display_window(), DisplayWindow { lo: 0, hi: 5 });

        for seq in 1..=3 {
            buffer.push(sample(seq));
        }
        assert_eq!(buffer.display_window(), DisplayWindow { lo: 0, hi: 5 });

        for seq in 4..=7 {
            buffer.push(sample(seq));
        }
        assert_eq!(buffer.display_window(), DisplayWindow { lo: 2, hi: 7 });
    }
}

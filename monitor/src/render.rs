use std::sync::Arc;

use attitude::geometry::{self, BAR_HEIGHT, BAR_WIDTH};
use attitude::{AttitudeSample, RotationResult};
use nalgebra as na;

use crate::history::HistoryBuffer;

/// Horizontal range of the time-series plot, in sample counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    pub lo: u64,
    pub hi: u64,
}

impl DisplayWindow {
    /// `[max(0, n - W), max(W, n)]` for `n` samples seen and window `W`
    pub fn for_count(total_samples: u64, window: usize) -> Self {
        let window = window as u64;
        Self {
            lo: total_samples.saturating_sub(window),
            hi: total_samples.max(window),
        }
    }
}

/// Everything a renderer needs for one frame
///
/// Built by the scheduler after a tick and shared behind an `Arc`; it is never
/// mutated after handoff.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// `0..len` positions of the buffered samples
    pub indices: Vec<usize>,

    /// Sequence numbers of the buffered samples
    pub seqs: Vec<u64>,

    /// Pitch of each buffered sample in degrees, oldest first
    pub pitch: Vec<f64>,

    /// Roll of each buffered sample in degrees, oldest first
    pub roll: Vec<f64>,

    /// Rotation of the newest sample
    pub rotation: RotationResult,

    pub window: DisplayWindow,

    pub latest: Option<AttitudeSample>,

    /// Samples seen since the scheduler started
    pub total_samples: u64,

    /// Tick that produced this state; 0 for the initial state
    pub frame: u64,
}

impl RenderState {
    /// Zero samples, level attitude
    pub fn initial(window: usize) -> Self {
        Self {
            indices: Vec::new(),
            seqs: Vec::new(),
            pitch: Vec::new(),
            roll: Vec::new(),
            rotation: RotationResult::identity(),
            window: DisplayWindow::for_count(0, window),
            latest: None,
            total_samples: 0,
            frame: 0,
        }
    }

    pub fn assemble(history: &HistoryBuffer, rotation: RotationResult, frame: u64) -> Self {
        let len = history.len();
        let mut seqs = Vec::with_capacity(len);
        let mut pitch = Vec::with_capacity(len);
        let mut roll = Vec::with_capacity(len);
        for sample in history.iter() {
            seqs.push(sample.seq);
            pitch.push(sample.pitch_deg);
            roll.push(sample.roll_deg);
        }

        Self {
            indices: (0..len).collect(),
            seqs,
            pitch,
            roll,
            rotation,
            window: history.display_window(),
            latest: history.latest().copied(),
            total_samples: history.total_pushed(),
            frame,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Images of the unit X, Y and Z axes under the current rotation
    pub fn rotated_axes(&self) -> [na::Vector3<f64>; 3] {
        self.rotation.rotated_axes()
    }

    /// Corners of the seesaw bar tilted by the current pitch
    pub fn tilt_bar(&self) -> [na::Point2<f64>; 4] {
        geometry::tilt_bar_corners(self.rotation.tilt_deg, BAR_WIDTH, BAR_HEIGHT)
    }

    pub fn title(&self) -> String {
        match &self.latest {
            Some(sample) => format!("Pitch: {:.2}°, Roll: {:.2}°", sample.pitch_deg, sample.roll_deg),
            None => "Waiting for samples".to_string(),
        }
    }
}

/// Display surface fed once per tick
pub trait Renderer {
    /// Draw the latest state
    ///
    /// Called after every tick, including ticks that did not advance, in which
    /// case `state` is the same `Arc` as before.
    fn render(&mut self, state: &Arc<RenderState>);

    /// The scheduler reached its terminal state
    fn stopped(&mut self, _reason: &str) {}
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, state: &Arc<RenderState>) {
        (**self).render(state)
    }

    fn stopped(&mut self, reason: &str) {
        (**self).stopped(reason)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, state: &Arc<RenderState>) {
        (**self).render(state)
    }

    fn stopped(&mut self, reason: &str) {
        (**self).stopped(reason)
    }
}

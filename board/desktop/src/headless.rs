use std::sync::{mpsc, Arc};

use log::info;
use monitor::{FrameScheduler, RenderState, Renderer, SampleSource, TickStats};

/// Logs each new frame instead of drawing it
#[derive(Default)]
pub struct LogRenderer {
    last_frame: Option<u64>,
    pub frames_logged: u64,
    pub stop_reason: Option<String>,
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &Arc<RenderState>) {
        if state.is_empty() || self.last_frame == Some(state.frame) {
            return;
        }
        self.last_frame = Some(state.frame);
        self.frames_logged += 1;
        info!(
            "[{}..{}] #{} {}",
            state.window.lo,
            state.window.hi,
            state.total_samples,
            state.title()
        );
    }

    fn stopped(&mut self, reason: &str) {
        info!("Stopped: {}", reason);
        self.stop_reason = Some(reason.to_owned());
    }
}

/// Run the scheduler on the current thread until it stops on its own
pub fn run_headless<S: SampleSource>(mut scheduler: FrameScheduler<S>) -> anyhow::Result<TickStats> {
    let mut renderer = LogRenderer::default();
    // Held for the whole run; dropping it would stop the scheduler
    let (_tx, rx) = mpsc::channel();
    let stats = scheduler.run(&mut renderer, &rx)?;
    info!(
        "{} ticks: {} advanced, {} skipped, {} faulted",
        stats.ticks, stats.advanced, stats.skipped, stats.faulted
    );
    Ok(stats)
}

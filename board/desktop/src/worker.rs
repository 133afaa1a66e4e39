use std::{
    sync::{mpsc, Arc, RwLock},
    thread::JoinHandle,
};

use anyhow::{anyhow, Context};
use log::{debug, info};
use monitor::{FrameScheduler, RenderState, Renderer, SampleSource, SchedulerCommand, TickStats};

/// Latest frame published by the scheduler thread
#[derive(Debug, Clone)]
pub struct FrameSlot {
    pub state: Arc<RenderState>,
    pub stopped: Option<String>,
}

pub type SharedFrame = Arc<RwLock<FrameSlot>>;

/// Renderer that hands each frame to the UI thread
pub struct SharedRenderer {
    slot: SharedFrame,
}

impl SharedRenderer {
    pub fn new(slot: SharedFrame) -> Self {
        Self { slot }
    }
}

impl Renderer for SharedRenderer {
    fn render(&mut self, state: &Arc<RenderState>) {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        if !Arc::ptr_eq(&slot.state, state) {
            slot.state = Arc::clone(state);
        }
    }

    fn stopped(&mut self, reason: &str) {
        let mut slot = self.slot.write().unwrap_or_else(|p| p.into_inner());
        slot.stopped = Some(reason.to_owned());
    }
}

/// Runs a [`FrameScheduler`] on a background thread
pub struct MonitorWorker {
    shared: SharedFrame,
    to_worker_tx: Option<mpsc::Sender<SchedulerCommand>>,
    worker_thread: Option<JoinHandle<monitor::PipelineResult<TickStats>>>,
}

impl MonitorWorker {
    pub fn spawn<S>(mut scheduler: FrameScheduler<S>) -> anyhow::Result<Self>
    where
        S: SampleSource + Send + 'static,
    {
        let shared = Arc::new(RwLock::new(FrameSlot {
            state: Arc::clone(scheduler.render_state()),
            stopped: None,
        }));
        let (to_worker_tx, to_worker_rx) = mpsc::channel();

        let mut renderer = SharedRenderer::new(Arc::clone(&shared));
        let worker_thread = std::thread::Builder::new()
            .name("frame-scheduler".into())
            .spawn(move || {
                info!("Scheduler started with {} source", scheduler.source().name());
                scheduler.run(&mut renderer, &to_worker_rx)
            })
            .context("Failed to spawn scheduler thread")?;

        Ok(Self {
            shared,
            to_worker_tx: Some(to_worker_tx),
            worker_thread: Some(worker_thread),
        })
    }

    pub fn shared(&self) -> SharedFrame {
        Arc::clone(&self.shared)
    }

    /// Ask the scheduler to stop and wait for it
    ///
    /// Returns the final counters, or the fault that stopped it.
    pub fn stop(&mut self) -> anyhow::Result<TickStats> {
        if let Some(tx) = self.to_worker_tx.take() {
            // The scheduler may already be gone after a fatal fault
            let _ = tx.send(SchedulerCommand::Stop);
        }

        let handle = self
            .worker_thread
            .take()
            .ok_or_else(|| anyhow!("Scheduler already stopped"))?;
        let stats = handle
            .join()
            .map_err(|_| anyhow!("Scheduler thread panicked"))??;
        debug!("Scheduler finished: {:?}", stats);
        Ok(stats)
    }
}

impl Drop for MonitorWorker {
    fn drop(&mut self) {
        if self.worker_thread.is_some() {
            let _ = self.stop();
        }
    }
}

use std::sync::{mpsc, Arc};
use std::time::Instant;

use attitude::RotationEngine;
use log::{debug, error, info, warn};

use crate::config::PipelineConfig;
use crate::error::{ConfigError, PipelineError, PipelineResult, SourceError};
use crate::history::HistoryBuffer;
use crate::render::{RenderState, Renderer};
use crate::source::SampleSource;

/// Lifecycle of a scheduler; `Stopped` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// How a single tick resolved
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// A new sample was buffered and a new render state built
    Advanced,
    /// The source had nothing; render state unchanged
    Skipped,
    /// The source reported a recoverable fault; render state unchanged
    Faulted(SourceError),
}

/// Requests delivered to a running scheduler at tick boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCommand {
    Stop,
}

/// Per-outcome tick counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    pub ticks: u64,
    pub advanced: u64,
    pub skipped: u64,
    pub faulted: u64,
}

/// Fixed-interval driver of the attitude pipeline
///
/// Owns the source, the history buffer and the current render state. Ticks run
/// strictly one after another on the caller's thread.
pub struct FrameScheduler<S> {
    source: S,
    history: HistoryBuffer,
    engine: RotationEngine,
    config: PipelineConfig,
    state: SchedulerState,
    render_state: Arc<RenderState>,
    stats: TickStats,
}

impl<S: SampleSource> FrameScheduler<S> {
    /// Validate the configuration and build an idle scheduler
    pub fn new(config: PipelineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = HistoryBuffer::new(config.window)?;

        Ok(Self {
            source,
            history,
            engine: RotationEngine::new(),
            render_state: Arc::new(RenderState::initial(config.window)),
            config,
            state: SchedulerState::Idle,
            stats: TickStats::default(),
        })
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Latest render state; unchanged by ticks that did not advance
    pub fn render_state(&self) -> &Arc<RenderState> {
        &self.render_state
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    /// Enter `Running` with a level, empty render state
    pub fn start(&mut self) -> PipelineResult<()> {
        if self.state != SchedulerState::Idle {
            return Err(PipelineError::InvalidTransition {
                from: self.state,
                to: SchedulerState::Running,
            });
        }

        self.render_state = Arc::new(RenderState::initial(self.config.window));
        self.state = SchedulerState::Running;
        info!(
            "{} pipeline running: window {}, tick every {:?}",
            self.source.name(),
            self.config.window,
            self.config.tick_interval
        );
        Ok(())
    }

    /// Enter `Stopped`; no further ticks will run
    pub fn stop(&mut self) {
        if self.state != SchedulerState::Stopped {
            info!("{} pipeline stopped after {} ticks", self.source.name(), self.stats.ticks);
            self.state = SchedulerState::Stopped;
        }
    }

    /// Poll the source once and update the pipeline
    ///
    /// Recoverable source faults are logged and returned as
    /// [`TickOutcome::Faulted`]; a fatal fault stops the scheduler and is returned
    /// as [`PipelineError::SourceFatal`].
    pub fn tick(&mut self) -> PipelineResult<TickOutcome> {
        if self.state != SchedulerState::Running {
            return Err(PipelineError::NotRunning(self.state));
        }

        self.stats.ticks += 1;
        let tick = self.stats.ticks;

        match self.source.poll() {
            Ok(Some(sample)) => {
                self.history.push(sample);
                let rotation = self.engine.compute(&sample);
                self.render_state = Arc::new(RenderState::assemble(&self.history, rotation, tick));
                self.stats.advanced += 1;
                debug!(
                    "tick {}: sample {} pitch {:.2} roll {:.2}",
                    tick, sample.seq, sample.pitch_deg, sample.roll_deg
                );
                Ok(TickOutcome::Advanced)
            }
            Ok(None) => {
                self.stats.skipped += 1;
                debug!("tick {}: no sample", tick);
                Ok(TickOutcome::Skipped)
            }
            Err(err) if err.is_fatal() => {
                error!("tick {}: {} source failed: {}", tick, self.source.name(), err);
                self.state = SchedulerState::Stopped;
                Err(PipelineError::SourceFatal(err))
            }
            Err(err) => {
                self.stats.faulted += 1;
                warn!("tick {}: {} source fault: {}", tick, self.source.name(), err);
                Ok(TickOutcome::Faulted(err))
            }
        }
    }

    /// Tick at the configured interval until stopped, rendering after every tick
    ///
    /// Stops on [`SchedulerCommand::Stop`], when the command channel disconnects,
    /// once `max_ticks` ticks have run, or on a fatal source fault (returned as an
    /// error). Commands are only observed between ticks.
    pub fn run<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        commands: &mpsc::Receiver<SchedulerCommand>,
    ) -> PipelineResult<TickStats> {
        if self.state == SchedulerState::Idle {
            self.start()?;
        }
        if self.state != SchedulerState::Running {
            return Err(PipelineError::NotRunning(self.state));
        }

        renderer.render(&self.render_state);

        let interval = self.config.tick_interval;
        let mut last_tick = Instant::now();
        let reason = loop {
            match commands.try_recv() {
                Ok(SchedulerCommand::Stop) => break "stop requested",
                Err(mpsc::TryRecvError::Disconnected) => break "controller disconnected",
                Err(mpsc::TryRecvError::Empty) => {}
            }

            if let Some(max_ticks) = self.config.max_ticks {
                if self.stats.ticks >= max_ticks {
                    break "tick limit reached";
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed < interval {
                std::thread::sleep(interval - elapsed);
                continue;
            }
            last_tick = Instant::now();

            match self.tick() {
                Ok(_) => renderer.render(&self.render_state),
                Err(err) => {
                    renderer.stopped(&err.to_string());
                    return Err(err);
                }
            }
        };

        self.stop();
        renderer.stopped(reason);
        Ok(self.stats)
    }
}

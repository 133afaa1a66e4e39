use anyhow::anyhow;
use clap::Parser;
use log::info;
use monitor::{FrameScheduler, SampleSource, SourceKind, StreamReader, SyntheticGenerator};

mod app;
mod cli;
mod draw;
mod headless;
mod transport;
mod worker;

use app::MonitorApp;
use cli::Args;
use transport::ThreadedLineReader;
use worker::MonitorWorker;

fn build_source(args: &Args) -> anyhow::Result<Box<dyn SampleSource + Send>> {
    Ok(match args.source_kind() {
        SourceKind::Synthetic => Box::new(SyntheticGenerator::new()),
        SourceKind::Stream => {
            let transport = ThreadedLineReader::open(&args.port)?;
            info!("Reading attitude records from {}", args.port);
            Box::new(StreamReader::new(transport, args.stream_config())?)
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = args.pipeline_config();
    let display = args.display_mode();
    let repaint_interval = config.tick_interval;
    let scheduler = FrameScheduler::new(config, build_source(&args)?)?;

    if args.headless {
        headless::run_headless(scheduler)?;
        return Ok(());
    }

    let mut worker = MonitorWorker::spawn(scheduler)?;
    let shared = worker.shared();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 800.0]),
        ..Default::default()
    };
    let ui_result = eframe::run_native(
        "Attitude Monitor",
        options,
        Box::new(move |cc| Ok(Box::new(MonitorApp::new(cc, shared, display, repaint_interval)))),
    );

    let stats = worker.stop();
    ui_result.map_err(|e| anyhow!("Failed to run monitor window: {}", e))?;
    let stats = stats?;
    info!(
        "{} ticks: {} advanced, {} skipped, {} faulted",
        stats.ticks, stats.advanced, stats.skipped, stats.faulted
    );
    Ok(())
}

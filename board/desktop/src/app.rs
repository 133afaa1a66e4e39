use std::time::Duration;

use egui::{Color32, Vec2};
use monitor::DisplayMode;

use crate::draw;
use crate::worker::{FrameSlot, SharedFrame};

enum State {
    Running,
    Stopped(String),
}

pub struct MonitorApp {
    state: State,
    frame: SharedFrame,
    display: DisplayMode,
    repaint_interval: Duration,
}

impl MonitorApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        frame: SharedFrame,
        display: DisplayMode,
        repaint_interval: Duration,
    ) -> Self {
        Self {
            state: State::Running,
            frame,
            display,
            repaint_interval,
        }
    }

    fn latest(&self) -> FrameSlot {
        self.frame.read().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl eframe::App for MonitorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let slot = self.latest();
        if let (true, Some(reason)) = (matches!(self.state, State::Running), &slot.stopped) {
            log::info!("Display frozen: {}", reason);
            self.state = State::Stopped(reason.clone());
        }

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(slot.state.title());
                if let State::Stopped(reason) = &self.state {
                    ui.colored_label(Color32::RED, format!("Stopped: {}", reason));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let spacing = ui.spacing().item_spacing.y;
            let series_height = (available.y - spacing) * 0.5;
            draw::time_series(ui, Vec2::new(available.x, series_height), &slot.state);

            let view = Vec2::new(available.x, available.y - series_height - spacing);
            match self.display {
                DisplayMode::TiltBar => draw::tilt_bar(ui, view, &slot.state),
                DisplayMode::AxisFrame => draw::axis_frame(ui, view, &slot.state),
            }
        });

        if let State::Running = self.state {
            ctx.request_repaint_after(self.repaint_interval);
        }
    }
}

//! Painters for the monitor window
//!
//! Plot coordinates are mapped onto the allocated rect by [`PlotFrame`].

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};
use monitor::RenderState;
use nalgebra as na;

const PITCH_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const ROLL_COLOR: Color32 = Color32::from_rgb(255, 127, 14);
const AXIS_COLORS: [Color32; 3] = [Color32::RED, Color32::GREEN, Color32::BLUE];
const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

/// Vertical range of the time series, degrees
const ANGLE_LIMIT: f64 = 90.0;

const TILT_X_LIMIT: f64 = 2.0;
const TILT_Y_LIMIT: f64 = 1.2;

/// Camera used for the axis view, degrees
const AZIMUTH_DEG: f64 = -60.0;
const ELEVATION_DEG: f64 = 30.0;

/// Linear map from plot space to screen space
struct PlotFrame {
    rect: Rect,
    x: (f64, f64),
    y: (f64, f64),
}

impl PlotFrame {
    fn new(rect: Rect, x: (f64, f64), y: (f64, f64)) -> Self {
        Self { rect, x, y }
    }

    fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        let fx = (x - self.x.0) / (self.x.1 - self.x.0);
        let fy = (y - self.y.0) / (self.y.1 - self.y.0);
        Pos2::new(
            self.rect.left() + fx as f32 * self.rect.width(),
            self.rect.bottom() - fy as f32 * self.rect.height(),
        )
    }
}

fn allocate(ui: &mut egui::Ui, size: Vec2) -> (Painter, Rect) {
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
    (painter, rect.shrink(8.0))
}

/// Pitch and roll against sample sequence over the display window
pub fn time_series(ui: &mut egui::Ui, size: Vec2, state: &RenderState) {
    let (painter, rect) = allocate(ui, size);
    let window = state.window;
    let plot = PlotFrame::new(
        rect,
        (window.lo as f64, window.hi as f64),
        (-ANGLE_LIMIT, ANGLE_LIMIT),
    );
    let grid = Stroke::new(1.0, Color32::from_gray(80));

    for level in [-ANGLE_LIMIT, -45.0, 0.0, 45.0, ANGLE_LIMIT] {
        let left = plot.to_screen(window.lo as f64, level);
        let right = plot.to_screen(window.hi as f64, level);
        painter.line_segment([left, right], grid);
        painter.text(
            left,
            Align2::LEFT_BOTTOM,
            format!("{:.0}°", level),
            FontId::monospace(10.0),
            Color32::GRAY,
        );
    }

    for (values, color) in [(&state.pitch, PITCH_COLOR), (&state.roll, ROLL_COLOR)] {
        let points: Vec<Pos2> = state
            .seqs
            .iter()
            .zip(values.iter())
            .map(|(&seq, &angle)| plot.to_screen(seq as f64, angle.clamp(-ANGLE_LIMIT, ANGLE_LIMIT)))
            .collect();
        if points.len() > 1 {
            painter.add(Shape::line(points, Stroke::new(1.5, color)));
        }
    }

    painter.text(
        rect.right_top(),
        Align2::RIGHT_TOP,
        "pitch",
        FontId::proportional(12.0),
        PITCH_COLOR,
    );
    painter.text(
        rect.right_top() + Vec2::new(0.0, 14.0),
        Align2::RIGHT_TOP,
        "roll",
        FontId::proportional(12.0),
        ROLL_COLOR,
    );
}

/// Seesaw bar rotated by the current pitch
pub fn tilt_bar(ui: &mut egui::Ui, size: Vec2, state: &RenderState) {
    let (painter, rect) = allocate(ui, size);
    let plot = PlotFrame::new(
        rect,
        (-TILT_X_LIMIT, TILT_X_LIMIT),
        (-TILT_Y_LIMIT, TILT_Y_LIMIT),
    );

    painter.line_segment(
        [plot.to_screen(-TILT_X_LIMIT, 0.0), plot.to_screen(TILT_X_LIMIT, 0.0)],
        Stroke::new(1.0, Color32::from_gray(80)),
    );

    let corners: Vec<Pos2> = state
        .tilt_bar()
        .iter()
        .map(|p| plot.to_screen(p.x, p.y))
        .collect();
    painter.add(Shape::convex_polygon(corners, PITCH_COLOR, Stroke::new(1.0, Color32::WHITE)));
}

/// Body axes after rotation, seen from a fixed camera
pub fn axis_frame(ui: &mut egui::Ui, size: Vec2, state: &RenderState) {
    let (painter, rect) = allocate(ui, size);
    let plot = PlotFrame::new(square(rect), (-1.2, 1.2), (-1.2, 1.2));
    let origin = plot.to_screen(0.0, 0.0);

    for ((axis, color), label) in state.rotated_axes().iter().zip(AXIS_COLORS).zip(AXIS_LABELS) {
        let (x, y) = project(axis);
        let tip = plot.to_screen(x, y);
        painter.line_segment([origin, tip], Stroke::new(2.5, color));
        painter.text(tip, Align2::LEFT_BOTTOM, label, FontId::proportional(14.0), color);
    }
}

fn square(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height());
    Rect::from_center_size(rect.center(), Vec2::splat(side))
}

/// Orthographic projection onto the camera's image plane
fn project(v: &na::Vector3<f64>) -> (f64, f64) {
    let az = AZIMUTH_DEG.to_radians();
    let el = ELEVATION_DEG.to_radians();
    let right = na::Vector3::new(-az.sin(), az.cos(), 0.0);
    let up = na::Vector3::new(-el.sin() * az.cos(), -el.sin() * az.sin(), el.cos());
    (v.dot(&right), v.dot(&up))
}

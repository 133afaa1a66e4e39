use nalgebra as na;

use crate::utils;

/// Length of the tilt bar in display units
pub const BAR_WIDTH: f64 = 3.0;

/// Thickness of the tilt bar in display units
pub const BAR_HEIGHT: f64 = 0.2;

/// Rotate the unit X, Y and Z axes
pub fn rotate_axes(matrix: &na::Matrix3<f64>) -> [na::Vector3<f64>; 3] {
    [
        matrix * na::Vector3::x(),
        matrix * na::Vector3::y(),
        matrix * na::Vector3::z(),
    ]
}

/// Corners of a bar centered on the origin, rotated counter-clockwise by `tilt_deg`
///
/// Corners are ordered bottom-left, bottom-right, top-right, top-left in the
/// bar's own frame.
pub fn tilt_bar_corners(tilt_deg: f64, width: f64, height: f64) -> [na::Point2<f64>; 4] {
    let rotation = na::Rotation2::new(utils::deg_to_rad(tilt_deg));
    let (hw, hh) = (width / 2.0, height / 2.0);

    [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)].map(|(x, y)| rotation * na::Point2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_level_bar() {
        let corners = tilt_bar_corners(0.0, BAR_WIDTH, BAR_HEIGHT);
        assert_abs_diff_eq!(corners[0], na::Point2::new(-1.5, -0.1), epsilon = 1e-12);
        assert_abs_diff_eq!(corners[2], na::Point2::new(1.5, 0.1), epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_turn_bar_stands_upright() {
        let corners = tilt_bar_corners(90.0, BAR_WIDTH, BAR_HEIGHT);
        // Right end of the bar ends up on top
        assert_abs_diff_eq!(corners[1], na::Point2::new(0.1, 1.5), epsilon = 1e-12);
        assert_abs_diff_eq!(corners[3], na::Point2::new(-0.1, -1.5), epsilon = 1e-12);
    }

    #[test]
    fn test_identity_axes() {
        let axes = rotate_axes(&na::Matrix3::identity());
        assert_eq!(axes, [na::Vector3::x(), na::Vector3::y(), na::Vector3::z()]);
    }
}

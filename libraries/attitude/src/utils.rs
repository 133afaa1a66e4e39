use core::f64::consts::PI;

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversion() {
        assert_eq!(deg_to_rad(0.0), 0.0);
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(deg_to_rad(-90.0), -PI / 2.0);
        assert_relative_eq!(deg_to_rad(45.0), PI / 4.0, epsilon = 1e-12);
    }
}

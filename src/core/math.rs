//! Angle conversions and batch coordinate transforms.
//!
//! All angles are in radians unless the function name says otherwise.
//! Counter-clockwise positive, angle 0 along +X.

use std::f64::consts::PI;

/// Convert degrees to radians.
///
/// # Example
/// ```
/// use kona::core::math::deg_to_rad;
///
/// assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
/// ```
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Convert uniformly spaced range readings to parallel Cartesian arrays.
///
/// For index `i`, `theta_i = start_angle + i·angle_increment` and
/// `xs[i] = ranges[i]·cos(theta_i)`, `ys[i] = ranges[i]·sin(theta_i)`.
///
/// Writes `min(ranges.len(), xs.len(), ys.len())` entries; any extra output
/// slots are left untouched.
///
/// # Example
/// ```
/// use kona::core::math::polar_to_cartesian_array;
/// use std::f64::consts::FRAC_PI_2;
///
/// let ranges = [1.0, 2.0];
/// let mut xs = [0.0; 2];
/// let mut ys = [0.0; 2];
/// polar_to_cartesian_array(&ranges, &mut xs, &mut ys, 0.0, FRAC_PI_2);
///
/// assert!((xs[0] - 1.0).abs() < 1e-12);
/// assert!((ys[1] - 2.0).abs() < 1e-12);
/// ```
pub fn polar_to_cartesian_array(
    ranges: &[f64],
    xs: &mut [f64],
    ys: &mut [f64],
    start_angle: f64,
    angle_increment: f64,
) {
    for (i, ((&r, x), y)) in ranges
        .iter()
        .zip(xs.iter_mut())
        .zip(ys.iter_mut())
        .enumerate()
    {
        let theta = start_angle + i as f64 * angle_increment;
        let (sin, cos) = theta.sin_cos();
        *x = r * cos;
        *y = r * sin;
    }
}

/// Allocating variant of [`polar_to_cartesian_array`].
///
/// Returns `(xs, ys)` with one entry per range reading.
pub fn polar_to_cartesian_vec(
    ranges: &[f64],
    start_angle: f64,
    angle_increment: f64,
) -> (Vec<f64>, Vec<f64>) {
    let mut xs = vec![0.0; ranges.len()];
    let mut ys = vec![0.0; ranges.len()];
    polar_to_cartesian_array(ranges, &mut xs, &mut ys, start_angle, angle_increment);
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_degree_conversions() {
        assert_relative_eq!(deg_to_rad(90.0), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(rad_to_deg(FRAC_PI_4), 45.0, epsilon = 1e-12);
        assert_relative_eq!(rad_to_deg(deg_to_rad(240.0)), 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_array_uses_start_and_increment() {
        let ranges = [1.0, 1.0, 1.0];
        let (xs, ys) = polar_to_cartesian_vec(&ranges, FRAC_PI_4, FRAC_PI_4);

        // Angles 45°, 90°, 135°
        assert_relative_eq!(xs[0], FRAC_PI_4.cos(), epsilon = 1e-12);
        assert_relative_eq!(ys[0], FRAC_PI_4.sin(), epsilon = 1e-12);
        assert_relative_eq!(xs[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(ys[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(xs[2], -FRAC_PI_4.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_array_short_output_is_not_overrun() {
        let ranges = [1.0, 2.0, 3.0, 4.0];
        let mut xs = [0.0; 2];
        let mut ys = [0.0; 3];
        polar_to_cartesian_array(&ranges, &mut xs, &mut ys, 0.0, 0.0);

        assert_eq!(xs, [1.0, 2.0]);
        assert_eq!(ys, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_array_empty() {
        let (xs, ys) = polar_to_cartesian_vec(&[], 0.0, 0.1);
        assert!(xs.is_empty());
        assert!(ys.is_empty());
    }
}

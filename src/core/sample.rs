//! Polar sample type.

use serde::{Deserialize, Serialize};

use super::Point2D;
use super::math::rad_to_deg;

/// A single polar measurement, or a corner derived from one.
///
/// Only the polar fields are stored. The Cartesian position is computed on
/// demand by [`Sample::to_cartesian`], so mutating `theta` or `r` can never
/// leave a stale projection behind.
///
/// Angle 0 is the sensor's X axis, positive angles are counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    /// Angle in radians
    pub theta: f64,
    /// Range, in the same unit as the Cartesian coordinates
    pub r: f64,
}

impl Sample {
    /// Create a new sample
    #[inline]
    pub fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }

    /// Project to Cartesian: `x = r·cos(theta)`, `y = r·sin(theta)`.
    ///
    /// Negative ranges are projected as-is.
    #[inline]
    pub fn to_cartesian(&self) -> Point2D {
        let (sin, cos) = self.theta.sin_cos();
        Point2D::new(self.r * cos, self.r * sin)
    }

    /// Angle in degrees
    #[inline]
    pub fn theta_degrees(&self) -> f64 {
        rad_to_deg(self.theta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_to_cartesian_axes() {
        let p = Sample::new(0.0, 2.0).to_cartesian();
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);

        let p = Sample::new(FRAC_PI_2, 3.0).to_cartesian();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_to_cartesian_preserves_polar_geometry() {
        for i in 0..72 {
            let theta = -PI + i as f64 * (TAU / 72.0) + 0.01;
            let r = 50.0 + 37.5 * i as f64;
            let p = Sample::new(theta, r).to_cartesian();

            assert_relative_eq!(p.length(), r, max_relative = 1e-12);

            // atan2 agrees with theta modulo a full turn
            let back = p.y.atan2(p.x);
            assert_relative_eq!(back.sin(), theta.sin(), epsilon = 1e-9);
            assert_relative_eq!(back.cos(), theta.cos(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_to_cartesian_negative_range() {
        let p = Sample::new(0.0, -1.5).to_cartesian();
        assert_relative_eq!(p.x, -1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_follows_mutation() {
        let mut s = Sample::new(0.0, 1.0);
        s.theta = FRAC_PI_2;
        s.r = 4.0;
        let p = s.to_cartesian();
        assert_relative_eq!(p.y, 4.0, epsilon = 1e-12);
        assert_relative_eq!(s.theta_degrees(), 90.0, epsilon = 1e-12);
    }
}

//! Range scan types.
//!
//! A [`RangeScan`] is the raw input of the corner pipeline: one range reading
//! per angular step, plus the [`ScanGeometry`] that places each reading.

use serde::{Deserialize, Serialize};

use super::Point2D;
use super::Sample;
use super::math::polar_to_cartesian_vec;

/// Angular layout of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ScanGeometry {
    /// Angle of the first reading (radians)
    pub start_angle: f64,
    /// Angle step between consecutive readings (radians)
    pub angle_increment: f64,
}

impl ScanGeometry {
    /// Create a geometry from start angle and increment.
    pub fn new(start_angle: f64, angle_increment: f64) -> Self {
        Self {
            start_angle,
            angle_increment,
        }
    }

    /// Create a geometry spreading `count` readings evenly over `[start, end]`.
    ///
    /// Both ends are sampled, so the increment is `(end - start) / (count - 1)`.
    /// With fewer than two readings the increment is zero.
    pub fn from_field_of_view(start_angle: f64, end_angle: f64, count: usize) -> Self {
        let angle_increment = if count > 1 {
            (end_angle - start_angle) / (count - 1) as f64
        } else {
            0.0
        };
        Self::new(start_angle, angle_increment)
    }

    /// Angle of reading `index`.
    #[inline]
    pub fn angle_at(&self, index: usize) -> f64 {
        self.start_angle + index as f64 * self.angle_increment
    }
}

/// Raw range readings with their geometry.
#[derive(Clone, Debug, Default)]
pub struct RangeScan {
    /// Range readings in scan order
    pub ranges: Vec<f64>,
    /// Angular layout
    pub geometry: ScanGeometry,
}

impl RangeScan {
    /// Create a scan from readings and geometry.
    pub fn new(ranges: Vec<f64>, geometry: ScanGeometry) -> Self {
        Self { ranges, geometry }
    }

    /// Create a scan whose readings evenly cover `[start_angle, end_angle]`.
    pub fn from_field_of_view(ranges: Vec<f64>, start_angle: f64, end_angle: f64) -> Self {
        let geometry = ScanGeometry::from_field_of_view(start_angle, end_angle, ranges.len());
        Self { ranges, geometry }
    }

    /// Number of readings.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the scan has no readings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over readings as polar samples.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.ranges
            .iter()
            .enumerate()
            .map(|(i, &r)| Sample::new(self.geometry.angle_at(i), r))
    }

    /// One polar sample per reading, in scan order.
    pub fn to_samples(&self) -> Vec<Sample> {
        self.iter().collect()
    }

    /// Parallel Cartesian arrays `(xs, ys)` for every reading.
    pub fn to_cartesian(&self) -> (Vec<f64>, Vec<f64>) {
        polar_to_cartesian_vec(
            &self.ranges,
            self.geometry.start_angle,
            self.geometry.angle_increment,
        )
    }

    /// Cartesian points for every reading.
    pub fn to_points(&self) -> Vec<Point2D> {
        self.iter().map(|s| s.to_cartesian()).collect()
    }
}

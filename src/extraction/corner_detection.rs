//! Sliding-window corner detection with angle hysteresis.
//!
//! For each index `i`, the samples `span` steps behind and ahead form two
//! legs `prev→cur` and `cur→next`. The turning angle between the legs is
//! compared against an open angle window. A sample is only reported when the
//! window qualifies at two consecutive evaluated positions, which suppresses
//! single-sample noise.

use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::core::math::deg_to_rad;

/// Legs shorter than this produce an angle of zero.
pub const DEGENERATE_LEG_EPSILON: f64 = 1e-9;

/// Configuration for corner detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerDetectorConfig {
    /// Lower bound of the turning angle (radians, exclusive).
    /// Default: 60°
    pub angle_lower: f64,

    /// Upper bound of the turning angle (radians, exclusive).
    /// Default: 120°
    pub angle_upper: f64,

    /// Samples between the window center and each comparison neighbor.
    /// Default: 6
    pub span: usize,

    /// Maximum Cartesian length of either leg. Longer legs skip the window.
    /// Default: 180 (6 samples × 30 mm)
    pub distance_threshold: f64,
}

impl Default for CornerDetectorConfig {
    fn default() -> Self {
        Self::from_target(deg_to_rad(90.0), deg_to_rad(30.0), 6, 30.0)
    }
}

impl CornerDetectorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a window of `target ± half_range` radians.
    ///
    /// The leg threshold scales with the span: `span × distance_per_step`.
    pub fn from_target(
        target: f64,
        half_range: f64,
        span: usize,
        distance_per_step: f64,
    ) -> Self {
        Self {
            angle_lower: target - half_range,
            angle_upper: target + half_range,
            span,
            distance_threshold: span as f64 * distance_per_step,
        }
    }

    /// Builder-style setter for the angle window.
    pub fn with_angle_window(mut self, lower: f64, upper: f64) -> Self {
        self.angle_lower = lower;
        self.angle_upper = upper;
        self
    }

    /// Builder-style setter for span.
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Builder-style setter for the leg distance threshold.
    pub fn with_distance_threshold(mut self, threshold: f64) -> Self {
        self.distance_threshold = threshold;
        self
    }

    #[inline]
    fn angle_qualifies(&self, angle: f64) -> bool {
        angle > self.angle_lower && angle < self.angle_upper
    }
}

/// Turning angle at `cur` between legs `prev→cur` and `cur→next` (0 to π).
///
/// Collinear points give 0, a right-angle turn gives π/2. If either leg is
/// shorter than [`DEGENERATE_LEG_EPSILON`] the angle is 0.
pub fn angle_at(prev: &Sample, cur: &Sample, next: &Sample) -> f64 {
    let c1 = prev.to_cartesian();
    let c2 = cur.to_cartesian();
    let c3 = next.to_cartesian();

    let v1 = c2 - c1;
    let v2 = c3 - c2;

    let n1 = v1.length();
    let n2 = v2.length();
    if n1 < DEGENERATE_LEG_EPSILON || n2 < DEGENERATE_LEG_EPSILON {
        return 0.0;
    }

    let u1 = v1 * (1.0 / n1);
    let u2 = v2 * (1.0 / n2);

    // Clamp to handle floating-point errors
    u1.dot(&u2).clamp(-1.0, 1.0).acos()
}

/// Detect corner samples in a masked scan.
///
/// Evaluates every index `span ≤ i < n - span` left to right. Scans shorter
/// than `2·span + 1` samples yield no corners.
///
/// # Returns
/// Detected samples in scan order (possibly empty).
pub fn detect_corners(samples: &[Sample], config: &CornerDetectorConfig) -> Vec<Sample> {
    let span = config.span;
    let n = samples.len();
    let mut corners = Vec::new();
    let mut prev_corner = false;

    for i in span..n.saturating_sub(span) {
        let prev = &samples[i - span];
        let cur = &samples[i];
        let next = &samples[i + span];

        let c_prev = prev.to_cartesian();
        let c_cur = cur.to_cartesian();
        let c_next = next.to_cartesian();
        let d1 = c_cur.distance(&c_prev);
        let d2 = c_next.distance(&c_cur);

        if d1 > config.distance_threshold || d2 > config.distance_threshold {
            // The hysteresis flag is deliberately left as-is on this path.
            // A long leg between two qualifying windows therefore does not
            // break the pair. Possibly unintended, kept for compatibility.
            continue;
        }

        let angle = angle_at(prev, cur, next);
        if config.angle_qualifies(angle) {
            if prev_corner {
                corners.push(*cur);
            }
            prev_corner = true;
        } else {
            prev_corner = false;
        }
    }

    corners
}

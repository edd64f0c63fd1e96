//! Angular blob reduction of raw corner candidates.
//!
//! The detector usually fires on a few neighboring samples around every real
//! corner. Candidates whose angles chain together within a threshold form a
//! blob, and each blob is collapsed to the single candidate whose angle is
//! closest to a target.

use serde::{Deserialize, Serialize};

use crate::core::Sample;
use crate::core::math::deg_to_rad;

/// Configuration for blob reduction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlobReducerConfig {
    /// Angle each blob's representative should be closest to (radians).
    /// Default: 90°
    pub target_angle: f64,

    /// Maximum gap between angularly adjacent candidates in one blob (radians).
    /// A gap strictly greater than this starts a new blob.
    /// Default: 0.5°
    pub grouping_threshold: f64,
}

impl Default for BlobReducerConfig {
    fn default() -> Self {
        Self {
            target_angle: deg_to_rad(90.0),
            grouping_threshold: deg_to_rad(0.5),
        }
    }
}

impl BlobReducerConfig {
    /// Create a configuration from target and threshold (radians).
    pub fn new(target_angle: f64, grouping_threshold: f64) -> Self {
        Self {
            target_angle,
            grouping_threshold,
        }
    }
}

/// Collapse angularly adjacent candidates to one representative per blob.
///
/// Candidates are sorted by `theta`, then split wherever the gap between
/// neighbors exceeds `grouping_threshold`. Within a blob the candidate
/// minimizing `|theta - target_angle|` wins; ties go to the first (lowest
/// angle) candidate.
///
/// # Returns
/// One sample per blob, in ascending angle order. Empty for empty input.
pub fn reduce_corner_blobs(corners: &[Sample], config: &BlobReducerConfig) -> Vec<Sample> {
    if corners.is_empty() {
        return Vec::new();
    }

    let mut sorted = corners.to_vec();
    sorted.sort_by(|a, b| a.theta.total_cmp(&b.theta));

    let mut reduced = Vec::new();
    let mut start = 0;

    for i in 1..=sorted.len() {
        let blob_ends = i == sorted.len()
            || (sorted[i].theta - sorted[i - 1].theta).abs() > config.grouping_threshold;
        if !blob_ends {
            continue;
        }

        reduced.push(closest_to_target(&sorted[start..i], config.target_angle));
        start = i;
    }

    reduced
}

/// First sample with minimal angular distance to `target`.
fn closest_to_target(blob: &[Sample], target: f64) -> Sample {
    let mut best = blob[0];
    let mut best_diff = (best.theta - target).abs();

    for s in &blob[1..] {
        let diff = (s.theta - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = *s;
        }
    }

    best
}

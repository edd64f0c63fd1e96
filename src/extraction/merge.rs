//! Distance-based merging of duplicate corners.
//!
//! Corners closer than a minimum Cartesian distance are merged pairwise by
//! averaging their polar coordinates. Merging chains: a surviving corner keeps
//! absorbing later neighbors using its already-averaged angle and range.

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Sample};

/// Configuration for duplicate merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Corners closer than this (strictly) are merged.
    /// Default: 50 (mm)
    pub min_distance: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { min_distance: 50.0 }
    }
}

impl MergeConfig {
    /// Create a configuration with the given minimum separation.
    pub fn new(min_distance: f64) -> Self {
        Self { min_distance }
    }
}

/// Merge corners that lie closer than `min_distance` to each other.
///
/// Pairs are visited with `i` ascending and `j > i` ascending. When both are
/// still kept and their distance is below `min_distance`, corner `i` takes the
/// arithmetic mean of the two `theta` and `r` values and `j` is discarded.
///
/// Distances always use positions computed once from the input, before any
/// averaging. The survivors are returned in their original relative order.
///
/// # Complexity
/// O(n²), fine for the handful of corners a scan produces.
pub fn merge_close_corners(mut corners: Vec<Sample>, min_distance: f64) -> Vec<Sample> {
    if corners.len() <= 1 {
        return corners;
    }

    let n = corners.len();
    let positions: Vec<Point2D> = corners.iter().map(Sample::to_cartesian).collect();
    let mut keep = vec![true; n];

    for i in 0..n {
        if !keep[i] {
            continue;
        }

        for j in i + 1..n {
            if !keep[j] {
                continue;
            }

            if positions[i].distance(&positions[j]) < min_distance {
                let absorbed = corners[j];
                let survivor = &mut corners[i];
                survivor.theta = 0.5 * (survivor.theta + absorbed.theta);
                survivor.r = 0.5 * (survivor.r + absorbed.r);
                keep[j] = false;
            }
        }
    }

    corners
        .into_iter()
        .zip(keep)
        .filter_map(|(corner, kept)| kept.then_some(corner))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_and_single_unchanged() {
        assert!(merge_close_corners(Vec::new(), 50.0).is_empty());

        let single = vec![Sample::new(1.0, 2.0)];
        assert_eq!(merge_close_corners(single.clone(), 50.0), single);
    }

    #[test]
    fn test_far_corners_untouched() {
        let corners = vec![Sample::new(0.0, 1000.0), Sample::new(1.0, 1000.0)];
        assert_eq!(merge_close_corners(corners.clone(), 50.0), corners);
    }

    #[test]
    fn test_pair_averages_polar_fields() {
        let corners = vec![Sample::new(0.50, 1000.0), Sample::new(0.52, 1010.0)];

        let merged = merge_close_corners(corners, 50.0);

        assert_eq!(merged.len(), 1);
        assert_relative_eq!(merged[0].theta, 0.51, epsilon = 1e-12);
        assert_relative_eq!(merged[0].r, 1005.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_is_polar_not_cartesian() {
        // Mirror images across the X axis: the Cartesian midpoint lies at
        // r·cos(0.02), the polar mean keeps the full range.
        let corners = vec![Sample::new(-0.02, 1000.0), Sample::new(0.02, 1000.0)];

        let merged = merge_close_corners(corners, 50.0);

        assert_eq!(merged.len(), 1);
        assert_relative_eq!(merged[0].theta, 0.0, epsilon = 1e-12);
        assert_relative_eq!(merged[0].r, 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chain_merges_in_index_order() {
        // All three within 50 of each other (spacing ~10 along an arc).
        let corners = vec![
            Sample::new(0.00, 1000.0),
            Sample::new(0.01, 1004.0),
            Sample::new(0.02, 1008.0),
        ];

        let merged = merge_close_corners(corners, 50.0);

        // (0, 0.01) -> 0.005, then (0.005, 0.02) -> 0.0125
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(merged[0].theta, 0.0125, epsilon = 1e-12);
        assert_relative_eq!(merged[0].r, 1005.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distances_use_unmerged_positions() {
        // Chords: 0-1 is 30, 0-2 is 55. After absorbing 1, corner 0 sits at
        // theta 0.015, only 40 from corner 2, but the cached position of 0
        // is still used, so 2 survives on its own.
        let corners = vec![
            Sample::new(0.000, 1000.0),
            Sample::new(0.030, 1000.0),
            Sample::new(0.055, 1000.0),
        ];

        let merged = merge_close_corners(corners, 50.0);

        assert_eq!(merged.len(), 2);
        assert_relative_eq!(merged[0].theta, 0.015, epsilon = 1e-12);
        assert_relative_eq!(merged[1].theta, 0.055, epsilon = 1e-12);
    }

    #[test]
    fn test_survivors_keep_relative_order() {
        let corners = vec![
            Sample::new(2.0, 500.0),
            Sample::new(0.5, 500.0),
            Sample::new(2.001, 500.0),
            Sample::new(1.0, 500.0),
        ];

        let merged = merge_close_corners(corners, 50.0);
        let thetas: Vec<f64> = merged.iter().map(|s| s.theta).collect();

        assert_eq!(thetas.len(), 3);
        assert_relative_eq!(thetas[0], 2.0005, epsilon = 1e-12);
        assert_relative_eq!(thetas[1], 0.5);
        assert_relative_eq!(thetas[2], 1.0);
    }
}

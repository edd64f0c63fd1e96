//! Radial masking of polar samples.
//!
//! Drops readings that are too close (housing reflections) or too far
//! (unreliable returns) before corner detection.
//!
//! # Example
//!
//! ```rust
//! use kona::core::Sample;
//! use kona::preprocessing::{RadialMask, apply_radial_mask};
//!
//! let samples = vec![
//!     Sample::new(0.0, 100.0),  // Too close
//!     Sample::new(0.1, 500.0),
//!     Sample::new(0.2, 5000.0), // Too far
//! ];
//!
//! let kept = apply_radial_mask(&samples, 280.0, 3000.0);
//! assert_eq!(kept, vec![Sample::new(0.1, 500.0)]);
//!
//! let mask = RadialMask::new(280.0, 3000.0);
//! assert_eq!(mask.apply(&samples), kept);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// Inclusive range window for radial masking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialMask {
    /// Minimum kept range (inclusive).
    /// Default: 280 (mm)
    pub min_range: f64,

    /// Maximum kept range (inclusive).
    /// Default: 3000 (mm)
    pub max_range: f64,
}

impl Default for RadialMask {
    fn default() -> Self {
        Self {
            min_range: 280.0,
            max_range: 3000.0,
        }
    }
}

impl RadialMask {
    /// Create a mask keeping `min_range ≤ r ≤ max_range`.
    pub fn new(min_range: f64, max_range: f64) -> Self {
        Self {
            min_range,
            max_range,
        }
    }

    /// Builder-style setter for minimum range.
    pub fn with_min_range(mut self, min_range: f64) -> Self {
        self.min_range = min_range;
        self
    }

    /// Builder-style setter for maximum range.
    pub fn with_max_range(mut self, max_range: f64) -> Self {
        self.max_range = max_range;
        self
    }

    /// Check whether a range passes the mask. NaN never passes.
    #[inline]
    pub fn contains(&self, range: f64) -> bool {
        range >= self.min_range && range <= self.max_range
    }

    /// Apply the mask, returning the kept samples in their original order.
    pub fn apply(&self, samples: &[Sample]) -> Vec<Sample> {
        apply_radial_mask(samples, self.min_range, self.max_range)
    }
}

/// Keep samples with `min_r ≤ r ≤ max_r`, preserving order.
///
/// Returns an empty vector when nothing qualifies.
pub fn apply_radial_mask(samples: &[Sample], min_r: f64, max_r: f64) -> Vec<Sample> {
    samples
        .iter()
        .filter(|s| s.r >= min_r && s.r <= max_r)
        .copied()
        .collect()
}

//! Traits for corner candidate extraction.
//!
//! [`CornerExtractor`] lets the pipeline swap the raw-candidate stage while
//! keeping masking, blob reduction and merging unchanged.

use super::{CornerDetectorConfig, detect_corners};
use crate::core::Sample;

/// Trait for raw corner candidate extraction.
///
/// Implementations receive the masked scan in scan order and return the
/// samples they consider corner candidates.
///
/// # Example
///
/// ```rust
/// use kona::core::Sample;
/// use kona::extraction::{CornerExtractor, HysteresisCornerExtractor};
///
/// let extractor = HysteresisCornerExtractor::default();
/// let scan: Vec<Sample> = (0..20).map(|i| Sample::new(i as f64 * 0.01, 800.0)).collect();
/// assert!(extractor.extract(&scan).is_empty());
/// ```
pub trait CornerExtractor: Send + Sync {
    /// Extract corner candidates from an ordered, masked scan.
    fn extract(&self, samples: &[Sample]) -> Vec<Sample>;
}

/// Sliding-window detector with angle hysteresis.
///
/// Wraps [`detect_corners`] in a [`CornerExtractor`] implementation.
#[derive(Clone, Debug, Default)]
pub struct HysteresisCornerExtractor {
    config: CornerDetectorConfig,
}

impl HysteresisCornerExtractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: CornerDetectorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CornerDetectorConfig {
        &self.config
    }
}

impl CornerExtractor for HysteresisCornerExtractor {
    fn extract(&self, samples: &[Sample]) -> Vec<Sample> {
        detect_corners(samples, &self.config)
    }
}

//! End-to-end corner extraction pipeline.
//!
//! ```text
//! ranges ──► samples ──► radial mask ──► corner detector ──► (radial mask)
//!                                                                │
//!            final corners ◄── merge close ◄── blob reduction ◄──┘
//! ```
//!
//! Every stage produces a new vector. All intermediates are kept in
//! [`PipelineOutput`] so callers can export or plot them.

use serde::{Deserialize, Serialize};

use crate::core::{RangeScan, Sample};
use crate::extraction::{
    BlobReducerConfig, CornerDetectorConfig, CornerExtractor, HysteresisCornerExtractor,
    MergeConfig, merge_close_corners, reduce_corner_blobs,
};
use crate::preprocessing::RadialMask;

/// Runtime configuration for all pipeline stages (radians, scan units).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Radial window applied to the scan (and optionally to raw corners)
    pub mask: RadialMask,
    /// Sliding-window detector settings
    pub detector: CornerDetectorConfig,
    /// Blob reduction settings
    pub blob: BlobReducerConfig,
    /// Duplicate merge settings
    pub merge: MergeConfig,
    /// Re-apply the radial mask to raw corners before blob reduction.
    /// Default: true
    pub mask_candidates: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mask: RadialMask::default(),
            detector: CornerDetectorConfig::default(),
            blob: BlobReducerConfig::default(),
            merge: MergeConfig::default(),
            mask_candidates: true,
        }
    }
}

/// Every intermediate sequence produced by one pipeline run.
#[derive(Clone, Debug, Default)]
pub struct PipelineOutput {
    /// Scan samples that passed the radial mask
    pub masked: Vec<Sample>,
    /// Raw candidates from the extractor (after the optional second mask)
    pub raw_corners: Vec<Sample>,
    /// One candidate per angular blob
    pub reduced_corners: Vec<Sample>,
    /// Final corners after duplicate merging
    pub corners: Vec<Sample>,
}

impl PipelineOutput {
    /// Per-stage counts.
    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            masked: self.masked.len(),
            raw: self.raw_corners.len(),
            reduced: self.reduced_corners.len(),
            corners: self.corners.len(),
        }
    }
}

/// Per-stage sample counts of a pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// Samples kept by the radial mask
    pub masked: usize,
    /// Raw corner candidates
    pub raw: usize,
    /// Candidates after blob reduction
    pub reduced: usize,
    /// Final corners
    pub corners: usize,
}

/// Four-stage corner extraction pipeline.
pub struct CornerPipeline {
    config: PipelineConfig,
    extractor: Box<dyn CornerExtractor>,
}

impl Default for CornerPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl CornerPipeline {
    /// Create a pipeline using the hysteresis detector from `config.detector`.
    pub fn new(config: PipelineConfig) -> Self {
        let extractor = Box::new(HysteresisCornerExtractor::new(config.detector.clone()));
        Self { config, extractor }
    }

    /// Replace the raw-candidate stage.
    ///
    /// `config.detector` is ignored by custom extractors.
    pub fn with_extractor(mut self, extractor: Box<dyn CornerExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline on a raw range scan.
    pub fn run(&self, scan: &RangeScan) -> PipelineOutput {
        log::debug!(
            "Pipeline input: {} readings, start {:.4} rad, step {:.6} rad",
            scan.len(),
            scan.geometry.start_angle,
            scan.geometry.angle_increment
        );
        self.run_samples(&scan.to_samples())
    }

    /// Run the pipeline on polar samples in scan order.
    pub fn run_samples(&self, samples: &[Sample]) -> PipelineOutput {
        let masked = self.config.mask.apply(samples);
        log::debug!(
            "Radial mask [{}, {}]: {} -> {} samples",
            self.config.mask.min_range,
            self.config.mask.max_range,
            samples.len(),
            masked.len()
        );

        let mut raw_corners = self.extractor.extract(&masked);
        log::debug!("Corner detection: {} raw candidates", raw_corners.len());

        if self.config.mask_candidates {
            raw_corners = self.config.mask.apply(&raw_corners);
            log::debug!("Candidate mask: {} raw candidates kept", raw_corners.len());
        }

        let reduced_corners = reduce_corner_blobs(&raw_corners, &self.config.blob);
        log::debug!("Blob reduction: {} candidates", reduced_corners.len());

        let corners = merge_close_corners(reduced_corners.clone(), self.config.merge.min_distance);
        log::info!("Detected {} corners", corners.len());

        PipelineOutput {
            masked,
            raw_corners,
            reduced_corners,
            corners,
        }
    }
}

//! Main KonaConfig and conversion methods.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::ScanGeometry;
use crate::core::math::deg_to_rad;
use crate::io::CsvLayout;
use crate::pipeline::PipelineConfig;

use super::error::ConfigLoadError;
use super::sections::{
    BlobSection, DetectorSection, InputSection, MaskSection, MergeSection, OutputSection,
    ScanSection,
};

/// Full Kona configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct KonaConfig {
    /// Field of view
    #[serde(default)]
    pub scan: ScanSection,

    /// Input file layout
    #[serde(default)]
    pub input: InputSection,

    /// Radial mask
    #[serde(default)]
    pub mask: MaskSection,

    /// Corner detector
    #[serde(default)]
    pub detector: DetectorSection,

    /// Blob reduction
    #[serde(default)]
    pub blob: BlobSection,

    /// Duplicate merging
    #[serde(default)]
    pub merge: MergeSection,

    /// Output files
    #[serde(default)]
    pub output: OutputSection,
}

impl KonaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let invalid = |msg: String| Err(ConfigLoadError::Invalid(msg));

        if self.mask.min_range > self.mask.max_range {
            return invalid(format!(
                "mask.min_range ({}) exceeds mask.max_range ({})",
                self.mask.min_range, self.mask.max_range
            ));
        }
        if self.detector.angle_range_deg <= 0.0 {
            return invalid(format!(
                "detector.angle_range_deg must be positive, got {}",
                self.detector.angle_range_deg
            ));
        }
        if self.detector.distance_per_step < 0.0 {
            return invalid(format!(
                "detector.distance_per_step must not be negative, got {}",
                self.detector.distance_per_step
            ));
        }
        if self.blob.grouping_threshold_deg < 0.0 {
            return invalid(format!(
                "blob.grouping_threshold_deg must not be negative, got {}",
                self.blob.grouping_threshold_deg
            ));
        }
        if self.merge.min_corner_distance < 0.0 {
            return invalid(format!(
                "merge.min_corner_distance must not be negative, got {}",
                self.merge.min_corner_distance
            ));
        }
        if self.input.max_rows == 0 {
            return invalid("input.max_rows must be at least 1".to_string());
        }
        Ok(())
    }

    /// Convert to the runtime pipeline config (radians)
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            mask: self.mask.to_radial_mask(),
            detector: self.detector.to_detector_config(),
            blob: self.blob.to_blob_config(),
            merge: self.merge.to_merge_config(),
            mask_candidates: self.mask.mask_candidates,
        }
    }

    /// Get the input CSV layout
    pub fn csv_layout(&self) -> CsvLayout {
        self.input.to_csv_layout()
    }

    /// Angular geometry for a scan of `count` readings spread over the
    /// configured field of view.
    pub fn scan_geometry(&self, count: usize) -> ScanGeometry {
        ScanGeometry::from_field_of_view(
            deg_to_rad(self.scan.start_angle_deg),
            deg_to_rad(self.scan.end_angle_deg),
            count,
        )
    }

    /// Resolve an output file name against the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.output.dir).join(file_name)
    }
}

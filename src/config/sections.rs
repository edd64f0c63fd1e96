//! Configuration file sections.
//!
//! Angles are written in degrees in the file and converted to radians when
//! the runtime configs are built.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::math::deg_to_rad;
use crate::extraction::{BlobReducerConfig, CornerDetectorConfig, MergeConfig};
use crate::io::CsvLayout;
use crate::preprocessing::RadialMask;

/// Scan field of view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanSection {
    /// Angle of the first reading (degrees)
    #[serde(default = "defaults::start_angle_deg")]
    pub start_angle_deg: f64,

    /// Angle of the last reading (degrees)
    #[serde(default = "defaults::end_angle_deg")]
    pub end_angle_deg: f64,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            start_angle_deg: defaults::start_angle_deg(),
            end_angle_deg: defaults::end_angle_deg(),
        }
    }
}

/// Input CSV layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputSection {
    /// Scan file path
    #[serde(default = "defaults::input_path")]
    pub path: String,

    /// Lines skipped before data rows
    #[serde(default = "defaults::header_lines")]
    pub header_lines: usize,

    /// Zero-based column holding the ranges
    #[serde(default = "defaults::column")]
    pub column: usize,

    /// Maximum number of readings to load
    #[serde(default = "defaults::max_rows")]
    pub max_rows: usize,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            path: defaults::input_path(),
            header_lines: defaults::header_lines(),
            column: defaults::column(),
            max_rows: defaults::max_rows(),
        }
    }
}

impl InputSection {
    /// Convert to CsvLayout
    pub fn to_csv_layout(&self) -> CsvLayout {
        CsvLayout {
            header_lines: self.header_lines,
            column: self.column,
            max_rows: self.max_rows,
        }
    }
}

/// Radial mask settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskSection {
    /// Minimum kept range
    #[serde(default = "defaults::min_range")]
    pub min_range: f64,

    /// Maximum kept range
    #[serde(default = "defaults::max_range")]
    pub max_range: f64,

    /// Re-apply the mask to raw corner candidates
    #[serde(default = "defaults::enabled")]
    pub mask_candidates: bool,
}

impl Default for MaskSection {
    fn default() -> Self {
        Self {
            min_range: defaults::min_range(),
            max_range: defaults::max_range(),
            mask_candidates: true,
        }
    }
}

impl MaskSection {
    /// Convert to RadialMask
    pub fn to_radial_mask(&self) -> RadialMask {
        RadialMask::new(self.min_range, self.max_range)
    }
}

/// Corner detector settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectorSection {
    /// Center of the accepted turning angle window (degrees)
    #[serde(default = "defaults::angle_target_deg")]
    pub angle_target_deg: f64,

    /// Half-width of the accepted window (degrees)
    #[serde(default = "defaults::angle_range_deg")]
    pub angle_range_deg: f64,

    /// Samples between window center and neighbors
    #[serde(default = "defaults::span")]
    pub span: usize,

    /// Leg length allowed per sample of span
    #[serde(default = "defaults::distance_per_step")]
    pub distance_per_step: f64,
}

impl Default for DetectorSection {
    fn default() -> Self {
        Self {
            angle_target_deg: defaults::angle_target_deg(),
            angle_range_deg: defaults::angle_range_deg(),
            span: defaults::span(),
            distance_per_step: defaults::distance_per_step(),
        }
    }
}

impl DetectorSection {
    /// Convert to CornerDetectorConfig
    pub fn to_detector_config(&self) -> CornerDetectorConfig {
        CornerDetectorConfig::from_target(
            deg_to_rad(self.angle_target_deg),
            deg_to_rad(self.angle_range_deg),
            self.span,
            self.distance_per_step,
        )
    }
}

/// Blob reduction settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlobSection {
    /// Angle each blob representative should be closest to (degrees)
    #[serde(default = "defaults::angle_target_deg")]
    pub angle_target_deg: f64,

    /// Maximum angular gap inside one blob (degrees)
    #[serde(default = "defaults::grouping_threshold_deg")]
    pub grouping_threshold_deg: f64,
}

impl Default for BlobSection {
    fn default() -> Self {
        Self {
            angle_target_deg: defaults::angle_target_deg(),
            grouping_threshold_deg: defaults::grouping_threshold_deg(),
        }
    }
}

impl BlobSection {
    /// Convert to BlobReducerConfig
    pub fn to_blob_config(&self) -> BlobReducerConfig {
        BlobReducerConfig::new(
            deg_to_rad(self.angle_target_deg),
            deg_to_rad(self.grouping_threshold_deg),
        )
    }
}

/// Duplicate merge settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MergeSection {
    /// Corners closer than this are merged
    #[serde(default = "defaults::min_corner_distance")]
    pub min_corner_distance: f64,
}

impl Default for MergeSection {
    fn default() -> Self {
        Self {
            min_corner_distance: defaults::min_corner_distance(),
        }
    }
}

impl MergeSection {
    /// Convert to MergeConfig
    pub fn to_merge_config(&self) -> MergeConfig {
        MergeConfig::new(self.min_corner_distance)
    }
}

/// Output files
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory receiving all output files
    #[serde(default = "defaults::output_dir")]
    pub dir: String,

    /// Cartesian export of the masked scan
    #[serde(default = "defaults::scan_csv")]
    pub scan_csv: String,

    /// Cartesian export of the final corners
    #[serde(default = "defaults::corners_csv")]
    pub corners_csv: String,

    /// Also render an SVG plot
    #[serde(default)]
    pub svg: bool,

    /// SVG file name
    #[serde(default = "defaults::svg_file")]
    pub svg_file: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
            scan_csv: defaults::scan_csv(),
            corners_csv: defaults::corners_csv(),
            svg: false,
            svg_file: defaults::svg_file(),
        }
    }
}

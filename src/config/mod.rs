//! Configuration loading for Kona.
//!
//! All settings live in a single YAML file. Every section and field is
//! optional and falls back to the built-in defaults.
//!
//! ```rust,ignore
//! use kona::config::KonaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = KonaConfig::load_default()?;
//!
//! let pipeline = CornerPipeline::new(config.to_pipeline_config());
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`ScanSection`] | Field of view in degrees |
//! | [`InputSection`] | Scan CSV path and layout |
//! | [`MaskSection`] | Radial mask bounds |
//! | [`DetectorSection`] | Turning angle window, span, leg length |
//! | [`BlobSection`] | Blob target angle and grouping gap |
//! | [`MergeSection`] | Duplicate merge distance |
//! | [`OutputSection`] | Output directory and file names |
//!
//! ## Example YAML
//!
//! ```yaml
//! scan:
//!   start_angle_deg: 0.0
//!   end_angle_deg: 240.0
//! detector:
//!   angle_target_deg: 90.0
//!   angle_range_deg: 30.0
//!   span: 6
//!   distance_per_step: 30.0   # leg limit = span * distance_per_step
//! ```

mod defaults;
mod error;
mod kona;
mod sections;

pub use error::ConfigLoadError;
pub use kona::KonaConfig;
pub use sections::{
    BlobSection, DetectorSection, InputSection, MaskSection, MergeSection, OutputSection,
    ScanSection,
};

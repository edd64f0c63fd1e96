//! # Kona: Corner Extraction from 2D Range Scans
//!
//! Finds wall corners in a single planar lidar sweep. A scan is a list of
//! range readings taken at evenly spaced angles; the output is the small set
//! of samples where the measured outline turns by roughly a right angle.
//!
//! ## Quick Start
//!
//! ```rust
//! use kona::{CornerPipeline, PipelineConfig};
//! use kona::core::RangeScan;
//!
//! let ranges = vec![1000.0; 240];
//! let scan = RangeScan::from_field_of_view(ranges, 0.0, 240f64.to_radians());
//!
//! let output = CornerPipeline::new(PipelineConfig::default()).run(&scan);
//! for corner in &output.corners {
//!     let p = corner.to_cartesian();
//!     println!("corner at ({:.1}, {:.1})", p.x, p.y);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X-forward**: angle 0 points along +X
//! - **Y-left**: angles grow counter-clockwise
//! - **Units**: whatever the range readings use (millimetres in the sample
//!   data); all thresholds are in the same unit
//!
//! ## Architecture
//!
//! - [`core`]: Samples, points, scan geometry and polar conversion
//! - [`preprocessing`]: Radial mask
//! - [`extraction`]: Corner detection, blob reduction, duplicate merging
//! - [`pipeline`]: The four stages chained together
//! - [`config`]: YAML configuration
//! - [`io`]: CSV and SVG files
//!
//! ## Data Flow
//!
//! ```text
//!    ranges + FOV
//!         │ RangeScan::to_samples()
//!         ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │ Radial Mask  │──►│   Detector   │──►│ Blob Reducer │──►│    Merger    │──► corners
//!   │ [min, max]   │   │ (hysteresis) │   │ (angle gaps) │   │ (distance)   │
//!   └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod extraction;
pub mod io;
pub mod pipeline;
pub mod preprocessing;

// Re-export main types at crate root
pub use config::{ConfigLoadError, KonaConfig};
pub use error::{Error, Result};
pub use pipeline::{CornerPipeline, PipelineConfig, PipelineOutput, PipelineStats};
pub use preprocessing::{RadialMask, apply_radial_mask};

// Re-export extensibility traits
pub use extraction::{CornerExtractor, HysteresisCornerExtractor};

use crate::core::{RangeScan, Sample};

/// Run the full pipeline with default settings and return the final corners.
pub fn extract_corners(scan: &RangeScan) -> Vec<Sample> {
    CornerPipeline::default().run(scan).corners
}

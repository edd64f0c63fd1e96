//! Corner extraction from masked polar scans.
//!
//! # Stages
//!
//! - **Corner Detection**: sliding window over the scan, flags samples where
//!   the path turns by an angle inside a window for two consecutive positions
//! - **Blob Reduction**: collapses angularly adjacent candidates to the one
//!   nearest a target angle
//! - **Merging**: averages corners that are closer than a minimum distance
//!
//! ```rust
//! use kona::core::Sample;
//! use kona::extraction::{
//!     BlobReducerConfig, CornerDetectorConfig, detect_corners, merge_close_corners,
//!     reduce_corner_blobs,
//! };
//!
//! let scan: Vec<Sample> = (0..50).map(|i| Sample::new(i as f64 * 0.01, 1000.0)).collect();
//!
//! let raw = detect_corners(&scan, &CornerDetectorConfig::default());
//! let reduced = reduce_corner_blobs(&raw, &BlobReducerConfig::default());
//! let corners = merge_close_corners(reduced, 50.0);
//! assert!(corners.is_empty());
//! ```

pub mod blob_reduction;
pub mod corner_detection;
pub mod merge;
pub mod traits;

pub use blob_reduction::{BlobReducerConfig, reduce_corner_blobs};
pub use corner_detection::{CornerDetectorConfig, DEGENERATE_LEG_EPSILON, angle_at, detect_corners};
pub use merge::{MergeConfig, merge_close_corners};
pub use traits::{CornerExtractor, HysteresisCornerExtractor};

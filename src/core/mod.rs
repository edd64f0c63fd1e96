//! Core types for the kona corner extractor.
//!
//! This module provides the fundamental types used throughout the library:
//! - [`Sample`]: Polar measurement (angle, range), projected to Cartesian on demand
//! - [`Point2D`]: Cartesian point
//! - [`RangeScan`] and [`ScanGeometry`]: Raw range readings plus their angular layout
//! - [`math`]: Angle conversions and batch polar-to-Cartesian transforms

pub mod math;
mod point;
mod sample;
mod scan;

pub use point::Point2D;
pub use sample::Sample;
pub use scan::{RangeScan, ScanGeometry};

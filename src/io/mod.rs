//! File input and output.
//!
//! - **CSV**: read a range column from a scan log, write `x,y` point files
//! - **SVG**: plot a scan with its corners for visual inspection
//!
//! ```rust,ignore
//! use kona::io::{CsvLayout, ScanPlot, read_range_column, write_xy_csv};
//! use std::path::Path;
//!
//! let ranges = read_range_column(Path::new("data/LidarData.csv"), &CsvLayout::default())?;
//!
//! write_xy_csv(Path::new("corners.csv"), &corner_points)?;
//! ScanPlot::default()
//!     .with_scan(scan_points)
//!     .with_corners(corner_points)
//!     .save(Path::new("corners.svg"))?;
//! ```

pub mod csv;
pub mod svg;

pub use csv::{CsvError, CsvLayout, parse_range_column, read_range_column, write_xy_csv};
pub use svg::{PlotColors, PlotConfig, ScanPlot};

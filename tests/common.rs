//! Test utilities for Kona integration tests.
//!
//! Synthetic scans are ray cast from the sensor origin against axis-aligned
//! walls, so the true corner positions are known exactly.

#![allow(dead_code)]

use kona::core::{Point2D, RangeScan};

/// Infinite axis-aligned wall.
#[derive(Clone, Copy, Debug)]
pub enum Wall {
    /// Wall along `x = value`
    Vertical(f64),
    /// Wall along `y = value`
    Horizontal(f64),
}

impl Wall {
    /// Distance along the ray at `theta` to this wall, if it is hit.
    fn hit(&self, theta: f64) -> Option<f64> {
        let (sin_t, cos_t) = theta.sin_cos();
        let (offset, dir) = match *self {
            Wall::Vertical(x) => (x, cos_t),
            Wall::Horizontal(y) => (y, sin_t),
        };

        if dir.abs() < 1e-12 {
            return None;
        }
        let t = offset / dir;
        (t > 0.0).then_some(t)
    }
}

/// Range to the nearest wall along `theta`.
pub fn cast(theta: f64, walls: &[Wall], max_range: f64) -> f64 {
    walls
        .iter()
        .filter_map(|w| w.hit(theta))
        .fold(max_range, f64::min)
}

/// Scan of `count` readings evenly covering `[start_deg, end_deg]`.
pub fn walls_scan(walls: &[Wall], count: usize, start_deg: f64, end_deg: f64) -> RangeScan {
    let start = start_deg.to_radians();
    let end = end_deg.to_radians();
    let increment = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };

    let ranges = (0..count)
        .map(|i| cast(start + i as f64 * increment, walls, 10_000.0))
        .collect();
    RangeScan::from_field_of_view(ranges, start, end)
}

/// Single room corner at (1000, 1000) seen over 0..90 degrees.
pub fn room_corner_scan(count: usize) -> RangeScan {
    walls_scan(
        &[Wall::Vertical(1000.0), Wall::Horizontal(1000.0)],
        count,
        0.0,
        90.0,
    )
}

/// Room with corners at (1000, 1000), (-1500, 1000) and (-1500, -800)
/// seen over 0..240 degrees.
pub fn room_scan(count: usize) -> RangeScan {
    walls_scan(
        &[
            Wall::Vertical(1000.0),
            Wall::Vertical(-1500.0),
            Wall::Horizontal(1000.0),
            Wall::Horizontal(-800.0),
        ],
        count,
        0.0,
        240.0,
    )
}

/// True corner positions of [`room_scan`] in angle order.
pub fn room_corners() -> Vec<Point2D> {
    vec![
        Point2D::new(1000.0, 1000.0),
        Point2D::new(-1500.0, 1000.0),
        Point2D::new(-1500.0, -800.0),
    ]
}

/// Write ranges as a scan log with a three-line header and `index,range` rows.
pub fn write_scan_csv(path: &std::path::Path, ranges: &[f64]) -> std::io::Result<()> {
    let mut text = String::from("# synthetic scan\n# units: mm\nindex,range\n");
    for (i, r) in ranges.iter().enumerate() {
        text.push_str(&format!("{},{}\n", i, r));
    }
    std::fs::write(path, text)
}

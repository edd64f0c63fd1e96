//! Default value functions for serde deserialization.

pub fn start_angle_deg() -> f64 {
    0.0
}

pub fn end_angle_deg() -> f64 {
    240.0
}

pub fn input_path() -> String {
    "data/LidarData.csv".to_string()
}

pub fn header_lines() -> usize {
    3
}

pub fn column() -> usize {
    1
}

pub fn max_rows() -> usize {
    10_000
}

pub fn min_range() -> f64 {
    280.0
}

pub fn max_range() -> f64 {
    3000.0
}

pub fn enabled() -> bool {
    true
}

pub fn angle_target_deg() -> f64 {
    90.0
}

pub fn angle_range_deg() -> f64 {
    30.0
}

pub fn span() -> usize {
    6
}

pub fn distance_per_step() -> f64 {
    30.0
}

pub fn grouping_threshold_deg() -> f64 {
    0.5
}

pub fn min_corner_distance() -> f64 {
    50.0
}

pub fn output_dir() -> String {
    ".".to_string()
}

pub fn scan_csv() -> String {
    "scan_cartesian.csv".to_string()
}

pub fn corners_csv() -> String {
    "corners.csv".to_string()
}

pub fn svg_file() -> String {
    "corners.svg".to_string()
}

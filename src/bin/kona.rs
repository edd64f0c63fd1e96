//! Corner extraction from a lidar scan log.
//!
//! Usage:
//!   cargo run --bin kona -- --input data/LidarData.csv
//!   cargo run --bin kona -- -c configs/config.yaml -o ./output --svg

use clap::Parser;
use std::path::{Path, PathBuf};

use kona::core::{Point2D, RangeScan, Sample};
use kona::io::{ScanPlot, read_range_column, write_xy_csv};
use kona::{CornerPipeline, KonaConfig};

/// Extract wall corners from a 2D range scan
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to configs/config.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scan CSV file (overrides input.path)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory (overrides output.dir)
    #[arg(short, long)]
    output: Option<String>,

    /// Also write an SVG plot of the scan and corners
    #[arg(long)]
    svg: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> kona::Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Using config: {}", path.display());
            KonaConfig::load(path)?
        }
        None => KonaConfig::load_default()?,
    };
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }
    if args.svg {
        config.output.svg = true;
    }

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&config.input.path));
    log::info!("Reading scan from {}", input.display());
    let ranges = read_range_column(&input, &config.csv_layout())?;

    let geometry = config.scan_geometry(ranges.len());
    let scan = RangeScan::new(ranges, geometry);
    log::info!(
        "{} readings over {:.1}..{:.1} deg",
        scan.len(),
        config.scan.start_angle_deg,
        config.scan.end_angle_deg
    );

    let pipeline = CornerPipeline::new(config.to_pipeline_config());
    let output = pipeline.run(&scan);

    print_corners(&output.corners);

    std::fs::create_dir_all(&config.output.dir)?;
    let scan_points = to_points(&output.masked);
    let corner_points = to_points(&output.corners);

    let scan_path = config.output_path(&config.output.scan_csv);
    write_xy_csv(&scan_path, &scan_points)?;
    log::info!("Wrote masked scan to {}", scan_path.display());

    let corners_path = config.output_path(&config.output.corners_csv);
    write_xy_csv(&corners_path, &corner_points)?;
    log::info!("Wrote corners to {}", corners_path.display());

    if config.output.svg {
        let svg_path = config.output_path(&config.output.svg_file);
        save_plot(&svg_path, &input, scan_points, corner_points)?;
        log::info!("Wrote plot to {}", svg_path.display());
    }

    Ok(())
}

fn to_points(samples: &[Sample]) -> Vec<Point2D> {
    samples.iter().map(Sample::to_cartesian).collect()
}

fn print_corners(corners: &[Sample]) {
    println!("Detected {} corners:", corners.len());
    for (i, corner) in corners.iter().enumerate() {
        let p = corner.to_cartesian();
        println!(
            "  corner {:2}: theta={:7.3} deg, r={:9.3}  ->  x={:9.3}, y={:9.3}",
            i,
            corner.theta_degrees(),
            corner.r,
            p.x,
            p.y
        );
    }
}

fn save_plot(
    path: &Path,
    input: &Path,
    scan: Vec<Point2D>,
    corners: Vec<Point2D>,
) -> std::io::Result<()> {
    let title = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".to_string());

    ScanPlot::default()
        .with_title(title)
        .with_scan(scan)
        .with_corners(corners)
        .save(path)
}

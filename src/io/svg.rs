//! SVG plot of a scan and its extracted corners.
//!
//! Scan points are drawn as small dots, corners as larger circles. Both axes
//! share one scale so right angles look like right angles.

use std::fmt::Write;
use std::path::Path;

use crate::core::Point2D;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct PlotColors {
    /// Scan point color
    pub scan: &'static str,
    /// Corner marker color
    pub corner: &'static str,
    /// Axis color
    pub axis: &'static str,
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            scan: "#2255CC",
            corner: "#CC2222",
            axis: "#999999",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Width of the plot area in pixels
    pub width: f64,
    /// Scan dot radius
    pub scan_radius: f64,
    /// Corner circle radius
    pub corner_radius: f64,
    /// Padding around the plot area in pixels
    pub padding: f64,
    /// Color scheme
    pub colors: PlotColors,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            scan_radius: 1.5,
            corner_radius: 6.0,
            padding: 20.0,
            colors: PlotColors::default(),
        }
    }
}

/// Scan/corner plot builder.
#[derive(Clone, Debug, Default)]
pub struct ScanPlot {
    config: PlotConfig,
    title: Option<String>,
    scan: Vec<Point2D>,
    corners: Vec<Point2D>,
}

impl ScanPlot {
    /// Create an empty plot.
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Set title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set scan points
    pub fn with_scan(mut self, points: Vec<Point2D>) -> Self {
        self.scan = points;
        self
    }

    /// Set corner points
    pub fn with_corners(mut self, points: Vec<Point2D>) -> Self {
        self.corners = points;
        self
    }

    /// Bounds over every point plus the sensor origin.
    fn bounds(&self) -> (Point2D, Point2D) {
        let mut min = Point2D::ZERO;
        let mut max = Point2D::ZERO;
        for p in self.scan.iter().chain(self.corners.iter()) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let (min, max) = self.bounds();
        let extent = (max.x - min.x).max(max.y - min.y).max(1.0);
        let scale = self.config.width / extent;
        let plot_width = (max.x - min.x) * scale;
        let plot_height = (max.y - min.y) * scale;

        let padding = self.config.padding;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 50.0;

        let width = plot_width.max(200.0) + 2.0 * padding;
        let height = plot_height + 2.0 * padding + title_height + legend_height;

        // Flip y so +y points up.
        let to_px = |p: &Point2D| ((p.x - min.x) * scale, plot_height - (p.y - min.y) * scale);

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();
        writeln!(&mut svg, r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##).unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                escape(title)
            )
            .unwrap();
        }

        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        // Axes through the sensor origin
        let (ox, oy) = to_px(&Point2D::ZERO);
        let colors = &self.config.colors;
        writeln!(
            &mut svg,
            r#"    <line id="x-axis" x1="0" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="0.5"/>"#,
            oy, plot_width, oy, colors.axis
        )
        .unwrap();
        writeln!(
            &mut svg,
            r#"    <line id="y-axis" x1="{:.1}" y1="0" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="0.5"/>"#,
            ox, ox, plot_height, colors.axis
        )
        .unwrap();

        writeln!(&mut svg, r#"    <g id="scan" fill="{}">"#, colors.scan).unwrap();
        for p in &self.scan {
            let (x, y) = to_px(p);
            writeln!(
                &mut svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}"/>"#,
                x, y, self.config.scan_radius
            )
            .unwrap();
        }
        writeln!(&mut svg, "    </g>").unwrap();

        writeln!(
            &mut svg,
            r#"    <g id="corners" fill="none" stroke="{}" stroke-width="2">"#,
            colors.corner
        )
        .unwrap();
        for p in &self.corners {
            let (x, y) = to_px(p);
            writeln!(
                &mut svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}"/>"#,
                x, y, self.config.corner_radius
            )
            .unwrap();
        }
        writeln!(&mut svg, "    </g>").unwrap();
        writeln!(&mut svg, "  </g>").unwrap();

        let legend_y = padding + title_height + plot_height + 10.0;
        self.render_legend(&mut svg, legend_y);

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_legend(&self, svg: &mut String, y_offset: f64) {
        let colors = &self.config.colors;
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate({:.0}, {:.0})">"#,
            self.config.padding, y_offset
        )
        .unwrap();
        writeln!(
            svg,
            r#"    <circle cx="6" cy="10" r="{:.1}" fill="{}"/>"#,
            self.config.scan_radius.max(3.0),
            colors.scan
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="16" y="14" fill="#333">Scan ({} points)</text>"##,
            self.scan.len()
        )
        .unwrap();
        writeln!(
            svg,
            r#"    <rect x="1" y="25" width="10" height="10" fill="none" stroke="{}" stroke-width="2"/>"#,
            colors.corner
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="16" y="34" fill="#333">Corners ({})</text>"##,
            self.corners.len()
        )
        .unwrap();
        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn corner_count(svg: &str) -> usize {
        let start = svg.find(r#"<g id="corners""#).unwrap();
        let end = start + svg[start..].find("</g>").unwrap();
        svg[start..end].matches("<circle").count()
    }

    #[test]
    fn test_render_empty() {
        let svg = ScanPlot::default().render();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert_eq!(corner_count(&svg), 0);
    }

    #[test]
    fn test_one_circle_per_corner() {
        let scan: Vec<Point2D> = (0..20)
            .map(|i| Point2D::new(i as f64 * 50.0, 1000.0))
            .collect();
        let corners = vec![Point2D::new(1000.0, 1000.0), Point2D::new(0.0, 1000.0)];

        let svg = ScanPlot::new(PlotConfig::default())
            .with_title("Room <A>")
            .with_scan(scan)
            .with_corners(corners)
            .render();

        assert_eq!(corner_count(&svg), 2);
        assert_eq!(svg.matches("<circle").count(), 20 + 2 + 1);
        assert!(svg.contains("Room &lt;A&gt;"));
        assert!(svg.contains("Corners (2)"));
    }

    #[test]
    fn test_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plot.svg");
        ScanPlot::default()
            .with_corners(vec![Point2D::new(1.0, 1.0)])
            .save(&path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(corner_count(&content), 1);
    }
}

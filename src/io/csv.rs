//! Range column reader and Cartesian point writer.
//!
//! Input files are plain comma-separated text: a fixed number of header
//! lines followed by one reading per row. Only a single column is read.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// CSV read errors
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File ended inside the header block
    #[error("Unexpected end of file in header: expected {expected} lines, found {found}")]
    UnexpectedEof {
        /// Header lines requested
        expected: usize,
        /// Lines actually present
        found: usize,
    },

    /// No row produced a value
    #[error("No data rows found")]
    NoData,
}

/// Layout of a range CSV file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvLayout {
    /// Lines skipped before data rows.
    /// Default: 3
    pub header_lines: usize,

    /// Zero-based column holding the ranges.
    /// Default: 1
    pub column: usize,

    /// Maximum number of values read.
    /// Default: 10000
    pub max_rows: usize,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            header_lines: 3,
            column: 1,
            max_rows: 10_000,
        }
    }
}

impl CsvLayout {
    /// Create a layout with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of header lines.
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    /// Set the range column.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the row cap.
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows;
        self
    }
}

/// Read one numeric column from a CSV file.
pub fn read_range_column(path: &Path, layout: &CsvLayout) -> Result<Vec<f64>, CsvError> {
    let file = File::open(path)?;
    let values = parse_range_column(BufReader::new(file), layout)?;
    log::debug!("Read {} ranges from {}", values.len(), path.display());
    Ok(values)
}

/// Read one numeric column from any buffered reader.
///
/// Fields are separated by `,` and empty fields are collapsed, so `0,,1200`
/// has `1200` in column 1. A cell yields the longest leading number it
/// starts with (`1300mm` reads as 1300). Rows with too few fields are
/// skipped silently, rows whose cell has no leading number are skipped with
/// a warning. Bytes that are not valid UTF-8 never abort the read.
pub fn parse_range_column<R: BufRead>(
    reader: R,
    layout: &CsvLayout,
) -> Result<Vec<f64>, CsvError> {
    let mut lines = reader.split(b'\n');

    // Header contents are never looked at
    for found in 0..layout.header_lines {
        if lines.next().transpose()?.is_none() {
            return Err(CsvError::UnexpectedEof {
                expected: layout.header_lines,
                found,
            });
        }
    }

    let mut values = Vec::new();
    for (offset, line) in lines.enumerate() {
        if values.len() >= layout.max_rows {
            break;
        }
        let line = line?;
        let line = String::from_utf8_lossy(&line);

        let Some(cell) = line
            .split(',')
            .filter(|field| !field.is_empty())
            .nth(layout.column)
        else {
            continue;
        };

        match parse_leading_number(cell) {
            Some(value) => values.push(value),
            None => {
                let line_number = layout.header_lines + offset + 1;
                log::warn!(
                    "Line {}: cannot parse '{}' as a range",
                    line_number,
                    cell.trim()
                );
            }
        }
    }

    if values.is_empty() {
        return Err(CsvError::NoData);
    }
    Ok(values)
}

/// Longest prefix of `cell` (after leading whitespace) that is a number.
fn parse_leading_number(cell: &str) -> Option<f64> {
    let text = cell.trim_start();
    let end = text
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(text.len());

    (1..=end)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
}

/// Write points as `x,y` rows with six decimals.
pub fn write_xy_csv(path: &Path, points: &[Point2D]) -> Result<(), CsvError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_xy(&mut writer, points)?;
    writer.flush()?;
    log::debug!("Wrote {} points to {}", points.len(), path.display());
    Ok(())
}

fn write_xy<W: Write>(writer: &mut W, points: &[Point2D]) -> std::io::Result<()> {
    writeln!(writer, "x,y")?;
    for p in points {
        writeln!(writer, "{:.6},{:.6}", p.x, p.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn parse(text: &str, layout: &CsvLayout) -> Result<Vec<f64>, CsvError> {
        parse_range_column(Cursor::new(text), layout)
    }

    #[test]
    fn test_skips_header() {
        let text = "title\nunits\nangle,range\n0,1000\n1,1001.5\n";
        let values = parse(text, &CsvLayout::default()).unwrap();
        assert_eq!(values, vec![1000.0, 1001.5]);
    }

    #[test]
    fn test_skips_short_and_malformed_rows() {
        let text = "h\nh\nh\n0,500\n1\n2,abc\n3, 700 \n";
        let values = parse(text, &CsvLayout::default()).unwrap();
        assert_eq!(values, vec![500.0, 700.0]);
    }

    #[test]
    fn test_empty_fields_collapse() {
        let text = "h\nh\nh\n0,,1200\n,1,1300\n2,1400,\n";
        let values = parse(text, &CsvLayout::default()).unwrap();
        assert_eq!(values, vec![1200.0, 1300.0, 1400.0]);
    }

    #[test]
    fn test_leading_number_is_used() {
        let text = "h\nh\nh\n0,1300mm\n1,1.5e3 \n2,+1400\n3,mm1500\n4,\t1600\r\n";
        let values = parse(text, &CsvLayout::default()).unwrap();
        assert_eq!(values, vec![1300.0, 1500.0, 1400.0, 1600.0]);
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("42"), Some(42.0));
        assert_eq!(parse_leading_number("  -7.25kg"), Some(-7.25));
        assert_eq!(parse_leading_number("2.5e"), Some(2.5));
        assert_eq!(parse_leading_number("1e3x"), Some(1000.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn test_invalid_utf8_in_data_row() {
        let bytes: &[u8] = b"h\nh\nh\n0,1000\n1,1001\n2,\xB0bad\n3,1003\n";
        let layout = CsvLayout::default();
        let values = parse_range_column(Cursor::new(bytes), &layout).unwrap();
        assert_eq!(values, vec![1000.0, 1001.0, 1003.0]);
    }

    #[test]
    fn test_invalid_utf8_in_header() {
        let bytes: &[u8] = b"Temp 25\xB0C\nh\nh\n0,1000\n1,1001\n";
        let layout = CsvLayout::default();
        let values = parse_range_column(Cursor::new(bytes), &layout).unwrap();
        assert_eq!(values, vec![1000.0, 1001.0]);
    }

    #[test]
    fn test_other_column() {
        let layout = CsvLayout::new().with_header_lines(0).with_column(2);
        let values = parse("a,b,3.5\nc,d,4.5\n", &layout).unwrap();
        assert_eq!(values, vec![3.5, 4.5]);
    }

    #[test]
    fn test_max_rows() {
        let layout = CsvLayout::new().with_header_lines(0).with_max_rows(2);
        let values = parse("0,1\n0,2\n0,3\n", &layout).unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_eof_in_header() {
        let result = parse("only one line\n", &CsvLayout::default());
        assert!(matches!(
            result,
            Err(CsvError::UnexpectedEof {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn test_no_data() {
        let result = parse("h\nh\nh\n0,x\n1\n", &CsvLayout::default());
        assert!(matches!(result, Err(CsvError::NoData)));

        let result = parse("h\nh\nh\n", &CsvLayout::default());
        assert!(matches!(result, Err(CsvError::NoData)));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/scan.csv");
        let result = read_range_column(path, &CsvLayout::default());
        assert!(matches!(result, Err(CsvError::Io(_))));
    }

    #[test]
    fn test_write_format() {
        let mut buf = Vec::new();
        let points = [Point2D::new(1.0, -2.5), Point2D::new(0.1234567, 3.0)];
        write_xy(&mut buf, &points).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "x,y\n1.000000,-2.500000\n0.123457,3.000000\n");
    }

    #[test]
    fn test_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("points.csv");
        let points = vec![Point2D::new(100.0, 200.0), Point2D::new(-5.5, 0.25)];
        write_xy_csv(&path, &points).unwrap();

        let layout = CsvLayout::new().with_header_lines(1).with_column(0);
        let xs = read_range_column(&path, &layout).unwrap();

        assert_eq!(xs, vec![100.0, -5.5]);
    }
}

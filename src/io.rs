//! Line-based sample file formats.
//!
//! The load format is one sample per line, two whitespace-separated
//! floating-point tokens `x y`. The save format is `x - y` per line, in
//! dataset order. Host collaborators own the dialogs and error reporting;
//! this module only parses and formats.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlotError, Result};
use crate::geom::Point;

/// Parse samples from load-format text. Blank lines are skipped.
pub fn parse_points(input: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            if line.trim().is_empty() {
                continue;
            }
            return Err(malformed(index, line));
        };
        let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
            return Err(malformed(index, line));
        };
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Read samples from a load-format file.
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let points = parse_points(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), samples = points.len(), "samples read");
    Ok(points)
}

/// Format samples as save-format text, one `x - y` line per sample.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::new();
    for point in points {
        out.push_str(&format!("{} - {}\n", point.x, point.y));
    }
    out
}

/// Write samples to a save-format file.
pub fn write_points(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_points(points))?;
    debug!(path = %path.display(), samples = points.len(), "samples written");
    Ok(())
}

fn malformed(index: usize, line: &str) -> PlotError {
    PlotError::MalformedSample {
        line: index + 1,
        text: line.to_string(),
    }
}

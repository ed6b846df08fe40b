//! Text input of sample points.
//!
//! One sample per line as `x,y`; whitespace around either field is
//! ignored and blank lines are skipped. Any other line fails the whole
//! read, so callers never see a partial list.

use std::fs;
use std::path::Path;

use crate::interpolation::points::Sample;
use crate::session::errors::SessionError;

/// Parses a single `x,y` pair.
pub fn parse_sample(line: &str) -> Option<Sample> {
    let mut fields = line.split(',');
    let x = fields.next()?.trim().parse::<f64>().ok()?;
    let y = fields.next()?.trim().parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Sample::new(x, y))
}

/// Parses every non-blank line of `text`.
///
/// # Errors
/// [`SessionError::Parse`] naming the first malformed line (1-based).
pub fn parse_points(text: &str) -> Result<Vec<Sample>, SessionError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_sample(line).ok_or_else(|| SessionError::Parse {
                line: idx + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

/// Reads and parses a point file.
pub fn read_points(path: &Path) -> Result<Vec<Sample>, SessionError> {
    let text = fs::read_to_string(path).map_err(|source| SessionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&text)
}

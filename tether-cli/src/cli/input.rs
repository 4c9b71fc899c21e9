//! Coordinate file parsing.
//!
//! One point per line as comma-separated integers; blank lines are skipped.
//! Every point must share the arity of the first one.

use std::io::{self, BufRead};
use std::num::ParseIntError;

use tether_core::Point;
use thiserror::Error;

/// Errors raised while reading coordinate input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number being read.
        line: usize,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A field was not a signed 64-bit integer.
    #[error("line {line}, field {field}: `{value}` is not an integer: {source}")]
    InvalidCoordinate {
        /// One-based line number.
        line: usize,
        /// One-based field position within the line.
        field: usize,
        /// The offending text, trimmed.
        value: String,
        /// Integer parsing failure.
        #[source]
        source: ParseIntError,
    },
    /// A line had a different number of fields than the first point.
    #[error("line {line} has {actual} coordinates but {expected} were expected")]
    ArityMismatch {
        /// One-based line number.
        line: usize,
        /// Arity established by the first point.
        expected: usize,
        /// Arity found on this line.
        actual: usize,
    },
}

/// Parses every point from `reader`.
///
/// # Errors
/// Returns [`InputError`] on read failures, malformed integers, or lines whose
/// arity differs from the first point.
///
/// # Examples
/// ```
/// use tether_cli::cli::parse_points;
///
/// let points = parse_points("1,2,3\n\n-4, 5, 6\n".as_bytes())?;
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].coords(), &[-4, 5, 6]);
/// # Ok::<(), tether_cli::cli::InputError>(())
/// ```
pub fn parse_points(reader: impl BufRead) -> Result<Vec<Point>, InputError> {
    let mut points: Vec<Point> = Vec::new();
    for (offset, read) in reader.lines().enumerate() {
        let line = offset + 1;
        let text = read.map_err(|source| InputError::Read { line, source })?;
        if text.trim().is_empty() {
            continue;
        }

        let point = parse_line(line, &text)?;
        if let Some(first) = points.first()
            && first.dimensions() != point.dimensions()
        {
            return Err(InputError::ArityMismatch {
                line,
                expected: first.dimensions(),
                actual: point.dimensions(),
            });
        }
        points.push(point);
    }
    Ok(points)
}

fn parse_line(line: usize, text: &str) -> Result<Point, InputError> {
    text.split(',')
        .enumerate()
        .map(|(index, raw)| {
            let value = raw.trim();
            value
                .parse::<i64>()
                .map_err(|source| InputError::InvalidCoordinate {
                    line,
                    field: index + 1,
                    value: value.to_owned(),
                    source,
                })
        })
        .collect()
}

//! Line-format reader with per-kind dedup.
//!
//! Record format, one shape per line, whitespace-split:
//! - `P x y`
//! - `L x1 y1 x2 y2`
//! - `A cx cy x1 y1 x2 y2`
//!
//! Policy
//! - Unrecognized kind tags are skipped silently; a bad line never aborts
//!   the whole ingest.
//! - A recognized tag with too few parseable coordinates is a
//!   `MalformedRecord` (coordinate reads stop at the first token that is
//!   not a number, so a garbage token mid-line counts as missing).
//! - Trailing extra coordinates are ignored.
//! - A record whose coordinates exactly match an already accepted shape of
//!   the same kind is skipped; the factory is not consulted for skipped
//!   records. First-seen order is preserved.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::geom::{Point, Shape};

use super::factory::ShapeFactory;

/// Ingestion failure.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    /// A recognized kind tag with fewer parseable coordinates than it needs.
    /// `line` is 1-based.
    MalformedRecord {
        line: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "i/o error: {e}"),
            ReadError::MalformedRecord {
                line,
                expected,
                got,
            } => write!(
                f,
                "malformed record at line {line}: expected {expected} coordinates, got {got}"
            ),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::MalformedRecord { .. } => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Read shapes from a character stream, deduplicating per kind.
pub fn read_shapes<R: BufRead>(
    factory: &dyn ShapeFactory,
    reader: R,
) -> Result<Vec<Shape>, ReadError> {
    let mut result: Vec<Shape> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };
        // Mirror stream extraction: stop at the first non-numeric token.
        let coords: Vec<f64> = tokens.map_while(|t| t.parse::<f64>().ok()).collect();

        match tag {
            "P" => {
                need(idx, &coords, 2)?;
                let dup = result
                    .iter()
                    .any(|s| matches!(s, Shape::Point(p) if p.x == coords[0] && p.y == coords[1]));
                if !dup {
                    result.push(Shape::Point(factory.point(coords[0], coords[1])));
                }
            }
            "L" => {
                need(idx, &coords, 4)?;
                let p1 = Point::new(coords[0], coords[1]);
                let p2 = Point::new(coords[2], coords[3]);
                let dup = result
                    .iter()
                    .any(|s| matches!(s, Shape::Line(l) if l.p1 == p1 && l.p2 == p2));
                if !dup {
                    result.push(Shape::Line(factory.segment(p1, p2)));
                }
            }
            "A" => {
                need(idx, &coords, 6)?;
                let c = Point::new(coords[0], coords[1]);
                let p1 = Point::new(coords[2], coords[3]);
                let p2 = Point::new(coords[4], coords[5]);
                let dup = result
                    .iter()
                    .any(|s| matches!(s, Shape::Arc(a) if a.c == c && a.p1 == p1 && a.p2 == p2));
                if !dup {
                    result.push(Shape::Arc(factory.arc(c, p1, p2)));
                }
            }
            // Permissive: anything else produces no shape and no diagnostic.
            _ => {}
        }
    }

    Ok(result)
}

/// Open `path` and delegate to [`read_shapes`]. Produces the same collection
/// as streaming the file's contents directly.
pub fn read_shapes_path(
    factory: &dyn ShapeFactory,
    path: impl AsRef<Path>,
) -> Result<Vec<Shape>, ReadError> {
    let file = File::open(path)?;
    read_shapes(factory, BufReader::new(file))
}

#[inline]
fn need(idx: usize, coords: &[f64], expected: usize) -> Result<(), ReadError> {
    if coords.len() < expected {
        Err(ReadError::MalformedRecord {
            line: idx + 1,
            expected,
            got: coords.len(),
        })
    } else {
        Ok(())
    }
}

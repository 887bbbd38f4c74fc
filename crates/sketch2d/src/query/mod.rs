//! Spatial queries over shape collections.
//!
//! Purpose
//! - Aggregate queries: `centroid` over a heterogeneous collection,
//!   `BoundingBox` accumulation (on the type itself in `crate::geom`).
//! - Pairwise intersection tests between shape kinds, each returning a
//!   witness point or a definite miss, with degenerate inputs rejected as
//!   typed errors instead of being folded into "no intersection".
//!
//! All functions here are pure; nothing mutates its inputs.
//!
//! Code cross-refs: `crate::geom::{Shape, GeomCfg}`.

use std::fmt;

pub mod centroid;
pub mod intersect;

pub use centroid::centroid;
pub use intersect::{point_arc, point_segment, segment_arc, segment_segment};

/// Query failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Centroid of zero shapes is undefined.
    EmptyCollection,
    /// Segment endpoints coincide (within tolerance); it has no carrier line.
    DegenerateSegment,
    /// Arc radius is zero (within tolerance).
    DegenerateArc,
    /// The arc's two boundary points disagree about the radius.
    ArcRadiusMismatch,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::EmptyCollection => write!(f, "centroid of an empty collection"),
            QueryError::DegenerateSegment => write!(f, "segment endpoints coincide"),
            QueryError::DegenerateArc => write!(f, "arc has zero radius"),
            QueryError::ArcRadiusMismatch => {
                write!(f, "arc boundary points disagree about the radius")
            }
        }
    }
}

impl std::error::Error for QueryError {}

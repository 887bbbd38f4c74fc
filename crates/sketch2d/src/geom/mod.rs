//! 2D shape model.
//!
//! Purpose
//! - Provide the plain value types (`Point`, `LineSegment`, `Arc`,
//!   `BoundingBox`) behind a single closed `Shape` variant, with exact
//!   per-kind equality so dedup and tests stay predictable.
//! - Keep the types computation-free: all geometry lives in `crate::query`,
//!   the shapes only carry coordinates and report their `ShapeKind`.
//!
//! Code cross-refs: `crate::ingest` (construction/dedup), `crate::query`
//! (centroid, box accumulation, intersections).

mod types;

pub use types::{Arc, BoundingBox, GeomCfg, LineSegment, Point, Shape, ShapeKind};

#[cfg(test)]
mod tests;

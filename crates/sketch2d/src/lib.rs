//! 2D shape ingestion and spatial queries.
//!
//! Pipeline: text records → `ingest` (factory-constructed, per-kind dedup)
//! → ordered `Vec<Shape>` → `query` (centroid, bounding box, pairwise
//! intersections).
//!
//! Design notes live in DESIGN.md, including the deliberately kept
//! asymmetric centroid weighting for arcs.

pub mod geom;
pub mod ingest;
pub mod query;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for the common types.
pub use geom::{Arc, BoundingBox, GeomCfg, LineSegment, Point, Shape, ShapeKind};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Arc, BoundingBox, GeomCfg, LineSegment, Point, Shape, ShapeKind};
    pub use crate::ingest::{
        read_shapes, read_shapes_path, DefaultFactory, ReadError, ShapeFactory,
    };
    pub use crate::query::{
        centroid, point_arc, point_segment, segment_arc, segment_segment, QueryError,
    };
    pub use nalgebra::Vector2 as Vec2;
}

//! Shape construction capability.
//!
//! The reader takes the factory by reference so tests can substitute a
//! recording implementation and observe exactly which constructions the
//! dedup pass lets through.

use crate::geom::{Arc, LineSegment, Point};

/// Construction capability over the three input shape kinds.
///
/// All three constructors are total over finite inputs; no construction
/// fails for well-formed coordinates.
pub trait ShapeFactory {
    fn point(&self, x: f64, y: f64) -> Point;
    fn segment(&self, p1: Point, p2: Point) -> LineSegment;
    fn arc(&self, c: Point, p1: Point, p2: Point) -> Arc;
}

/// Plain value-constructing factory.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFactory;

impl ShapeFactory for DefaultFactory {
    #[inline]
    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
    #[inline]
    fn segment(&self, p1: Point, p2: Point) -> LineSegment {
        LineSegment::new(p1, p2)
    }
    #[inline]
    fn arc(&self, c: Point, p1: Point, p2: Point) -> Arc {
        Arc::new(c, p1, p2)
    }
}

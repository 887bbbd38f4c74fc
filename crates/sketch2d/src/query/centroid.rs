//! Aggregate centroid over a heterogeneous shape collection.

use nalgebra::Vector2;

use crate::geom::{Point, Shape};

use super::QueryError;

/// Average point over the collection.
///
/// Contribution per kind:
/// - Point: `(x, y)` once.
/// - LineSegment: both endpoints.
/// - Arc: `p1` twice plus the center; `p2` never contributes. The asymmetric
///   arc weighting is kept on purpose to match the established reader of
///   this format (see DESIGN.md, "centroid weighting").
/// - BoundingBox: nothing (it is an accumulator, not an input shape).
///
/// The sum is divided by the number of shapes, not the number of
/// contributing terms.
pub fn centroid(shapes: &[Shape]) -> Result<Point, QueryError> {
    if shapes.is_empty() {
        return Err(QueryError::EmptyCollection);
    }
    let mut sum = Vector2::zeros();
    for shape in shapes {
        match shape {
            Shape::Point(p) => sum += p.coords(),
            Shape::Line(l) => {
                sum += l.p1.coords();
                sum += l.p2.coords();
            }
            Shape::Arc(a) => {
                sum += a.p1.coords() * 2.0;
                sum += a.c.coords();
            }
            Shape::Box(_) => {}
        }
    }
    Ok(Point::from_coords(sum / shapes.len() as f64))
}

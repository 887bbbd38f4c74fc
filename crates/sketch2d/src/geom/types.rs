//! Plain 2D shape values and tolerances.
//!
//! - `GeomCfg`: centralizes epsilons for parallelism, on-curve, and radius checks.
//! - `Point`, `LineSegment`, `Arc`: immutable value carriers with exact
//!   coordinate equality (no epsilon), used as-is by dedup.
//! - `BoundingBox`: mutable min/max accumulator.
//! - `Shape`: closed variant type over the four kinds, dispatched by matching.

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Parallelism threshold for the segment-pair determinant.
    pub eps_det: f64,
    /// On-curve distance slack; also reused as the angular slack (radians)
    /// for arc span membership.
    pub eps_on: f64,
    /// Allowed relative disagreement between an arc's two endpoint radii.
    pub eps_radius: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_on: 1e-9,
            eps_radius: 1e-9,
        }
    }
}

/// Discriminant over the shape variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Line,
    Arc,
    Box,
}

/// 2D point. Equality is exact coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    #[inline]
    pub(crate) fn from_coords(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Segment between two points. Equality is order-sensitive: `(p1,p2)` and
/// `(p2,p1)` are distinct values even though they cover the same set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2.coords() - self.p1.coords()).norm()
    }
    /// Slope dy/dx, or `None` for a vertical segment (exact x equality).
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        if self.p2.x == self.p1.x {
            None
        } else {
            Some((self.p2.y - self.p1.y) / (self.p2.x - self.p1.x))
        }
    }
}

/// Circular arc: center `c` plus boundary points `p1`, `p2`.
///
/// The radius is implicit (`dist(c, p1)`); `dist(c, p2)` is expected to agree
/// within `GeomCfg::eps_radius`. Query routines reject a disagreement instead
/// of picking one radius silently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    pub c: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Arc {
    #[inline]
    pub fn new(c: Point, p1: Point, p2: Point) -> Self {
        Self { c, p1, p2 }
    }
    /// Implicit radius, taken from the first boundary point.
    #[inline]
    pub fn radius(&self) -> f64 {
        (self.p1.coords() - self.c.coords()).norm()
    }
}

/// Axis-aligned min/max accumulator.
///
/// Invariants after every `add`:
/// - `p1.x <= p2.x` and `p1.y <= p2.y`.
///
/// Starts at the origin, so the origin is always covered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Min corner.
    pub p1: Point,
    /// Max corner.
    pub p2: Point,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            p1: Point::new(0.0, 0.0),
            p2: Point::new(0.0, 0.0),
        }
    }
}

impl BoundingBox {
    /// Extend to cover a point (componentwise min into `p1`, max into `p2`).
    pub fn add(&mut self, p: Point) {
        if p.x < self.p1.x {
            self.p1.x = p.x;
        }
        if p.y < self.p1.y {
            self.p1.y = p.y;
        }
        if p.x > self.p2.x {
            self.p2.x = p.x;
        }
        if p.y > self.p2.y {
            self.p2.y = p.y;
        }
    }

    /// Extend to cover both segment endpoints.
    pub fn add_segment(&mut self, l: &LineSegment) {
        self.add(l.p1);
        self.add(l.p2);
    }

    /// Extend to cover the arc's center and both boundary points.
    ///
    /// The center is included on purpose: without the angular sweep this is
    /// the tightest box computable from the stored points alone.
    pub fn add_arc(&mut self, a: &Arc) {
        self.add(a.c);
        self.add(a.p1);
        self.add(a.p2);
    }

    /// Exhaustive dispatch over all shape kinds.
    pub fn add_shape(&mut self, s: &Shape) {
        match s {
            Shape::Point(p) => self.add(*p),
            Shape::Line(l) => self.add_segment(l),
            Shape::Arc(a) => self.add_arc(a),
            Shape::Box(b) => {
                self.add(b.p1);
                self.add(b.p2);
            }
        }
    }
}

/// Closed variant type over the shape kinds.
///
/// Derived `PartialEq` gives exactly the dedup comparison: same kind and
/// field-by-field exact coordinate equality; different kinds never compare
/// equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(LineSegment),
    Arc(Arc),
    Box(BoundingBox),
}

impl Shape {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Box(_) => ShapeKind::Box,
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}
impl From<LineSegment> for Shape {
    fn from(l: LineSegment) -> Self {
        Shape::Line(l)
    }
}
impl From<Arc> for Shape {
    fn from(a: Arc) -> Self {
        Shape::Arc(a)
    }
}
impl From<BoundingBox> for Shape {
    fn from(b: BoundingBox) -> Self {
        Shape::Box(b)
    }
}

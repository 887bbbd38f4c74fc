use super::*;

#[test]
fn kind_tags_cover_all_variants() {
    let p = Shape::Point(Point::new(1.0, 2.0));
    let l = Shape::Line(LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0)));
    let a = Shape::Arc(Arc::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ));
    let b = Shape::Box(BoundingBox::default());
    assert_eq!(p.kind(), ShapeKind::Point);
    assert_eq!(l.kind(), ShapeKind::Line);
    assert_eq!(a.kind(), ShapeKind::Arc);
    assert_eq!(b.kind(), ShapeKind::Box);
}

#[test]
fn point_equality_is_exact() {
    assert_eq!(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
    // One ulp off must not compare equal.
    assert_ne!(Point::new(1.0, 1.0), Point::new(1.0 + f64::EPSILON, 1.0));
}

#[test]
fn segment_equality_is_order_sensitive() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 1.0);
    assert_ne!(LineSegment::new(a, b), LineSegment::new(b, a));
    assert_eq!(LineSegment::new(a, b), LineSegment::new(a, b));
}

#[test]
fn cross_kind_shapes_never_compare_equal() {
    // A zero-length segment at a point is still not that point.
    let p = Shape::Point(Point::new(1.0, 1.0));
    let l = Shape::Line(LineSegment::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0)));
    assert_ne!(p, l);
}

#[test]
fn slope_handles_vertical_segments() {
    let v = LineSegment::new(Point::new(2.0, 0.0), Point::new(2.0, 5.0));
    assert!(v.slope().is_none());
    let d = LineSegment::new(Point::new(0.0, 0.0), Point::new(2.0, 1.0));
    assert_eq!(d.slope(), Some(0.5));
}

#[test]
fn arc_radius_comes_from_first_boundary_point() {
    let a = Arc::new(
        Point::new(1.0, 1.0),
        Point::new(4.0, 1.0),
        Point::new(1.0, 4.0),
    );
    assert!((a.radius() - 3.0).abs() < 1e-12);
}

#[test]
fn bounding_box_min_max_accumulation() {
    let mut b = BoundingBox::default();
    b.add(Point::new(0.0, 0.0));
    b.add(Point::new(5.0, 5.0));
    b.add(Point::new(-1.0, 3.0));
    assert_eq!(b.p1, Point::new(-1.0, 0.0));
    assert_eq!(b.p2, Point::new(5.0, 5.0));
    // Invariant: min corner <= max corner on both axes.
    assert!(b.p1.x <= b.p2.x && b.p1.y <= b.p2.y);
}

#[test]
fn bounding_box_add_shape_dispatch() {
    let mut b = BoundingBox::default();
    b.add_shape(&Shape::Line(LineSegment::new(
        Point::new(-2.0, 1.0),
        Point::new(3.0, -4.0),
    )));
    assert_eq!(b.p1, Point::new(-2.0, -4.0));
    assert_eq!(b.p2, Point::new(3.0, 1.0));

    let mut c = BoundingBox::default();
    c.add_shape(&Shape::Arc(Arc::new(
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 2.0),
    )));
    assert_eq!(c.p2, Point::new(2.0, 2.0));

    let mut outer = BoundingBox::default();
    outer.add_shape(&Shape::Box(c));
    assert_eq!(outer.p2, Point::new(2.0, 2.0));
}

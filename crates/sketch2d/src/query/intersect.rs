//! Pairwise intersection tests.
//!
//! Conventions
//! - Every test returns `Ok(Some(p))` with a witness point, `Ok(None)` for a
//!   definite miss, or `Err` for a degenerate input (zero-length segment,
//!   zero-radius arc, radius mismatch).
//! - Arc span: counter-clockwise from the angle of `p1` to the angle of `p2`
//!   about the center, endpoints inclusive under an angular slack of
//!   `GeomCfg::eps_on` radians. Coincident endpoint angles denote a full
//!   circle.
//! - Where several candidate points survive (segment/arc, collinear
//!   overlap), the one with the smallest parameter along the segment wins.

use nalgebra::Vector2;

use crate::geom::{Arc, GeomCfg, LineSegment, Point};

use super::QueryError;

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

#[inline]
fn point_at(l: &LineSegment, t: f64) -> Point {
    Point::from_coords(l.p1.coords() + (l.p2.coords() - l.p1.coords()) * t)
}

#[inline]
fn wrap_tau(a: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let mut x = a % tau;
    if x < 0.0 {
        x += tau;
    }
    x
}

/// Membership of `theta` in the CCW span from `start` to `end`.
fn in_ccw_span(theta: f64, start: f64, end: f64, eps_ang: f64) -> bool {
    let tau = std::f64::consts::TAU;
    let span = wrap_tau(end - start);
    if span <= eps_ang {
        // Coincident endpoint angles: full circle.
        return true;
    }
    let rel = wrap_tau(theta - start);
    rel <= span + eps_ang || rel >= tau - eps_ang
}

fn checked_direction(l: &LineSegment, cfg: GeomCfg) -> Result<Vector2<f64>, QueryError> {
    let d = l.p2.coords() - l.p1.coords();
    if d.norm() <= cfg.eps_on {
        return Err(QueryError::DegenerateSegment);
    }
    Ok(d)
}

fn checked_radius(arc: &Arc, cfg: GeomCfg) -> Result<f64, QueryError> {
    let r1 = (arc.p1.coords() - arc.c.coords()).norm();
    let r2 = (arc.p2.coords() - arc.c.coords()).norm();
    if r1 <= cfg.eps_radius {
        return Err(QueryError::DegenerateArc);
    }
    if (r1 - r2).abs() > cfg.eps_radius * r1.max(1.0) {
        return Err(QueryError::ArcRadiusMismatch);
    }
    Ok(r1)
}

/// Angle of `p` about the arc center, and the arc's span angles.
fn arc_angles(arc: &Arc) -> (f64, f64) {
    let s = arc.p1.coords() - arc.c.coords();
    let e = arc.p2.coords() - arc.c.coords();
    (s.y.atan2(s.x), e.y.atan2(e.x))
}

/// Point-on-segment test. The witness is the query point itself.
pub fn point_segment(
    p: Point,
    l: &LineSegment,
    cfg: GeomCfg,
) -> Result<Option<Point>, QueryError> {
    let d = checked_direction(l, cfg)?;
    let w = p.coords() - l.p1.coords();
    let len = d.norm();
    // Distance from the carrier line is |cross| / len.
    if cross(d, w).abs() > cfg.eps_on * len {
        return Ok(None);
    }
    let t = d.dot(&w) / (len * len);
    if !(-cfg.eps_on..=1.0 + cfg.eps_on).contains(&t) {
        return Ok(None);
    }
    Ok(Some(p))
}

/// Point-on-arc test: on the circle within `eps_on`, and inside the CCW span.
pub fn point_arc(p: Point, arc: &Arc, cfg: GeomCfg) -> Result<Option<Point>, QueryError> {
    let r = checked_radius(arc, cfg)?;
    let v = p.coords() - arc.c.coords();
    if (v.norm() - r).abs() > cfg.eps_on {
        return Ok(None);
    }
    let theta = v.y.atan2(v.x);
    let (start, end) = arc_angles(arc);
    if in_ccw_span(theta, start, end, cfg.eps_on) {
        Ok(Some(p))
    } else {
        Ok(None)
    }
}

/// Segment-segment intersection with both parameters in `[0, 1]`.
///
/// Collinear overlapping segments yield the earliest overlap point along
/// `a`; parallel non-collinear pairs are a definite miss.
pub fn segment_segment(
    a: &LineSegment,
    b: &LineSegment,
    cfg: GeomCfg,
) -> Result<Option<Point>, QueryError> {
    let d1 = checked_direction(a, cfg)?;
    let d2 = checked_direction(b, cfg)?;
    let w = b.p1.coords() - a.p1.coords();

    let denom = cross(d1, d2);
    if denom.abs() <= cfg.eps_det.max(cfg.eps_on * d1.norm() * d2.norm()) {
        // Parallel. Collinear iff b.p1 sits on a's carrier line.
        if cross(d1, w).abs() > cfg.eps_on * d1.norm() {
            return Ok(None);
        }
        let len2 = d1.norm_squared();
        let t0 = d1.dot(&w) / len2;
        let t1 = d1.dot(&(w + d2)) / len2;
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        if lo > 1.0 + cfg.eps_on || hi < -cfg.eps_on {
            return Ok(None);
        }
        // Earliest overlap along `a`.
        let t = lo.clamp(0.0, 1.0);
        return Ok(Some(point_at(a, t)));
    }

    let t = cross(w, d2) / denom;
    let u = cross(w, d1) / denom;
    if !(-cfg.eps_on..=1.0 + cfg.eps_on).contains(&t)
        || !(-cfg.eps_on..=1.0 + cfg.eps_on).contains(&u)
    {
        return Ok(None);
    }
    Ok(Some(point_at(a, t.clamp(0.0, 1.0))))
}

/// Segment-arc intersection: line-circle roots restricted to the segment's
/// parameter range and the arc's span. Smallest surviving `t` wins; a
/// tangent contact yields its single root.
pub fn segment_arc(
    seg: &LineSegment,
    arc: &Arc,
    cfg: GeomCfg,
) -> Result<Option<Point>, QueryError> {
    let d = checked_direction(seg, cfg)?;
    let r = checked_radius(arc, cfg)?;
    let f = seg.p1.coords() - arc.c.coords();

    let qa = d.norm_squared();
    let qb = 2.0 * f.dot(&d);
    let qc = f.norm_squared() - r * r;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < -cfg.eps_on {
        return Ok(None);
    }
    let sq = disc.max(0.0).sqrt();

    let (start, end) = arc_angles(arc);
    // Roots in ascending t since qa > 0.
    for t in [(-qb - sq) / (2.0 * qa), (-qb + sq) / (2.0 * qa)] {
        if !(-cfg.eps_on..=1.0 + cfg.eps_on).contains(&t) {
            continue;
        }
        let p = point_at(seg, t.clamp(0.0, 1.0));
        let v = p.coords() - arc.c.coords();
        let theta = v.y.atan2(v.x);
        if in_ccw_span(theta, start, end, cfg.eps_on) {
            return Ok(Some(p));
        }
    }
    Ok(None)
}

//! Point and line segment utilities.
//!
//! These work on plain `DVec2` points and carry no invariants of their own.
//! Functions that need a non-degenerate segment report
//! [`ChromalineError::DegenerateSegment`] instead of producing NaN or infinity.

use glam::DVec2;

use crate::error::{ChromalineError, Result};

/// Evaluates the line through `p1` and `p2` at `x`.
pub fn linear_interp(x: f64, p1: DVec2, p2: DVec2) -> Result<f64> {
    if p1.x == p2.x {
        return Err(ChromalineError::DegenerateSegment);
    }
    Ok((p2.y - p1.y) / (p2.x - p1.x) * (x - p1.x) + p1.y)
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn squared_distance(p1: DVec2, p2: DVec2) -> f64 {
    p1.distance_squared(p2)
}

/// Orthogonal projection of `p` onto the infinite line through `p1` and `p2`.
pub fn closest_point_on_line(p: DVec2, p1: DVec2, p2: DVec2) -> Result<DVec2> {
    let d = p2 - p1;
    let dx2 = d.x * d.x;
    let dy2 = d.y * d.y;
    let m = dx2 + dy2;
    if m == 0.0 {
        return Err(ChromalineError::DegenerateSegment);
    }
    let x = ((p.y - p1.y) * d.x * d.y + p.x * dx2 + p1.x * dy2) / m;
    let y = (p1.y * dx2 + (p.x - p1.x) * d.x * d.y + p.y * dy2) / m;
    Ok(DVec2::new(x, y))
}

/// Squared distance from `p` to the line through `p1` and `p2`.
pub fn squared_distance_to_line(p: DVec2, p1: DVec2, p2: DVec2) -> Result<f64> {
    let closest = closest_point_on_line(p, p1, p2)?;
    Ok(squared_distance(p, closest))
}

/// Returns whether `p` lies on the segment `(p1, p2)` to within `tol`.
///
/// Points outside the segment's bounding box never match. Inside the box,
/// axis-aligned segments always match; other segments match when the
/// distance to the supporting line is below `tol`.
#[must_use]
pub fn point_in_segment(p: DVec2, p1: DVec2, p2: DVec2, tol: f64) -> bool {
    let lo = p1.min(p2);
    let hi = p1.max(p2);
    if p.x < lo.x || p.x > hi.x || p.y < lo.y || p.y > hi.y {
        return false;
    }
    if p1.x == p2.x || p1.y == p2.y {
        return true;
    }
    // Not axis-aligned, so p1 != p2 and the projection exists.
    squared_distance_to_line(p, p1, p2).is_ok_and(|d2| d2 < tol * tol)
}

/// Returns whether two points are closer than `tol`.
#[must_use]
pub fn points_close(p1: DVec2, p2: DVec2, tol: f64) -> bool {
    squared_distance(p1, p2) < tol * tol
}

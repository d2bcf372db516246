//! Piecewise-linear maps of the unit interval into itself.
//!
//! A [`UnitMap`] is an ordered list of points in the unit square. The x
//! coordinates are non-decreasing, start at 0 and end at 1. Two consecutive
//! points may share an x coordinate, which makes the map jump vertically
//! there.

use std::cmp::Ordering;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ChromalineError, Result};
use crate::geometry::{linear_interp, point_in_segment, points_close, squared_distance};

/// A map of the unit interval into itself, defined by its breakpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DVec2>", into = "Vec<DVec2>")]
pub struct UnitMap {
    pub(crate) points: Vec<DVec2>,
}

impl Default for UnitMap {
    fn default() -> Self {
        Self::identity()
    }
}

impl UnitMap {
    /// Creates the identity map `[(0, 0), (1, 1)]`.
    pub fn new() -> Self {
        Self::identity()
    }

    /// Creates the identity map `[(0, 0), (1, 1)]`.
    pub fn identity() -> Self {
        Self {
            points: vec![DVec2::ZERO, DVec2::ONE],
        }
    }

    /// Creates a unit map from a point list, checking every invariant.
    pub fn from_points(points: Vec<DVec2>) -> Result<Self> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Returns the breakpoints.
    #[must_use]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of breakpoints (always at least two).
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Resets the map to the identity.
    pub fn reset(&mut self) {
        self.points = vec![DVec2::ZERO, DVec2::ONE];
    }

    /// Maps every point `(x, y)` to `(x, 1 - y)`.
    pub fn invert(&mut self) {
        for p in &mut self.points {
            p.y = 1.0 - p.y;
        }
    }

    /// Maps every point `(x, y)` to `(1 - x, y)`, keeping x non-decreasing.
    pub fn flip(&mut self) {
        self.points.reverse();
        for p in &mut self.points {
            p.x = 1.0 - p.x;
        }
    }

    /// Inserts the point `(x, y)` and returns its index.
    ///
    /// The point goes after every point whose x is at most `x`, so adding a
    /// second point at an existing x extends the jump upward in list order.
    /// The endpoints stay first and last.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<usize> {
        check_unit("x", x)?;
        check_unit("y", y)?;
        let last = self.points.len() - 1;
        let index = (1 + self.points[1..].partition_point(|p| p.x <= x)).min(last);
        self.points.insert(index, DVec2::new(x, y));
        Ok(index)
    }

    /// Removes and returns an interior point.
    ///
    /// The endpoints at x = 0 and x = 1 cannot be removed.
    pub fn delete_point(&mut self, index: usize) -> Result<DVec2> {
        let len = self.points.len();
        if index == 0 || index + 1 >= len {
            return Err(ChromalineError::InvalidDeletion { index, len });
        }
        Ok(self.points.remove(index))
    }

    /// Moves a point, keeping the x order intact.
    ///
    /// Endpoints keep their x coordinate. An interior point's x is clamped
    /// between its neighbors. Returns the point as stored.
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> Result<DVec2> {
        let len = self.points.len();
        if index >= len {
            return Err(ChromalineError::IndexOutOfBounds { index, len });
        }
        check_unit("x", x)?;
        check_unit("y", y)?;
        let x = if index == 0 {
            0.0
        } else if index == len - 1 {
            1.0
        } else {
            x.clamp(self.points[index - 1].x, self.points[index + 1].x)
        };
        self.points[index] = DVec2::new(x, y);
        Ok(self.points[index])
    }

    /// Returns whether the y values never change direction.
    ///
    /// Flat stretches are ignored, so a constant map is monotonic.
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        let mut direction = None;
        for w in self.points.windows(2) {
            match w[1].y.partial_cmp(&w[0].y) {
                None | Some(Ordering::Equal) => {}
                Some(ord) => match direction {
                    None => direction = Some(ord),
                    Some(d) if d != ord => return false,
                    Some(_) => {}
                },
            }
        }
        true
    }

    /// Returns whether the map is monotonic and onto the unit interval.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn invertible(&self) -> bool {
        if !self.is_monotonic() {
            return false;
        }
        let first = self.points[0].y;
        let last = self.points[self.points.len() - 1].y;
        (first == 0.0 && last == 1.0) || (first == 1.0 && last == 0.0)
    }

    /// Evaluates the map at `x` by linear interpolation.
    ///
    /// At a vertical jump this returns the y of the first point of the jump;
    /// at `x == 0` it returns the first point's y.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&x) {
            return Err(ChromalineError::Domain(x));
        }
        interpolate(&self.points, x)
    }

    /// Returns the index of the breakpoint closest to `p` among those closer
    /// than `threshold`.
    #[must_use]
    pub fn closest_point_index(&self, p: DVec2, threshold: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, q)| points_close(p, **q, threshold))
            .min_by(|(_, a), (_, b)| squared_distance(p, **a).total_cmp(&squared_distance(p, **b)))
            .map(|(i, _)| i)
    }

    /// Returns the index k of the first segment `(points[k], points[k + 1])`
    /// that `p` lies on, to within `tolerance`.
    #[must_use]
    pub fn segment_containing(&self, p: DVec2, tolerance: f64) -> Option<usize> {
        self.points
            .windows(2)
            .position(|w| point_in_segment(p, w[0], w[1], tolerance))
    }
}

impl TryFrom<Vec<DVec2>> for UnitMap {
    type Error = ChromalineError;

    fn try_from(points: Vec<DVec2>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<UnitMap> for Vec<DVec2> {
    fn from(map: UnitMap) -> Self {
        map.points
    }
}

/// Interpolates a sorted point list at `x`.
///
/// Stops at the first point whose x is not less than `x` and interpolates
/// on the segment ending there.
#[allow(clippy::float_cmp)]
pub(crate) fn interpolate(points: &[DVec2], x: f64) -> Result<f64> {
    if x == 0.0 {
        return points
            .first()
            .map(|p| p.y)
            .ok_or(ChromalineError::Domain(x));
    }
    let k = points.partition_point(|p| p.x < x);
    let (Some(&p1), Some(&p2)) = (k.checked_sub(1).and_then(|j| points.get(j)), points.get(k))
    else {
        return Err(ChromalineError::Domain(x));
    };
    if x == p2.x {
        return Ok(p2.y);
    }
    let y = linear_interp(x, p1, p2)?;
    Ok(y.clamp(p1.y.min(p2.y), p1.y.max(p2.y)))
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ChromalineError::OutOfRange { name, value })
    }
}

#[allow(clippy::float_cmp)]
fn validate_points(points: &[DVec2]) -> Result<()> {
    if points.len() < 2 {
        return Err(ChromalineError::InvalidPoints(format!(
            "a unit map needs at least two points, got {}",
            points.len()
        )));
    }
    for (k, p) in points.iter().enumerate() {
        if !(0.0..=1.0).contains(&p.x) || !(0.0..=1.0).contains(&p.y) {
            return Err(ChromalineError::InvalidPoints(format!(
                "point {k} ({}, {}) lies outside the unit square",
                p.x, p.y
            )));
        }
    }
    if let Some(k) = points.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(ChromalineError::InvalidPoints(format!(
            "x decreases after point {k}"
        )));
    }
    if points[0].x != 0.0 {
        return Err(ChromalineError::InvalidPoints(
            "the first point must have x = 0".into(),
        ));
    }
    if points[points.len() - 1].x != 1.0 {
        return Err(ChromalineError::InvalidPoints(
            "the last point must have x = 1".into(),
        ));
    }
    Ok(())
}

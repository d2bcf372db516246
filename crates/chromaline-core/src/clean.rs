//! Greedy breakpoint removal.
//!
//! Interior points are visited once from left to right. A point is dropped
//! when interpolating without it stays within the tolerance of every
//! original point; after a drop the same index is tried again. The result
//! is not always the smallest possible point set.

use glam::DVec2;

use crate::error::Result;
use crate::options::Options;
use crate::unit_map::{interpolate, UnitMap};

impl UnitMap {
    /// Removes breakpoints whose omission changes the map by less than
    /// `tolerance` at every original breakpoint. Returns the number removed.
    pub fn clean(&mut self, tolerance: f64) -> Result<usize> {
        let before = self.points.len();
        self.points = clean_points(&self.points, tolerance)?;
        let removed = before - self.points.len();
        log::debug!("clean removed {removed} of {before} points (tolerance {tolerance})");
        Ok(removed)
    }

    /// Cleans with [`Options::clean_tolerance`].
    pub fn clean_with(&mut self, options: &Options) -> Result<usize> {
        self.clean(options.clean_tolerance)
    }
}

/// Returns the subset of `points` kept by a greedy clean at `tolerance`.
///
/// `points` must start at x = 0 and end at x = 1 with non-decreasing x.
pub(crate) fn clean_points(points: &[DVec2], tolerance: f64) -> Result<Vec<DVec2>> {
    let mut kept = points.to_vec();
    let mut k = 1;
    while k + 1 < kept.len() {
        let mut candidate = kept.clone();
        candidate.remove(k);
        if max_error(&candidate, points)? < tolerance {
            kept = candidate;
        } else {
            k += 1;
        }
    }
    Ok(kept)
}

/// Largest deviation of `candidate` from the original points' y values.
fn max_error(candidate: &[DVec2], original: &[DVec2]) -> Result<f64> {
    original.iter().try_fold(0.0_f64, |worst, p| {
        let y = interpolate(candidate, p.x)?;
        Ok(worst.max((y - p.y).abs()))
    })
}

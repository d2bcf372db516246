//! Segment-triple interchange format.
//!
//! Plotting libraries commonly describe a colormap channel as a list of
//! `(t, y_left, y_right)` triples. A discontinuity at `t` has
//! `y_left != y_right`; elsewhere the two values agree.

use chromaline_core::{DVec2, Result, UnitMap};
use serde::{Deserialize, Serialize};

/// One `(t, y_left, y_right)` entry of a channel's segment data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct SegmentTriple {
    /// Position along the colormap.
    pub t: f64,
    /// Value approaching `t` from the left.
    pub left: f64,
    /// Value leaving `t` to the right.
    pub right: f64,
}

impl SegmentTriple {
    /// Creates a triple.
    pub fn new(t: f64, left: f64, right: f64) -> Self {
        Self { t, left, right }
    }
}

impl From<[f64; 3]> for SegmentTriple {
    fn from([t, left, right]: [f64; 3]) -> Self {
        Self { t, left, right }
    }
}

impl From<SegmentTriple> for [f64; 3] {
    fn from(s: SegmentTriple) -> Self {
        [s.t, s.left, s.right]
    }
}

/// Converts a unit map to segment triples.
///
/// Consecutive points that share an x collapse into one triple holding the
/// first point's y on the left and the last point's y on the right.
#[allow(clippy::float_cmp)]
pub fn to_segments(map: &UnitMap) -> Vec<SegmentTriple> {
    let mut segments: Vec<SegmentTriple> = Vec::with_capacity(map.num_points());
    for p in map.points() {
        match segments.last_mut() {
            Some(last) if last.t == p.x => last.right = p.y,
            _ => segments.push(SegmentTriple::new(p.x, p.y, p.y)),
        }
    }
    segments
}

/// Builds a unit map from segment triples.
#[allow(clippy::float_cmp)]
pub fn from_segments(segments: &[SegmentTriple]) -> Result<UnitMap> {
    let mut points = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        points.push(DVec2::new(s.t, s.left));
        if s.left != s.right {
            points.push(DVec2::new(s.t, s.right));
        }
    }
    UnitMap::from_points(points)
}

/// Segment triples for all three channels of a colormap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentData {
    pub red: Vec<SegmentTriple>,
    pub green: Vec<SegmentTriple>,
    pub blue: Vec<SegmentTriple>,
}

impl SegmentData {
    /// Creates segment data from per-channel `[t, left, right]` arrays.
    pub fn from_arrays(red: &[[f64; 3]], green: &[[f64; 3]], blue: &[[f64; 3]]) -> Self {
        let convert = |a: &[[f64; 3]]| a.iter().copied().map(SegmentTriple::from).collect();
        Self {
            red: convert(red),
            green: convert(green),
            blue: convert(blue),
        }
    }

    /// Serializes the segment data as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses segment data from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

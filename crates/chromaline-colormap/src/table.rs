//! Row-interleaved text tables (`.cmap` files).
//!
//! The first line holds the colormap name. Every following line is a row
//! `t r g b` with `t` strictly increasing. Discontinuities are written as
//! two rows whose `t` values differ by a tiny epsilon, and the reader folds
//! such rows back into a jump.

use chromaline_core::{
    point_in_segment, points_close, ChromalineError, DVec2, Options, Result, UnitMap,
};
use serde::{Deserialize, Serialize};

use crate::colormap::{Channel, Colormap};

/// Formatting parameters for colormap tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Number of decimal digits written per value.
    pub precision: usize,
    /// Offset added to `t` to keep rows strictly increasing at a jump.
    pub jump_epsilon: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            precision: 12,
            jump_epsilon: 1e-8,
        }
    }
}

impl TableOptions {
    /// Creates table options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal digits.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the jump epsilon.
    pub fn with_jump_epsilon(mut self, epsilon: f64) -> Self {
        self.jump_epsilon = epsilon;
        self
    }
}

/// Writes a colormap as a text table.
///
/// Each row advances to the smallest breakpoint x not yet written in any
/// channel. Channels with a breakpoint at that x use its y; the others are
/// evaluated at the row's `t`.
#[allow(clippy::float_cmp)]
pub fn write_table(colormap: &Colormap, options: &TableOptions) -> Result<String> {
    let maps = Channel::ALL.map(|c| colormap.channel(c));
    let mut cursors = [0_usize; 3];
    let mut previous: Option<f64> = None;

    let mut out = String::new();
    out.push_str(colormap.name());
    out.push('\n');

    while let Some(t) = maps
        .iter()
        .zip(cursors)
        .filter_map(|(map, cursor)| map.points().get(cursor).map(|p| p.x))
        .min_by(f64::total_cmp)
    {
        let row_t = match previous {
            Some(prev) if t <= prev => prev + options.jump_epsilon,
            _ => t,
        };
        let mut row = [row_t, 0.0, 0.0, 0.0];
        for (i, map) in maps.iter().enumerate() {
            row[i + 1] = match map.points().get(cursors[i]) {
                Some(p) if p.x == t => {
                    cursors[i] += 1;
                    p.y
                }
                _ => map.evaluate(row_t.min(1.0))?,
            };
        }
        let line: Vec<String> = row
            .iter()
            .map(|v| format!("{:.*}", options.precision, v))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
        previous = Some(row_t);
    }
    Ok(out)
}

/// Parses a text table into a colormap.
///
/// Rows with four values are `t r g b`; rows with three values are `r g b`
/// spread evenly over [0, 1]. Rows closer than twice
/// [`TableOptions::jump_epsilon`] share a `t`. Each channel drops repeated
/// points and points lying on the segment between their neighbors, both to
/// within [`Options::merge_tolerance`], and is then cleaned at
/// [`Options::compose_clean_tolerance`].
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
pub fn parse_table(text: &str, table: &TableOptions, options: &Options) -> Result<Colormap> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));
    let name = match lines.next() {
        Some((_, name)) if !name.is_empty() => name.to_string(),
        _ => return Err(parse_error(1, "missing colormap name")),
    };

    let mut rows: Vec<(usize, Vec<f64>)> = Vec::new();
    for (line, content) in lines.filter(|(_, l)| !l.is_empty()) {
        let values = content
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| parse_error(line, format!("'{token}' is not a number")))
            })
            .collect::<Result<Vec<f64>>>()?;
        if let Some((first_line, first)) = rows.first() {
            if values.len() != first.len() {
                return Err(parse_error(
                    line,
                    format!(
                        "expected {} values as on line {first_line}, found {}",
                        first.len(),
                        values.len()
                    ),
                ));
            }
        } else if values.len() != 3 && values.len() != 4 {
            return Err(parse_error(
                line,
                format!("expected 3 or 4 values, found {}", values.len()),
            ));
        }
        rows.push((line, values));
    }
    if rows.len() < 2 {
        return Err(parse_error(
            rows.first().map_or(2, |(line, _)| *line),
            "a colormap table needs at least two rows",
        ));
    }

    let last_row = rows.len() - 1;
    let snap = 2.0 * table.jump_epsilon;
    let mut channels: [Vec<DVec2>; 3] = Default::default();
    let mut previous: Option<(f64, f64)> = None;

    for (k, (line, values)) in rows.iter().enumerate() {
        let (raw, rgb) = if values.len() == 4 {
            (values[0], &values[1..])
        } else {
            (k as f64 / last_row as f64, &values[..])
        };
        let mut t = match previous {
            Some((prev_raw, _)) if raw < prev_raw => {
                return Err(parse_error(*line, format!("t = {raw} decreases")));
            }
            Some((prev_raw, prev_t)) if raw - prev_raw < snap => prev_t,
            _ => raw,
        };
        if k == 0 || k == last_row {
            let end = if k == 0 { 0.0 } else { 1.0 };
            if (t - end).abs() >= snap {
                return Err(parse_error(*line, format!("t must be {end} here, found {t}")));
            }
            t = end;
        }
        if !(0.0..=1.0).contains(&t) {
            return Err(parse_error(*line, format!("t = {t} is outside [0, 1]")));
        }
        for ((points, &y), channel) in channels.iter_mut().zip(rgb).zip(Channel::ALL) {
            if !(0.0..=1.0).contains(&y) {
                return Err(parse_error(
                    *line,
                    format!("{} value {y} is outside [0, 1]", channel.name()),
                ));
            }
            let p = DVec2::new(t, y);
            match points.last() {
                Some(&last) if last.x == t && points_close(last, p, options.merge_tolerance) => {}
                _ => points.push(p),
            }
        }
        previous = Some((raw, t));
    }

    let [red, green, blue] =
        channels.map(|points| drop_collinear(&points, options.merge_tolerance));
    let mut red = UnitMap::from_points(red)?;
    let mut green = UnitMap::from_points(green)?;
    let mut blue = UnitMap::from_points(blue)?;
    for map in [&mut red, &mut green, &mut blue] {
        map.clean(options.compose_clean_tolerance)?;
    }
    log::debug!(
        "parsed table '{name}' with {} rows into {}/{}/{} points",
        rows.len(),
        red.num_points(),
        green.num_points(),
        blue.num_points()
    );
    Ok(Colormap::from_channels(name, red, green, blue))
}

/// Drops points that lie on the segment joining the previous kept point and
/// the next point. Rows written for other channels' breakpoints leave such
/// points behind, and a channel with a jump cannot shed them through
/// `clean`.
fn drop_collinear(points: &[DVec2], tolerance: f64) -> Vec<DVec2> {
    let mut kept: Vec<DVec2> = Vec::with_capacity(points.len());
    for (k, &p) in points.iter().enumerate() {
        match (kept.last(), points.get(k + 1)) {
            (Some(&prev), Some(&next)) if point_in_segment(p, prev, next, tolerance) => {}
            _ => kept.push(p),
        }
    }
    kept
}

fn parse_error(line: usize, message: impl Into<String>) -> ChromalineError {
    ChromalineError::Parse {
        line,
        message: message.into(),
    }
}

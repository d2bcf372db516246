//! Functional composition of unit maps.

use glam::DVec2;

use crate::clean::clean_points;
use crate::error::Result;
use crate::geometry::points_close;
use crate::options::Options;
use crate::unit_map::UnitMap;

impl UnitMap {
    /// Returns the map `x -> self(other(x))` using the default tolerances.
    pub fn compose(&self, other: &UnitMap) -> Result<UnitMap> {
        self.compose_with(other, &Options::default())
    }

    /// Returns the map `x -> self(other(x))`.
    ///
    /// Each segment of `other` is split wherever its y range crosses a
    /// breakpoint of `self`. Adjacent output points closer than
    /// [`Options::merge_tolerance`] are merged, and the result is cleaned at
    /// [`Options::compose_clean_tolerance`].
    #[allow(clippy::float_cmp)]
    pub fn compose_with(&self, other: &UnitMap, options: &Options) -> Result<UnitMap> {
        let mut composed: Vec<DVec2> = Vec::with_capacity(other.points.len() + self.points.len());

        for w in other.points.windows(2) {
            let (p0, p1) = (w[0], w[1]);
            let mut mapped = Vec::new();
            if p0.y == p1.y {
                let v = self.evaluate(p0.y)?;
                mapped.push(DVec2::new(p0.x, v));
                mapped.push(DVec2::new(p1.x, v));
            } else {
                // The range ends map back to the segment ends exactly; the
                // inverse interpolation can miss them by an ulp.
                for b in self.breakpoints_between(p0.y, p1.y)? {
                    let x = if b.x == p0.y {
                        p0.x
                    } else if b.x == p1.y {
                        p1.x
                    } else {
                        let x = (b.x - p0.y) * (p1.x - p0.x) / (p1.y - p0.y) + p0.x;
                        x.clamp(p0.x, p1.x)
                    };
                    mapped.push(DVec2::new(x, b.y));
                }
            }

            if let (Some(&last), Some(&first)) = (composed.last(), mapped.first()) {
                if points_close(last, first, options.merge_tolerance) {
                    mapped.remove(0);
                }
            }
            composed.extend(mapped);
        }

        let raw_len = composed.len();
        let points = clean_points(&composed, options.compose_clean_tolerance)?;
        log::debug!(
            "composed {} x {} points into {} ({} before cleaning)",
            self.points.len(),
            other.points.len(),
            points.len(),
            raw_len
        );
        UnitMap::from_points(points)
    }

    /// Breakpoints of `self` whose x lies between `a` and `b`, bracketed by
    /// the values at `a` and `b`, ordered from `a` to `b`.
    #[allow(clippy::float_cmp)]
    fn breakpoints_between(&self, a: f64, b: f64) -> Result<Vec<DVec2>> {
        let (lo, hi) = if b < a { (b, a) } else { (a, b) };
        let mut found: Vec<DVec2> = self
            .points
            .iter()
            .copied()
            .filter(|p| lo <= p.x && p.x <= hi)
            .collect();
        if found.first().map_or(true, |p| p.x != lo) {
            found.insert(0, DVec2::new(lo, self.evaluate(lo)?));
        }
        if found.last().map_or(true, |p| p.x != hi) {
            found.push(DVec2::new(hi, self.evaluate(hi)?));
        }
        if b < a {
            found.reverse();
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit_map::tests::{arb_unit_map, assert_invariants};
    use proptest::prelude::*;

    fn map(points: &[(f64, f64)]) -> UnitMap {
        UnitMap::from_points(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()).unwrap()
    }

    fn assert_maps_close(a: &UnitMap, b: &UnitMap, tol: f64) {
        assert_eq!(a.num_points(), b.num_points(), "{a:?} vs {b:?}");
        for (p, q) in a.points().iter().zip(b.points()) {
            assert!((*p - *q).length() < tol, "{p:?} vs {q:?}");
        }
    }

    fn samples() -> Vec<UnitMap> {
        vec![
            map(&[(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]),
            map(&[(0.0, 1.0), (0.4, 0.2), (1.0, 0.0)]),
            map(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]),
            map(&[(0.0, 0.0), (0.3, 0.3), (0.3, 0.9), (1.0, 1.0)]),
            map(&[(0.0, 0.2), (0.25, 0.6), (0.75, 0.6), (1.0, 0.9)]),
        ]
    }

    #[test]
    fn test_compose_identity_law() {
        let id = UnitMap::identity();
        for f in samples() {
            assert_maps_close(&f.compose(&id).unwrap(), &f, 1e-6);
            assert_maps_close(&id.compose(&f).unwrap(), &f, 1e-6);
        }
    }

    #[test]
    fn test_compose_values() {
        let f = map(&[(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]);
        let g = map(&[(0.0, 1.0), (1.0, 0.0)]);
        let fg = f.compose(&g).unwrap();
        for x in [0.0, 0.1, 0.25, 0.5, 0.8, 1.0] {
            let expected = f.evaluate(g.evaluate(x).unwrap()).unwrap();
            assert!((fg.evaluate(x).unwrap() - expected).abs() < 1e-9);
        }
        // The breakpoint of f shows up at g^-1(0.5) = 0.5.
        assert!(fg
            .points()
            .iter()
            .any(|p| (*p - DVec2::new(0.5, 0.25)).length() < 1e-12));
    }

    #[test]
    fn test_compose_with_peak() {
        let f = map(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let g = map(&[(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);
        let fg = f.compose(&g).unwrap();
        for x in [0.0, 0.125, 0.25, 0.4, 0.5, 0.75, 0.9, 1.0] {
            let expected = f.evaluate(g.evaluate(x).unwrap()).unwrap();
            assert!((fg.evaluate(x).unwrap() - expected).abs() < 1e-9, "x = {x}");
        }
        assert_eq!(fg.num_points(), 5);
    }

    #[test]
    fn test_compose_flat_segment() {
        let f = map(&[(0.0, 0.0), (0.5, 0.8), (1.0, 1.0)]);
        let g = map(&[(0.0, 0.5), (1.0, 0.5)]);
        let fg = f.compose(&g).unwrap();
        assert_maps_close(&fg, &map(&[(0.0, 0.8), (1.0, 0.8)]), 1e-12);
    }

    #[test]
    fn test_compose_custom_tolerances() {
        let f = map(&[(0.0, 0.0), (0.5, 0.502), (1.0, 1.0)]);
        let id = UnitMap::identity();
        let strict = f.compose(&id).unwrap();
        assert_eq!(strict.num_points(), 3);
        let loose = f
            .compose_with(&id, &Options::new().with_compose_clean_tolerance(0.01))
            .unwrap();
        assert_eq!(loose, id);
    }

    #[test]
    fn test_compose_hits_last_endpoint_exactly() {
        // Inverse interpolation of the last range end gives 0.999...9 here.
        let f = map(&[(0.0, 0.0), (1.0, 0.0)]);
        let g = map(&[(0.0, 0.0), (0.25, 0.5), (1.0, 0.318_084_864_241_507_34)]);
        let fg = f.compose(&g).unwrap();
        assert_invariants(&fg);
        assert_eq!(fg.points()[fg.num_points() - 1].x, 1.0);
        for x in [0.0, 0.3, 0.9, 1.0] {
            assert_eq!(fg.evaluate(x).unwrap(), 0.0);
        }
    }

    proptest! {
        #[test]
        fn prop_compose_matches_pointwise(
            f in arb_unit_map(),
            g in arb_unit_map(),
            xs in prop::collection::vec(0.0..=1.0_f64, 1..16),
        ) {
            let fg = f
                .compose(&g)
                .map_err(|e| TestCaseError::fail(format!("{f:?} o {g:?}: {e}")))?;
            assert_invariants(&fg);
            // Both sides jump at breakpoints, possibly on different sides.
            let near_breakpoint = |x: f64| {
                g.points()
                    .iter()
                    .chain(fg.points())
                    .any(|p| (p.x - x).abs() < 1e-9)
            };
            for x in xs.into_iter().filter(|&x| !near_breakpoint(x)) {
                let expected = f.evaluate(g.evaluate(x).unwrap()).unwrap();
                let actual = fg.evaluate(x).unwrap();
                prop_assert!(
                    (actual - expected).abs() < 1e-5,
                    "x = {}: {} vs {}",
                    x,
                    actual,
                    expected
                );
            }
        }
    }
}

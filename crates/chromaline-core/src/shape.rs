//! Whole-curve reshaping: transpose, power curve, and log-like spacing.

use glam::DVec2;

use crate::error::{ChromalineError, Result};
use crate::options::Options;
use crate::unit_map::UnitMap;

impl UnitMap {
    /// Swaps the roles of x and y, turning the map into its inverse.
    ///
    /// Only invertible maps can be transposed; a decreasing map is walked
    /// from its far end so that x stays non-decreasing.
    #[allow(clippy::float_cmp)]
    pub fn transpose(&mut self) -> Result<()> {
        if !self.invertible() {
            log::debug!("refusing to transpose a non-invertible map");
            return Err(ChromalineError::NotInvertible);
        }
        if self.points[0].y == 1.0 {
            self.points.reverse();
        }
        for p in &mut self.points {
            *p = DVec2::new(p.y, p.x);
        }
        Ok(())
    }

    /// Replaces every y with `x.powf(exponent)`, keeping the breakpoint xs.
    pub fn make_power(&mut self, exponent: f64) -> Result<()> {
        if !(exponent.is_finite() && exponent > 0.0) {
            return Err(ChromalineError::InvalidParameter(format!(
                "power exponent must be positive and finite, got {exponent}"
            )));
        }
        for p in &mut self.points {
            p.y = p.x.powf(exponent);
        }
        Ok(())
    }

    /// Applies [`make_power`](Self::make_power) with [`Options::power`].
    pub fn make_power_with(&mut self, options: &Options) -> Result<()> {
        self.make_power(options.power)
    }

    /// Replaces the points with a log-like curve of the same point count.
    ///
    /// The y values are evenly spaced and the x values grow geometrically
    /// by `scale`: `x_k = (scale^k - 1) / (scale^n - 1)` for `n + 1` points.
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn make_loglike(&mut self, scale: f64) -> Result<()> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ChromalineError::InvalidParameter(format!(
                "log-like scale must be positive and finite, got {scale}"
            )));
        }
        let n = self.points.len() - 1;
        let nf = n as f64;
        let points = if scale == 1.0 {
            (0..=n)
                .map(|k| {
                    let t = k as f64 / nf;
                    DVec2::new(t, t)
                })
                .collect()
        } else {
            let b = scale.powf(nf) - 1.0;
            (0..=n)
                .map(|k| {
                    let kf = k as f64;
                    DVec2::new((scale.powf(kf) - 1.0) / b, kf / nf)
                })
                .collect()
        };
        *self = UnitMap::from_points(points)?;
        Ok(())
    }

    /// Applies [`make_loglike`](Self::make_loglike) with [`Options::loglike_scale`].
    pub fn make_loglike_with(&mut self, options: &Options) -> Result<()> {
        self.make_loglike(options.loglike_scale)
    }
}

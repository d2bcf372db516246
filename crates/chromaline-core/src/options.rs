//! Configuration options for unit map editing.

use serde::{Deserialize, Serialize};

/// Default tolerance for merging and cleaning composed maps.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Tunable parameters for the operations that need them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Distance below which adjacent composed points are merged.
    pub merge_tolerance: f64,

    /// Tolerance of the clean pass applied to composed and imported maps.
    pub compose_clean_tolerance: f64,

    /// Tolerance for an interactive clean.
    pub clean_tolerance: f64,

    /// Exponent used by the power-curve transform.
    pub power: f64,

    /// Scale factor used by the log-like transform.
    pub loglike_scale: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            merge_tolerance: DEFAULT_TOLERANCE,
            compose_clean_tolerance: DEFAULT_TOLERANCE,
            clean_tolerance: 0.005,
            power: 2.0,
            loglike_scale: std::f64::consts::SQRT_2,
        }
    }
}

impl Options {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the merge tolerance.
    pub fn with_merge_tolerance(mut self, tolerance: f64) -> Self {
        self.merge_tolerance = tolerance;
        self
    }

    /// Sets the tolerance of the clean pass after composition.
    pub fn with_compose_clean_tolerance(mut self, tolerance: f64) -> Self {
        self.compose_clean_tolerance = tolerance;
        self
    }

    /// Sets the interactive clean tolerance.
    pub fn with_clean_tolerance(mut self, tolerance: f64) -> Self {
        self.clean_tolerance = tolerance;
        self
    }

    /// Sets the power-curve exponent.
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Sets the log-like scale factor.
    pub fn with_loglike_scale(mut self, scale: f64) -> Self {
        self.loglike_scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert_eq!(options.merge_tolerance, 1e-6);
        assert_eq!(options.compose_clean_tolerance, 1e-6);
        assert_eq!(options.clean_tolerance, 0.005);
        assert_eq!(options.power, 2.0);
        assert!((options.loglike_scale - 2f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_options_builder() {
        let options = Options::new().with_power(3.0).with_clean_tolerance(0.01);
        assert_eq!(options.power, 3.0);
        assert_eq!(options.clean_tolerance, 0.01);
        assert_eq!(options.merge_tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_options_partial_json() {
        let options: Options = serde_json::from_str(r#"{"power": 0.5}"#).unwrap();
        assert_eq!(options.power, 0.5);
        assert_eq!(options.clean_tolerance, 0.005);
    }
}

use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    derivative_tol: f64,
    bounds: [f64; 2],
}

/// Errors that can occur when validating a Newton-Raphson solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and positive")]
    ResidualTol,

    #[error("derivative_tol must be finite and non-negative")]
    DerivativeTol,

    #[error("bounds must be finite with lower < upper, got [{lower}, {upper}]")]
    Bounds { lower: f64, upper: f64 },
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1000, 1e-5, 1e-6, [-0.99, 10.0]).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if the
    /// bounds are non-finite or not strictly increasing.
    pub fn new(
        max_iters: usize,
        residual_tol: f64,
        derivative_tol: f64,
        bounds: [f64; 2],
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol <= 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !derivative_tol.is_finite() || derivative_tol < 0.0 {
            return Err(ConfigError::DerivativeTol);
        }
        let [lower, upper] = bounds;
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(ConfigError::Bounds { lower, upper });
        }

        Ok(Self {
            max_iters,
            residual_tol,
            derivative_tol,
            bounds,
        })
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual magnitude below which the solver has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the derivative magnitude below which no step is attempted.
    #[must_use]
    pub fn derivative_tol(&self) -> f64 {
        self.derivative_tol
    }

    /// Returns the `[lower, upper]` bounds applied to every iterate.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        self.bounds
    }

    /// Clamps `x` into the configured bounds.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        let [lower, upper] = self.bounds;
        x.clamp(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 1000);
        assert_eq!(config.residual_tol(), 1e-5);
        assert_eq!(config.derivative_tol(), 1e-6);
        assert_eq!(config.bounds(), [-0.99, 10.0]);
    }

    #[test]
    fn rejects_bad_tolerances() {
        assert_eq!(
            Config::new(10, 0.0, 1e-6, [0.0, 1.0]),
            Err(ConfigError::ResidualTol)
        );
        assert_eq!(
            Config::new(10, 1e-5, f64::NAN, [0.0, 1.0]),
            Err(ConfigError::DerivativeTol)
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = Config::new(10, 1e-5, 1e-6, [1.0, -1.0]);
        assert!(matches!(result, Err(ConfigError::Bounds { .. })));
    }

    #[test]
    fn clamp_respects_bounds() {
        let config = Config::default();
        assert_eq!(config.clamp(-5.0), -0.99);
        assert_eq!(config.clamp(50.0), 10.0);
        assert_eq!(config.clamp(0.1), 0.1);
    }
}

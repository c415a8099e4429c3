//! ACO configuration.

use crate::error::{AcoError, AcoResult};

/// Configuration for the ant colony solver.
///
/// # Examples
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_rho(0.1)
///     .with_iterations(1000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Pheromone influence exponent. 0 ignores trail history entirely.
    pub alpha: f64,

    /// Heuristic (inverse distance) influence exponent.
    pub beta: f64,

    /// Evaporation rate in `[0, 1]`. 0 never decays the trail;
    /// 1 is a legal degenerate case that zeroes it every iteration.
    pub rho: f64,

    /// Fixed number of solver iterations. One ant tour is constructed
    /// per iteration; there is no convergence-based early exit.
    pub iterations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.1,
            iterations: 1000,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.alpha.is_finite() {
            return Err(AcoError::InvalidParameter {
                name: "alpha",
                value: self.alpha,
            });
        }
        if !self.beta.is_finite() {
            return Err(AcoError::InvalidParameter {
                name: "beta",
                value: self.beta,
            });
        }
        if !self.rho.is_finite() || !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoError::InvalidParameter {
                name: "rho",
                value: self.rho,
            });
        }
        if self.iterations == 0 {
            return Err(AcoError::InvalidParameter {
                name: "iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert!((config.rho - 0.1).abs() < 1e-10);
        assert_eq!(config.iterations, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rho_bounds() {
        assert!(AcoConfig::default().with_rho(0.0).validate().is_ok());
        assert!(AcoConfig::default().with_rho(1.0).validate().is_ok());
        assert!(AcoConfig::default().with_rho(-0.1).validate().is_err());
        assert!(AcoConfig::default().with_rho(1.1).validate().is_err());
    }

    #[test]
    fn test_validate_non_finite_exponents() {
        assert!(AcoConfig::default().with_alpha(f64::NAN).validate().is_err());
        assert!(AcoConfig::default()
            .with_beta(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(AcoConfig::default().with_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_error_names_parameter() {
        let err = AcoConfig::default().with_rho(2.0).validate().unwrap_err();
        assert_eq!(
            err,
            crate::error::AcoError::InvalidParameter {
                name: "rho",
                value: 2.0
            }
        );
    }
}

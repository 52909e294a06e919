//! Configuration for distribution fitting and probability mapping.

use crate::error::FitError;

/// Default lower bound on the number of usable values in a fitting group.
pub const DEFAULT_MIN_SAMPLES: usize = 4;

/// Default distance kept between a cumulative probability and 0 or 1
/// before the inverse normal transform.
pub const DEFAULT_PROBABILITY_EPSILON: f64 = 1e-12;

/// Estimator used to fit gamma distribution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GammaMethod {
    /// Maximum likelihood with location fixed at zero, solved by Newton
    /// iteration seeded with Thom's approximation.
    #[default]
    Mle,
    /// Thom's (1958) closed-form approximation of the maximum likelihood
    /// shape.
    Thom,
    /// Method of moments estimation (shape = mean²/var, scale = var/mean).
    Mme,
}

impl std::str::FromStr for GammaMethod {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mle" => Ok(GammaMethod::Mle),
            "thom" => Ok(GammaMethod::Thom),
            "mme" | "moments" => Ok(GammaMethod::Mme),
            other => Err(FitError::InvalidConfig {
                reason: format!("unknown gamma method: {other:?}"),
            }),
        }
    }
}

/// Configuration for fitting and standardizing one group of observations.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use caeli_distribution::{FitConfig, GammaMethod};
///
/// let config = FitConfig::new()
///     .with_min_samples(10)
///     .with_gamma_method(GammaMethod::Thom);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct FitConfig {
    min_samples: usize,
    gamma_method: GammaMethod,
    probability_epsilon: f64,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `min_samples = 4`, `gamma_method = Mle`,
    /// `probability_epsilon = 1e-12`.
    pub fn new() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            gamma_method: GammaMethod::default(),
            probability_epsilon: DEFAULT_PROBABILITY_EPSILON,
        }
    }

    // --- Builder methods ---

    /// Sets the minimum number of usable values per fitting group.
    ///
    /// For the gamma family only strictly positive values count.
    pub fn with_min_samples(mut self, n: usize) -> Self {
        self.min_samples = n;
        self
    }

    /// Sets the gamma estimator.
    pub fn with_gamma_method(mut self, m: GammaMethod) -> Self {
        self.gamma_method = m;
        self
    }

    /// Sets the probability clamping epsilon.
    pub fn with_probability_epsilon(mut self, eps: f64) -> Self {
        self.probability_epsilon = eps;
        self
    }

    // --- Accessors ---

    /// Returns the minimum number of usable values per fitting group.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Returns the gamma estimator.
    pub fn gamma_method(&self) -> GammaMethod {
        self.gamma_method
    }

    /// Returns the probability clamping epsilon.
    pub fn probability_epsilon(&self) -> f64 {
        self.probability_epsilon
    }

    /// Validates this configuration.
    ///
    /// Checks that `min_samples` is at least 1 and `probability_epsilon` is
    /// finite and in the open interval (0, 0.5).
    pub fn validate(&self) -> Result<(), FitError> {
        if self.min_samples < 1 {
            return Err(FitError::InvalidConfig {
                reason: format!("min_samples must be >= 1, got {}", self.min_samples),
            });
        }

        if !self.probability_epsilon.is_finite()
            || self.probability_epsilon <= 0.0
            || self.probability_epsilon >= 0.5
        {
            return Err(FitError::InvalidConfig {
                reason: format!(
                    "probability_epsilon must be in (0, 0.5) and finite, got {}",
                    self.probability_epsilon
                ),
            });
        }

        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = FitConfig::new();
        assert_eq!(cfg.min_samples(), 4);
        assert_eq!(cfg.gamma_method(), GammaMethod::Mle);
        assert!((cfg.probability_epsilon() - 1e-12).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chaining() {
        let cfg = FitConfig::new()
            .with_min_samples(20)
            .with_gamma_method(GammaMethod::Mme)
            .with_probability_epsilon(1e-6);

        assert_eq!(cfg.min_samples(), 20);
        assert_eq!(cfg.gamma_method(), GammaMethod::Mme);
        assert!((cfg.probability_epsilon() - 1e-6).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_ok() {
        assert!(FitConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_zero_min_samples() {
        assert!(FitConfig::new().with_min_samples(0).validate().is_err());
    }

    #[test]
    fn validate_bad_epsilon() {
        assert!(
            FitConfig::new()
                .with_probability_epsilon(0.0)
                .validate()
                .is_err()
        );
        assert!(
            FitConfig::new()
                .with_probability_epsilon(0.5)
                .validate()
                .is_err()
        );
        assert!(
            FitConfig::new()
                .with_probability_epsilon(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn gamma_method_from_str() {
        assert_eq!("MLE".parse::<GammaMethod>().unwrap(), GammaMethod::Mle);
        assert_eq!("thom".parse::<GammaMethod>().unwrap(), GammaMethod::Thom);
        assert_eq!("moments".parse::<GammaMethod>().unwrap(), GammaMethod::Mme);
        assert!("weibull".parse::<GammaMethod>().is_err());
    }

    #[test]
    fn default_trait() {
        assert_eq!(FitConfig::default().min_samples(), FitConfig::new().min_samples());
    }
}

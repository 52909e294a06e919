//! The two distribution families behind SPI and SPEI.

/// Distribution family fitted to a group of observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Two-parameter gamma with location fixed at zero (SPI).
    ///
    /// Support is strictly positive; zeros are handled as a point mass and
    /// negative values are treated as missing.
    Gamma,
    /// Three-parameter log-logistic (SPEI).
    ///
    /// Fitted on all valid values, negative ones included.
    LogLogistic,
}

impl Family {
    /// Returns `true` if zero observations form a separate point mass that
    /// is excluded from the fit and blended back into the probability.
    pub fn has_zero_mass(self) -> bool {
        matches!(self, Family::Gamma)
    }

    /// Returns `true` if `value` is a valid observation for this family.
    ///
    /// Non-finite values are never valid. Gamma additionally rejects
    /// negative values.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Family::Gamma => value.is_finite() && value >= 0.0,
            Family::LogLogistic => value.is_finite(),
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Family::Gamma => f.write_str("gamma"),
            Family::LogLogistic => f.write_str("log-logistic"),
        }
    }
}

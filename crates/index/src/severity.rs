//! Drought and wetness categories of standardized index values
//! (McKee et al., 1993).

use std::fmt;

/// Severity band of a standardized index value.
///
/// | Band | Range |
/// |------|-------|
/// | `ExtremelyWet` | z ≥ 2.0 |
/// | `VeryWet` | 1.5 ≤ z < 2.0 |
/// | `ModeratelyWet` | 1.0 ≤ z < 1.5 |
/// | `NearNormal` | −1.0 < z < 1.0 |
/// | `ModeratelyDry` | −1.5 < z ≤ −1.0 |
/// | `SeverelyDry` | −2.0 < z ≤ −1.5 |
/// | `ExtremelyDry` | z ≤ −2.0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    ExtremelyDry,
    SeverelyDry,
    ModeratelyDry,
    NearNormal,
    ModeratelyWet,
    VeryWet,
    ExtremelyWet,
}

impl Severity {
    /// Band containing `z`, `None` for a missing value.
    pub fn classify(z: f64) -> Option<Self> {
        if z.is_nan() {
            return None;
        }
        let band = if z >= 2.0 {
            Severity::ExtremelyWet
        } else if z >= 1.5 {
            Severity::VeryWet
        } else if z >= 1.0 {
            Severity::ModeratelyWet
        } else if z > -1.0 {
            Severity::NearNormal
        } else if z > -1.5 {
            Severity::ModeratelyDry
        } else if z > -2.0 {
            Severity::SeverelyDry
        } else {
            Severity::ExtremelyDry
        };
        Some(band)
    }

    /// `true` for the three dry bands.
    pub fn is_drought(self) -> bool {
        self <= Severity::ModeratelyDry
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::ExtremelyDry => "extremely dry",
            Severity::SeverelyDry => "severely dry",
            Severity::ModeratelyDry => "moderately dry",
            Severity::NearNormal => "near normal",
            Severity::ModeratelyWet => "moderately wet",
            Severity::VeryWet => "very wet",
            Severity::ExtremelyWet => "extremely wet",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(Severity::classify(2.0), Some(Severity::ExtremelyWet));
        assert_eq!(Severity::classify(1.999), Some(Severity::VeryWet));
        assert_eq!(Severity::classify(1.5), Some(Severity::VeryWet));
        assert_eq!(Severity::classify(1.0), Some(Severity::ModeratelyWet));
        assert_eq!(Severity::classify(0.999), Some(Severity::NearNormal));
        assert_eq!(Severity::classify(-0.999), Some(Severity::NearNormal));
        assert_eq!(Severity::classify(-1.0), Some(Severity::ModeratelyDry));
        assert_eq!(Severity::classify(-1.5), Some(Severity::SeverelyDry));
        assert_eq!(Severity::classify(-2.0), Some(Severity::ExtremelyDry));
    }

    #[test]
    fn infinities() {
        assert_eq!(Severity::classify(f64::INFINITY), Some(Severity::ExtremelyWet));
        assert_eq!(Severity::classify(f64::NEG_INFINITY), Some(Severity::ExtremelyDry));
    }

    #[test]
    fn missing() {
        assert_eq!(Severity::classify(f64::NAN), None);
    }

    #[test]
    fn drought_bands() {
        assert!(Severity::SeverelyDry.is_drought());
        assert!(!Severity::NearNormal.is_drought());
        assert_eq!(Severity::ModeratelyDry.to_string(), "moderately dry");
    }
}

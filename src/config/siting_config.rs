use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_PRICE_CAP, DEFAULT_VACANCY_CAP, DEFAULT_YIELD_CAP};

/// Normalization ceilings for the market factors.
///
/// Every cap acts as a divisor when a raw factor is rescaled onto [0, 1],
/// so caps must be finite and strictly positive. The defaults describe the
/// Gauteng commercial market (rand per square metre for prices); retune
/// them for other markets or currencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitingConfig {
    pub yield_cap: f64,
    pub price_cap: f64,
    pub vacancy_cap: f64,
}

impl Default for SitingConfig {
    fn default() -> Self {
        Self {
            yield_cap: DEFAULT_YIELD_CAP,
            price_cap: DEFAULT_PRICE_CAP,
            vacancy_cap: DEFAULT_VACANCY_CAP,
        }
    }
}

impl SitingConfig {
    /// Builds a config from explicit caps, or `None` when any cap is
    /// non-finite or not strictly positive.
    pub fn with_caps(yield_cap: f64, price_cap: f64, vacancy_cap: f64) -> Option<Self> {
        let caps = [yield_cap, price_cap, vacancy_cap];
        if caps.iter().any(|cap| !cap.is_finite() || *cap <= 0.0) {
            return None;
        }
        Some(Self {
            yield_cap,
            price_cap,
            vacancy_cap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_match_reference_market() {
        let config = SitingConfig::default();
        assert_eq!(config.yield_cap, 10.0);
        assert_eq!(config.price_cap, 35_000.0);
        assert_eq!(config.vacancy_cap, 15.0);
    }

    #[test]
    fn with_caps_accepts_positive_finite_values() {
        let config = SitingConfig::with_caps(8.0, 20_000.0, 12.0).unwrap();
        assert_eq!(config.yield_cap, 8.0);
        assert_eq!(config.price_cap, 20_000.0);
        assert_eq!(config.vacancy_cap, 12.0);
    }

    #[test]
    fn with_caps_rejects_degenerate_values() {
        assert!(SitingConfig::with_caps(0.0, 20_000.0, 12.0).is_none());
        assert!(SitingConfig::with_caps(8.0, -1.0, 12.0).is_none());
        assert!(SitingConfig::with_caps(8.0, 20_000.0, f64::NAN).is_none());
        assert!(SitingConfig::with_caps(f64::INFINITY, 20_000.0, 12.0).is_none());
    }
}

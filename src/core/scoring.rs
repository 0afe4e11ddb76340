// Factor normalization and composite scoring.
//
// Every factor is rescaled onto [0, 1] with higher-is-better orientation
// before weighting. Clamping keeps a single outlier from pushing a
// composite outside [0, 1] and distorting the centroid.

use crate::config::constants::INDEX_SCALE_MAX;
use crate::config::siting_config::SitingConfig;
use crate::models::property::Property;
use crate::models::weights::FactorWeights;

/// Yield scales up against the cap; values above it saturate at 1.
pub fn normalize_rental_yield(value: f64, cap: f64) -> f64 {
    (value / cap).clamp(0.0, 1.0)
}

/// Price is inverted; cheaper stock scores higher.
pub fn normalize_price_per_area(value: f64, cap: f64) -> f64 {
    (1.0 - value / cap).clamp(0.0, 1.0)
}

/// Vacancy is inverted; tighter occupancy scores higher.
pub fn normalize_vacancy(value: f64, cap: f64) -> f64 {
    (1.0 - value / cap).clamp(0.0, 1.0)
}

/// Transit proximity and footfall arrive as 0-100 indices.
pub fn normalize_index(value: f64) -> f64 {
    (value / INDEX_SCALE_MAX).clamp(0.0, 1.0)
}

/// Dot product of the normalized factors with a unit weight vector.
///
/// Expects weights already rescaled to sum to 1 (see
/// [`FactorWeights::normalized`]); with clamped factors that guarantees a
/// result in [0, 1]. The caller filters out non-finite records first.
pub fn composite_score(
    property: &Property,
    unit_weights: &FactorWeights,
    config: &SitingConfig,
) -> f64 {
    unit_weights.rental_yield * normalize_rental_yield(property.rental_yield, config.yield_cap)
        + unit_weights.price_per_area
            * normalize_price_per_area(property.price_per_area, config.price_cap)
        + unit_weights.vacancy * normalize_vacancy(property.vacancy, config.vacancy_cap)
        + unit_weights.transit_proximity * normalize_index(property.transit_proximity)
        + unit_weights.footfall * normalize_index(property.footfall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::GeoPoint;

    fn property_with_factors(
        rental_yield: f64,
        price_per_area: f64,
        vacancy: f64,
        transit_proximity: f64,
        footfall: f64,
    ) -> Property {
        Property::new(
            "p1".to_string(),
            GeoPoint::new(-26.2, 28.0),
            rental_yield,
            price_per_area,
            vacancy,
            transit_proximity,
            footfall,
            "retail".to_string(),
        )
    }

    #[test]
    fn yield_above_cap_saturates_at_one() {
        assert_eq!(normalize_rental_yield(50.0, 10.0), 1.0);
        assert_eq!(normalize_rental_yield(1000.0, 10.0), 1.0);
        assert_eq!(normalize_rental_yield(5.0, 10.0), 0.5);
        assert_eq!(normalize_rental_yield(-2.0, 10.0), 0.0);
    }

    #[test]
    fn price_and_vacancy_are_inverted() {
        assert_eq!(normalize_price_per_area(0.0, 35_000.0), 1.0);
        assert_eq!(normalize_price_per_area(35_000.0, 35_000.0), 0.0);
        assert_eq!(normalize_price_per_area(70_000.0, 35_000.0), 0.0);
        assert_eq!(normalize_price_per_area(-10.0, 35_000.0), 1.0);

        assert_eq!(normalize_vacancy(0.0, 15.0), 1.0);
        assert_eq!(normalize_vacancy(30.0, 15.0), 0.0);
        assert!((normalize_vacancy(7.5, 15.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn index_factors_scale_by_one_hundred() {
        assert_eq!(normalize_index(0.0), 0.0);
        assert_eq!(normalize_index(100.0), 1.0);
        assert_eq!(normalize_index(250.0), 1.0);
        assert_eq!(normalize_index(-5.0), 0.0);
        assert!((normalize_index(20.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn composite_stays_in_unit_interval_for_extreme_inputs() {
        let config = SitingConfig::default();
        let unit = FactorWeights::new(30.0, 25.0, 20.0, 15.0, 10.0)
            .normalized()
            .unwrap();

        let outlier = property_with_factors(1000.0, 1e9, -5.0, 250.0, -10.0);
        let score = composite_score(&outlier, &unit, &config);
        assert!((0.0..=1.0).contains(&score), "score {}", score);

        let best = property_with_factors(10.0, 0.0, 0.0, 100.0, 100.0);
        assert!((composite_score(&best, &unit, &config) - 1.0).abs() < 1e-12);

        let worst = property_with_factors(0.0, 35_000.0, 15.0, 0.0, 0.0);
        assert_eq!(composite_score(&worst, &unit, &config), 0.0);
    }

    #[test]
    fn single_factor_weights_reduce_to_that_factor() {
        let config = SitingConfig::default();
        let transit_only = FactorWeights::new(0.0, 0.0, 0.0, 1.0, 0.0);
        let property = property_with_factors(9.0, 500.0, 14.0, 35.0, 80.0);
        let score = composite_score(&property, &transit_only, &config);
        assert!((score - 0.35).abs() < 1e-12);
    }
}

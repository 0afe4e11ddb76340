use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::constants::{
    INDEX_SCALE_MAX, METRO_MAX_LAT, METRO_MAX_LON, METRO_MIN_LAT, METRO_MIN_LON,
    SYNTHETIC_MAX_PRICE, SYNTHETIC_MAX_VACANCY, SYNTHETIC_MAX_YIELD, SYNTHETIC_MIN_PRICE,
    SYNTHETIC_MIN_VACANCY, SYNTHETIC_MIN_YIELD,
};
use crate::models::property::{GeoPoint, Property};
use crate::utils::logging::{self, DataLoadType, OperationCategory};

const CATEGORIES: [&str; 5] = ["retail", "office", "industrial", "residential", "mixed-use"];

/// Generates a random portfolio across the metro bounding box.
///
/// Pass a seed to make the portfolio reproducible; without one every call
/// draws fresh entropy. Factor spans intentionally run past the default
/// normalization caps so clamping is exercised on realistic data.
pub fn generate_portfolio(count: usize, seed: Option<u64>) -> Vec<Property> {
    let _timing = logging::start_timing(
        "generate_portfolio",
        OperationCategory::DataLoad {
            subcategory: DataLoadType::Synthetic,
        },
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut properties = Vec::with_capacity(count);
    for index in 0..count {
        let position = GeoPoint::new(
            rng.gen_range(METRO_MIN_LAT..METRO_MAX_LAT),
            rng.gen_range(METRO_MIN_LON..METRO_MAX_LON),
        );
        let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        properties.push(Property::new(
            format!("prop-{:04}", index),
            position,
            rng.gen_range(SYNTHETIC_MIN_YIELD..SYNTHETIC_MAX_YIELD),
            rng.gen_range(SYNTHETIC_MIN_PRICE..SYNTHETIC_MAX_PRICE),
            rng.gen_range(SYNTHETIC_MIN_VACANCY..SYNTHETIC_MAX_VACANCY),
            rng.gen_range(0.0..INDEX_SCALE_MAX),
            rng.gen_range(0.0..INDEX_SCALE_MAX),
            category.to_string(),
        ));
    }

    debug!(
        count = properties.len(),
        seeded = seed.is_some(),
        "synthetic portfolio generated"
    );
    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_portfolio(0, Some(1)).len(), 0);
        assert_eq!(generate_portfolio(37, Some(1)).len(), 37);
    }

    #[test]
    fn same_seed_reproduces_the_portfolio() {
        let first = generate_portfolio(25, Some(42));
        let second = generate_portfolio(25, Some(42));

        for (lhs, rhs) in first.iter().zip(&second) {
            assert_eq!(lhs.id, rhs.id);
            assert_eq!(lhs.position.latitude, rhs.position.latitude);
            assert_eq!(lhs.position.longitude, rhs.position.longitude);
            assert_eq!(lhs.rental_yield, rhs.rental_yield);
            assert_eq!(lhs.footfall, rhs.footfall);
            assert_eq!(lhs.category, rhs.category);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let first = generate_portfolio(10, Some(1));
        let second = generate_portfolio(10, Some(2));
        let identical = first
            .iter()
            .zip(&second)
            .all(|(lhs, rhs)| lhs.position.latitude == rhs.position.latitude);
        assert!(!identical);
    }

    #[test]
    fn generated_properties_are_valid_and_in_bounds() {
        for property in generate_portfolio(100, Some(7)) {
            assert!(property.is_valid(), "{} has a non-finite field", property.id);
            assert!(property.position.latitude >= METRO_MIN_LAT);
            assert!(property.position.latitude <= METRO_MAX_LAT);
            assert!(property.position.longitude >= METRO_MIN_LON);
            assert!(property.position.longitude <= METRO_MAX_LON);
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::models::weights::Factor;

/// A geographic position in plain latitude/longitude degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Finite inputs are clamped into valid geographic range. Non-finite
    /// inputs are kept as-is so the validity filter can reject the record
    /// instead of a clamp masking it.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let latitude = if latitude.is_finite() {
            latitude.clamp(MIN_LATITUDE, MAX_LATITUDE)
        } else {
            latitude
        };
        let longitude = if longitude.is_finite() {
            longitude.clamp(MIN_LONGITUDE, MAX_LONGITUDE)
        } else {
            longitude
        };
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Planar distance in raw coordinate degrees. Adequate at metro scale
    /// where the candidates cluster; not a geodesic, and not meant to be
    /// one for city-sized search areas.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

/// A candidate property with the five market factors used for scoring.
///
/// Raw factor values are stored untouched; rescaling and clamping happen
/// during scoring. Records with non-finite coordinates or factors are
/// skipped by the engine rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub position: GeoPoint,
    pub rental_yield: f64,
    pub price_per_area: f64,
    pub vacancy: f64,
    pub transit_proximity: f64,
    pub footfall: f64,
    pub category: String,
}

impl Property {
    pub fn new(
        id: String,
        position: GeoPoint,
        rental_yield: f64,
        price_per_area: f64,
        vacancy: f64,
        transit_proximity: f64,
        footfall: f64,
        category: String,
    ) -> Self {
        Self {
            id,
            position,
            rental_yield,
            price_per_area,
            vacancy,
            transit_proximity,
            footfall,
            category,
        }
    }

    /// A record enters scoring only when its position and every factor
    /// are finite numbers.
    pub fn is_valid(&self) -> bool {
        self.position.is_finite()
            && self.rental_yield.is_finite()
            && self.price_per_area.is_finite()
            && self.vacancy.is_finite()
            && self.transit_proximity.is_finite()
            && self.footfall.is_finite()
    }

    pub fn factor(&self, factor: Factor) -> f64 {
        match factor {
            Factor::RentalYield => self.rental_yield,
            Factor::PricePerArea => self.price_per_area,
            Factor::Vacancy => self.vacancy,
            Factor::TransitProximity => self.transit_proximity,
            Factor::Footfall => self.footfall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property_at(latitude: f64, longitude: f64) -> Property {
        Property::new(
            "p1".to_string(),
            GeoPoint::new(latitude, longitude),
            6.0,
            20_000.0,
            5.0,
            60.0,
            40.0,
            "retail".to_string(),
        )
    }

    #[test]
    fn out_of_range_coordinates_are_clamped() {
        let point = GeoPoint::new(123.0, -999.0);
        assert_eq!(point.latitude, 90.0);
        assert_eq!(point.longitude, -180.0);
    }

    #[test]
    fn non_finite_coordinates_survive_construction_and_fail_validity() {
        let point = GeoPoint::new(f64::NAN, f64::INFINITY);
        assert!(point.latitude.is_nan());
        assert!(point.longitude.is_infinite());
        assert!(!point.is_finite());

        let property = property_at(f64::NAN, 28.0);
        assert!(!property.is_valid());
    }

    #[test]
    fn distance_is_planar_euclidean() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn validity_requires_every_factor_finite() {
        let mut property = property_at(-26.2, 28.0);
        assert!(property.is_valid());

        property.footfall = f64::NAN;
        assert!(!property.is_valid());

        property.footfall = 40.0;
        property.price_per_area = f64::INFINITY;
        assert!(!property.is_valid());
    }

    #[test]
    fn factor_accessor_matches_fields() {
        let property = property_at(-26.2, 28.0);
        assert_eq!(property.factor(Factor::RentalYield), 6.0);
        assert_eq!(property.factor(Factor::PricePerArea), 20_000.0);
        assert_eq!(property.factor(Factor::Vacancy), 5.0);
        assert_eq!(property.factor(Factor::TransitProximity), 60.0);
        assert_eq!(property.factor(Factor::Footfall), 40.0);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_FOOTFALL_WEIGHT, DEFAULT_PRICE_WEIGHT, DEFAULT_TRANSIT_WEIGHT, DEFAULT_VACANCY_WEIGHT,
    DEFAULT_YIELD_WEIGHT,
};

/// The five market factors a siting run weighs against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    RentalYield,
    PricePerArea,
    Vacancy,
    TransitProximity,
    Footfall,
}

pub const ALL_FACTORS: [Factor; 5] = [
    Factor::RentalYield,
    Factor::PricePerArea,
    Factor::Vacancy,
    Factor::TransitProximity,
    Factor::Footfall,
];

impl FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rentalYield" => Ok(Factor::RentalYield),
            "pricePerArea" => Ok(Factor::PricePerArea),
            "vacancy" => Ok(Factor::Vacancy),
            "transitProximity" => Ok(Factor::TransitProximity),
            "footfall" => Ok(Factor::Footfall),
            _ => Err(format!("Unknown factor: {}", s)),
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Factor::RentalYield => write!(f, "rentalYield"),
            Factor::PricePerArea => write!(f, "pricePerArea"),
            Factor::Vacancy => write!(f, "vacancy"),
            Factor::TransitProximity => write!(f, "transitProximity"),
            Factor::Footfall => write!(f, "footfall"),
        }
    }
}

/// Relative importance of each factor. Magnitudes are free-form; the
/// engine rescales the vector to a convex combination before scoring, so
/// {30, 25, 20, 15, 10} and {3, 2.5, 2, 1.5, 1} behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorWeights {
    pub rental_yield: f64,
    pub price_per_area: f64,
    pub vacancy: f64,
    pub transit_proximity: f64,
    pub footfall: f64,
}

/// The dashboard's default slider configuration.
pub const DEFAULT_WEIGHTS: FactorWeights = FactorWeights {
    rental_yield: DEFAULT_YIELD_WEIGHT,
    price_per_area: DEFAULT_PRICE_WEIGHT,
    vacancy: DEFAULT_VACANCY_WEIGHT,
    transit_proximity: DEFAULT_TRANSIT_WEIGHT,
    footfall: DEFAULT_FOOTFALL_WEIGHT,
};

/// Income-first profile: yield and occupancy dominate.
pub const INCOME_WEIGHTS: FactorWeights = FactorWeights {
    rental_yield: 40.0,
    price_per_area: 15.0,
    vacancy: 30.0,
    transit_proximity: 10.0,
    footfall: 5.0,
};

/// Value-first profile: entry price dominates.
pub const VALUE_WEIGHTS: FactorWeights = FactorWeights {
    rental_yield: 20.0,
    price_per_area: 45.0,
    vacancy: 15.0,
    transit_proximity: 10.0,
    footfall: 10.0,
};

/// Trade-first profile: transit access and passing trade dominate.
pub const FOOTFALL_WEIGHTS: FactorWeights = FactorWeights {
    rental_yield: 10.0,
    price_per_area: 10.0,
    vacancy: 10.0,
    transit_proximity: 30.0,
    footfall: 40.0,
};

impl Default for FactorWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl FactorWeights {
    pub fn new(
        rental_yield: f64,
        price_per_area: f64,
        vacancy: f64,
        transit_proximity: f64,
        footfall: f64,
    ) -> Self {
        Self {
            rental_yield,
            price_per_area,
            vacancy,
            transit_proximity,
            footfall,
        }
    }

    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::RentalYield => self.rental_yield,
            Factor::PricePerArea => self.price_per_area,
            Factor::Vacancy => self.vacancy,
            Factor::TransitProximity => self.transit_proximity,
            Factor::Footfall => self.footfall,
        }
    }

    /// The weights paired with their factors, in canonical factor order.
    pub fn components(&self) -> [(Factor, f64); 5] {
        [
            (Factor::RentalYield, self.rental_yield),
            (Factor::PricePerArea, self.price_per_area),
            (Factor::Vacancy, self.vacancy),
            (Factor::TransitProximity, self.transit_proximity),
            (Factor::Footfall, self.footfall),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.rental_yield + self.price_per_area + self.vacancy + self.transit_proximity
            + self.footfall
    }

    /// Rescales the vector so its components sum to 1, or `None` when the
    /// sum is zero, negative, or not finite. Callers validate the
    /// individual components separately; this only guards the division.
    pub fn normalized(&self) -> Option<FactorWeights> {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        Some(Self {
            rental_yield: self.rental_yield / total,
            price_per_area: self.price_per_area / total,
            vacancy: self.vacancy / total,
            transit_proximity: self.transit_proximity / total,
            footfall: self.footfall / total,
        })
    }
}

/// A named weight configuration, as stored in a profiles file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightProfile {
    pub name: String,
    pub weights: FactorWeights,
}

/// The built-in profiles offered for comparison sweeps.
pub fn preset_profiles() -> Vec<WeightProfile> {
    vec![
        WeightProfile {
            name: "balanced".to_string(),
            weights: DEFAULT_WEIGHTS,
        },
        WeightProfile {
            name: "income".to_string(),
            weights: INCOME_WEIGHTS,
        },
        WeightProfile {
            name: "value".to_string(),
            weights: VALUE_WEIGHTS,
        },
        WeightProfile {
            name: "footfall".to_string(),
            weights: FOOTFALL_WEIGHTS,
        },
    ]
}

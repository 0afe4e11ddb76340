use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::config::constants::SEARCH_RADIUS_HINT_KM;
use crate::config::siting_config::SitingConfig;
use crate::core::scoring::composite_score;
use crate::models::property::{GeoPoint, Property};
use crate::models::siting::{ScoredProperty, SitingResult};
use crate::models::weights::FactorWeights;
use crate::utils::logging::{self, OperationCategory, SitingPhase};

#[derive(Debug)]
pub enum SitingError {
    /// A weight was negative or non-finite, or the whole vector was zero.
    InvalidWeights(String),
    /// Every supplied property was rejected by the validity filter;
    /// carries the number of properties supplied.
    NoValidProperties(usize),
    /// Every valid property scored exactly zero, so the score-weighted
    /// centroid is undefined.
    DegenerateScoreField,
}

impl fmt::Display for SitingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitingError::InvalidWeights(reason) => write!(f, "Invalid weights: {}", reason),
            SitingError::NoValidProperties(total) => {
                write!(f, "No valid properties among the {} supplied", total)
            }
            SitingError::DegenerateScoreField => {
                write!(f, "Every property scored zero under the given weights")
            }
        }
    }
}

impl std::error::Error for SitingError {}

/// Centre-of-gravity siting calculator.
///
/// Holds only the normalization caps; `compute_siting` is a pure function
/// of its arguments, mutates nothing, and keeps no state between calls,
/// so one engine can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct SitingEngine {
    config: SitingConfig,
}

impl SitingEngine {
    pub fn new(config: SitingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SitingConfig {
        &self.config
    }

    /// Runs the siting pipeline over a portfolio: validate the weights,
    /// drop non-finite records, score what remains, place the
    /// score-weighted centroid, and rank by distance to it.
    ///
    /// `k` caps the ranked list; a `k` beyond the valid count returns
    /// everything valid, and `k = 0` returns an empty ranking while still
    /// computing the centroid and mean.
    pub fn compute_siting(
        &self,
        properties: &[Property],
        weights: &FactorWeights,
        k: usize,
    ) -> Result<SitingResult, SitingError> {
        validate_weights(weights)?;
        let unit_weights = weights
            .normalized()
            .ok_or_else(|| SitingError::InvalidWeights("weight sum must be positive".to_string()))?;

        let valid = self.filter_valid(properties);
        if valid.is_empty() {
            return Err(SitingError::NoValidProperties(properties.len()));
        }
        debug!(
            supplied = properties.len(),
            valid = valid.len(),
            "portfolio filtered"
        );

        let scores = self.score_portfolio(&valid, &unit_weights);
        let score_sum: f64 = scores.iter().sum();
        // Scores are individually non-negative, so a non-positive sum means
        // every property sat at its worst extreme on every factor.
        if score_sum <= 0.0 {
            return Err(SitingError::DegenerateScoreField);
        }

        let centroid = self.weighted_centroid(&valid, &scores, score_sum);
        let mean_score = score_sum / valid.len() as f64;
        let top_k = self.rank_by_distance(&valid, &scores, &centroid, k);

        Ok(SitingResult {
            centroid,
            mean_score,
            top_k,
            search_radius_hint: SEARCH_RADIUS_HINT_KM,
        })
    }

    fn filter_valid<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        let _timing = logging::start_timing(
            "filter_valid",
            OperationCategory::Siting {
                subcategory: SitingPhase::Validation,
            },
        );
        properties.iter().filter(|p| p.is_valid()).collect()
    }

    fn score_portfolio(&self, valid: &[&Property], unit_weights: &FactorWeights) -> Vec<f64> {
        let _timing = logging::start_timing(
            "score_portfolio",
            OperationCategory::Siting {
                subcategory: SitingPhase::Scoring,
            },
        );
        valid
            .iter()
            .map(|property| composite_score(property, unit_weights, &self.config))
            .collect()
    }

    fn weighted_centroid(&self, valid: &[&Property], scores: &[f64], score_sum: f64) -> GeoPoint {
        let _timing = logging::start_timing(
            "weighted_centroid",
            OperationCategory::Siting {
                subcategory: SitingPhase::Centroid,
            },
        );
        let mut lat_acc = 0.0;
        let mut lon_acc = 0.0;
        for (property, score) in valid.iter().zip(scores) {
            lat_acc += property.position.latitude * score;
            lon_acc += property.position.longitude * score;
        }
        GeoPoint::new(lat_acc / score_sum, lon_acc / score_sum)
    }

    fn rank_by_distance(
        &self,
        valid: &[&Property],
        scores: &[f64],
        centroid: &GeoPoint,
        k: usize,
    ) -> Vec<ScoredProperty> {
        let _timing = logging::start_timing(
            "rank_by_distance",
            OperationCategory::Siting {
                subcategory: SitingPhase::Ranking,
            },
        );
        let mut ranked: Vec<ScoredProperty> = valid
            .iter()
            .zip(scores)
            .map(|(property, score)| ScoredProperty {
                property: (*property).clone(),
                composite_score: *score,
                distance_to_centroid: property.position.distance_to(centroid),
            })
            .collect();
        // Stable sort keyed on distance alone: equal distances keep their
        // portfolio order.
        ranked.sort_by(|a, b| {
            a.distance_to_centroid
                .partial_cmp(&b.distance_to_centroid)
                .unwrap_or(Ordering::Equal)
        });
        ranked.truncate(k);
        ranked
    }
}

fn validate_weights(weights: &FactorWeights) -> Result<(), SitingError> {
    for (factor, value) in weights.components() {
        if !value.is_finite() {
            return Err(SitingError::InvalidWeights(format!(
                "{} weight is not finite",
                factor
            )));
        }
        if value < 0.0 {
            return Err(SitingError::InvalidWeights(format!(
                "{} weight is negative ({})",
                factor, value
            )));
        }
    }
    if weights.sum() <= 0.0 {
        return Err(SitingError::InvalidWeights(
            "at least one weight must be positive".to_string(),
        ));
    }
    Ok(())
}

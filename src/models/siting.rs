use serde::{Deserialize, Serialize};

use super::property::{GeoPoint, Property};

/// A property annotated with its composite score and its distance to the
/// demand centroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProperty {
    pub property: Property,
    pub composite_score: f64,
    pub distance_to_centroid: f64,
}

/// The output of one siting computation. Built fresh per call and never
/// persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitingResult {
    /// Score-weighted average position of every valid property.
    pub centroid: GeoPoint,
    /// Mean composite score over all valid properties, not just the top K.
    pub mean_score: f64,
    /// Valid properties ranked nearest-first by distance to the centroid.
    pub top_k: Vec<ScoredProperty>,
    /// Fixed presentation scalar for drawing a viewport circle; plays no
    /// part in the ranking.
    pub search_radius_hint: f64,
}

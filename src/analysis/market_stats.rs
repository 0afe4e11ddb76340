use std::collections::HashMap;

use serde::Serialize;

use crate::models::property::Property;
use crate::models::weights::{Factor, ALL_FACTORS};

#[derive(Debug, Clone, Serialize)]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Descriptive summary of a portfolio before siting runs over it. Factor
/// ranges cover valid properties only; category counts cover everything
/// supplied, since a record can be miscounted long before it is rescored.
#[derive(Debug, Clone, Serialize)]
pub struct MarketStats {
    pub total_count: usize,
    pub valid_count: usize,
    pub factor_ranges: Vec<(Factor, FactorRange)>,
    pub category_counts: Vec<(String, usize)>,
}

pub fn summarize_market(properties: &[Property]) -> MarketStats {
    let valid: Vec<&Property> = properties.iter().filter(|p| p.is_valid()).collect();

    let mut factor_ranges = Vec::new();
    if !valid.is_empty() {
        for factor in ALL_FACTORS {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            let mut sum = 0.0;
            for property in &valid {
                let value = property.factor(factor);
                min = min.min(value);
                max = max.max(value);
                sum += value;
            }
            factor_ranges.push((
                factor,
                FactorRange {
                    min,
                    max,
                    mean: sum / valid.len() as f64,
                },
            ));
        }
    }

    let mut tallies: HashMap<&str, usize> = HashMap::new();
    for property in properties {
        *tallies.entry(property.category.as_str()).or_insert(0) += 1;
    }
    let mut category_counts: Vec<(String, usize)> = tallies
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    category_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    MarketStats {
        total_count: properties.len(),
        valid_count: valid.len(),
        factor_ranges,
        category_counts,
    }
}

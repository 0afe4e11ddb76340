use crate::analysis::market_stats::MarketStats;
use crate::core::sweep::{best_outcome, ProfileOutcome};
use crate::models::siting::SitingResult;
use crate::models::weights::FactorWeights;

pub fn print_market_overview(stats: &MarketStats) {
    println!("\nMarket Overview");
    println!("{}", "-".repeat(40));
    println!("Properties supplied: {}", stats.total_count);
    println!("Properties usable:   {}", stats.valid_count);

    if !stats.factor_ranges.is_empty() {
        println!("\nFactor ranges (valid properties):");
        for (factor, range) in &stats.factor_ranges {
            println!(
                "  {:<18} min={:.2}  max={:.2}  mean={:.2}",
                factor.to_string(),
                range.min,
                range.max,
                range.mean
            );
        }
    }

    if !stats.category_counts.is_empty() {
        println!("\nCategories:");
        for (category, count) in &stats.category_counts {
            println!("  {:<14} {}", category, count);
        }
    }
}

pub fn print_siting_summary(result: &SitingResult, weights: &FactorWeights) {
    println!("\nSiting Summary");
    println!("{}", "-".repeat(40));

    let weight_line: Vec<String> = weights
        .components()
        .iter()
        .map(|(factor, value)| format!("{}={}", factor, value))
        .collect();
    println!("Weights: {}", weight_line.join(", "));

    println!(
        "Demand centroid: ({:.5}, {:.5})",
        result.centroid.latitude, result.centroid.longitude
    );
    println!("Mean composite score: {:.3}", result.mean_score);
    println!("Suggested search radius: {:.1} km", result.search_radius_hint);

    if result.top_k.is_empty() {
        println!("No ranked properties requested.");
        return;
    }
    println!("\nClosest properties to the centroid:");
    for (rank, entry) in result.top_k.iter().enumerate() {
        println!(
            "  {}. {} [{}] score={:.3} distance={:.4} deg at ({:.5}, {:.5})",
            rank + 1,
            entry.property.id,
            entry.property.category,
            entry.composite_score,
            entry.distance_to_centroid,
            entry.property.position.latitude,
            entry.property.position.longitude
        );
    }
}

pub fn print_profile_rankings(outcomes: &[ProfileOutcome]) {
    println!("\nProfile Comparison");
    println!("{}", "-".repeat(40));

    let mean_of = |outcome: &ProfileOutcome| -> f64 {
        match &outcome.outcome {
            Ok(result) => result.mean_score,
            Err(_) => f64::NEG_INFINITY,
        }
    };

    let mut ordered: Vec<&ProfileOutcome> = outcomes.iter().collect();
    ordered.sort_by(|a, b| {
        mean_of(b)
            .partial_cmp(&mean_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for outcome in &ordered {
        match &outcome.outcome {
            Ok(result) => println!(
                "  {:<14} mean={:.3} centroid=({:.5}, {:.5})",
                outcome.profile.name,
                result.mean_score,
                result.centroid.latitude,
                result.centroid.longitude
            ),
            Err(err) => println!("  {:<14} failed: {}", outcome.profile.name, err),
        }
    }

    if let Some(best) = best_outcome(outcomes) {
        println!("\nBest profile: {}", best.profile.name);
    } else {
        println!("\nNo profile produced a result.");
    }
}

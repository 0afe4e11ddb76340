use anyhow::anyhow;
use clap::Parser;

use cogsite::analysis::market_stats::summarize_market;
use cogsite::analysis::reporting;
use cogsite::cli::cli::Args;
use cogsite::config::siting_config::SitingConfig;
use cogsite::core::engine::SitingEngine;
use cogsite::core::sweep::{best_outcome, run_profile_sweep};
use cogsite::data::{portfolio_loader, profiles_loader, synthetic};
use cogsite::models::weights::{preset_profiles, FactorWeights, WeightProfile};
use cogsite::utils::csv_export::CsvExporter;
use cogsite::utils::logging;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    logging::init_logging(args.enable_timing());

    println!("Centre-of-Gravity Property Siting");
    println!(
        "Top-K: {}, CSV export: {}, Timing: {}",
        args.top_k(),
        if args.enable_csv_export() { "enabled" } else { "disabled" },
        if args.enable_timing() { "enabled" } else { "disabled" }
    );

    let config = SitingConfig::with_caps(args.yield_cap(), args.price_cap(), args.vacancy_cap())
        .ok_or_else(|| anyhow!("normalization caps must be positive and finite"))?;
    let engine = SitingEngine::new(config);

    let properties = match args.input() {
        Some(path) => {
            let properties = portfolio_loader::load_portfolio(path)
                .map_err(|e| anyhow!("failed to load portfolio from {}: {}", path, e))?;
            println!("Loaded {} properties from {}", properties.len(), path);
            properties
        }
        None => {
            let properties = synthetic::generate_portfolio(args.count(), args.seed());
            println!("Generated {} synthetic properties", properties.len());
            properties
        }
    };

    let stats = summarize_market(&properties);
    if args.verbose() {
        reporting::print_market_overview(&stats);
    } else {
        println!("Usable properties: {} of {}", stats.valid_count, stats.total_count);
    }

    let weights = FactorWeights::new(
        args.weight_yield(),
        args.weight_price(),
        args.weight_vacancy(),
        args.weight_transit(),
        args.weight_footfall(),
    );

    let exporter = if args.enable_csv_export() {
        Some(CsvExporter::new(args.export_dir(), args.verbose())?)
    } else {
        None
    };

    let profiles: Option<Vec<WeightProfile>> = if let Some(path) = args.profiles() {
        Some(profiles_loader::load_profiles(path)?)
    } else if args.compare_presets() {
        Some(preset_profiles())
    } else {
        None
    };

    match profiles {
        Some(profiles) => {
            let outcomes =
                run_profile_sweep(&engine, &properties, &profiles, args.top_k(), args.parallel());
            reporting::print_profile_rankings(&outcomes);
            if let Some(best) = best_outcome(&outcomes) {
                if let Ok(result) = &best.outcome {
                    reporting::print_siting_summary(result, &best.profile.weights);
                }
            }
            if let Some(exporter) = &exporter {
                exporter
                    .export_profile_comparison(&outcomes)
                    .map_err(|e| anyhow!("failed to export profile comparison: {}", e))?;
            }
        }
        None => {
            let result = engine.compute_siting(&properties, &weights, args.top_k())?;
            reporting::print_siting_summary(&result, &weights);
            if let Some(exporter) = &exporter {
                exporter
                    .export_siting_results(&result, &weights)
                    .map_err(|e| anyhow!("failed to export siting results: {}", e))?;
            }
        }
    }

    logging::print_timing_report();

    Ok(())
}

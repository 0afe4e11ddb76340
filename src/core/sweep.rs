use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::info;

use crate::core::engine::{SitingEngine, SitingError};
use crate::models::property::Property;
use crate::models::siting::SitingResult;
use crate::models::weights::WeightProfile;
use crate::utils::logging::{self, OperationCategory};

/// One profile's siting run. Failures are kept per profile so a single
/// bad weight vector cannot sink the rest of a comparison.
#[derive(Debug)]
pub struct ProfileOutcome {
    pub profile: WeightProfile,
    pub outcome: Result<SitingResult, SitingError>,
}

/// Runs the same portfolio through every profile and collects the results
/// in profile order. The engine is read-only, so the parallel branch needs
/// no synchronization beyond the progress bar's own.
pub fn run_profile_sweep(
    engine: &SitingEngine,
    properties: &[Property],
    profiles: &[WeightProfile],
    k: usize,
    parallel: bool,
) -> Vec<ProfileOutcome> {
    let _timing = logging::start_timing("run_profile_sweep", OperationCategory::Sweep);
    info!(
        profiles = profiles.len(),
        parallel, "starting profile sweep"
    );

    let bar = ProgressBar::new(profiles.len() as u64);
    let evaluate = |profile: &WeightProfile| {
        let outcome = engine.compute_siting(properties, &profile.weights, k);
        bar.inc(1);
        ProfileOutcome {
            profile: profile.clone(),
            outcome,
        }
    };

    let outcomes: Vec<ProfileOutcome> = if parallel {
        profiles.par_iter().map(evaluate).collect()
    } else {
        profiles.iter().map(evaluate).collect()
    };
    bar.finish_and_clear();
    outcomes
}

/// Picks the successful outcome with the highest mean composite score.
/// Ties go to the earlier profile; all-failed sweeps return `None`.
pub fn best_outcome(outcomes: &[ProfileOutcome]) -> Option<&ProfileOutcome> {
    let mut best: Option<(&ProfileOutcome, f64)> = None;
    for candidate in outcomes {
        if let Ok(result) = &candidate.outcome {
            let improves = match best {
                Some((_, best_mean)) => result.mean_score > best_mean,
                None => true,
            };
            if improves {
                best = Some((candidate, result.mean_score));
            }
        }
    }
    best.map(|(outcome, _)| outcome)
}

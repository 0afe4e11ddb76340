use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::Level;
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_timing::{Builder, Histogram};
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::Instant;

// Categories for the timing report
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Siting {
        subcategory: SitingPhase,
    },
    DataLoad {
        subcategory: DataLoadType,
    },
    Sweep,
    Export,
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum SitingPhase {
    Validation,
    Scoring,
    Centroid,
    Ranking,
    Other,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum DataLoadType {
    Csv,
    Json,
    Synthetic,
    Other,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Siting { subcategory } => {
                format!("Siting - {}", match subcategory {
                    SitingPhase::Validation => "Validation",
                    SitingPhase::Scoring => "Scoring",
                    SitingPhase::Centroid => "Centroid",
                    SitingPhase::Ranking => "Ranking",
                    SitingPhase::Other => "Other",
                })
            },
            OperationCategory::DataLoad { subcategory } => {
                format!("Data Load - {}", match subcategory {
                    DataLoadType::Csv => "CSV",
                    DataLoadType::Json => "JSON",
                    DataLoadType::Synthetic => "Synthetic",
                    DataLoadType::Other => "Other",
                })
            },
            OperationCategory::Sweep => "Profile Sweep".to_string(),
            OperationCategory::Export => "Export".to_string(),
            OperationCategory::Other => "Other Operations".to_string(),
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        record_timing(&self.function_name, self.start.elapsed().as_nanos() as u64, &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn record_timing(function_name: &str, duration_ns: u64, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    // Record function-specific timing
    {
        let mut timings = FUNCTION_TIMINGS.write();
        let histogram = timings
            .entry(function_name.to_string())
            .or_insert_with(|| Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).unwrap());

        let _ = histogram.record(duration_ns);
    }

    // Record category timing
    {
        let mut category_timings = CATEGORY_TIMINGS.write();
        let histogram = category_timings
            .entry(category.clone())
            .or_insert_with(|| Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).unwrap());

        let _ = histogram.record(duration_ns);
    }
}

pub fn init_logging(enable_timing: bool) {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let env_filter = EnvFilter::from_default_env()
        .add_directive(Level::INFO.into())
        .add_directive("cogsite=debug".parse().unwrap());

    if enable_timing {
        let histogram = || {
            Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).unwrap()
        };

        let timing_layer = Builder::default().layer(histogram);

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(timing_layer.boxed());

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set up tracing subscriber");
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty());

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set up tracing subscriber");
    }
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==========================");

    println!("\nTimings by Function:");
    println!("--------------------");
    let timings = FUNCTION_TIMINGS.read();
    let mut function_vec: Vec<_> = timings.iter().collect();
    function_vec.sort_by(|a, b| {
        let b_total = b.1.mean() * (b.1.len() as f64);
        let a_total = a.1.mean() * (a.1.len() as f64);
        b_total.partial_cmp(&a_total).unwrap_or(std::cmp::Ordering::Equal)
    });

    for (function_name, histogram) in function_vec {
        println!(
            "{}: mean={:.2}ms, p95={:.2}ms, p99={:.2}ms, count={}",
            function_name,
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.value_at_quantile(0.99) as f64 / 1_000_000.0,
            histogram.len(),
        );
    }

    println!("\nPerformance by Category:");
    println!("------------------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| {
        let b_mean = b.1.mean();
        let a_mean = a.1.mean();
        b_mean.partial_cmp(&a_mean).unwrap_or(std::cmp::Ordering::Equal)
    });

    let total_time: f64 = category_vec.iter()
        .map(|(_, hist)| hist.mean() * (hist.len() as f64))
        .sum();

    for (category, histogram) in category_vec {
        let category_total = histogram.mean() * (histogram.len() as f64);
        let percentage = (category_total / total_time) * 100.0;
        println!(
            "{}: {:.1}% of total time\n  mean={:.2}ms, p95={:.2}ms, p99={:.2}ms, count={}, total={:.2}s",
            category.as_str(),
            percentage,
            histogram.mean() / 1_000_000.0,
            histogram.value_at_quantile(0.95) as f64 / 1_000_000.0,
            histogram.value_at_quantile(0.99) as f64 / 1_000_000.0,
            histogram.len(),
            category_total / 1_000_000_000.0,
        );
    }

    println!("==========================\n");
}

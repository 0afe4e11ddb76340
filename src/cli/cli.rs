use clap::Parser;

use crate::config::constants::{
    DEFAULT_FOOTFALL_WEIGHT, DEFAULT_PRICE_CAP, DEFAULT_PRICE_WEIGHT, DEFAULT_PROPERTY_COUNT,
    DEFAULT_TOP_K, DEFAULT_TRANSIT_WEIGHT, DEFAULT_VACANCY_CAP, DEFAULT_VACANCY_WEIGHT,
    DEFAULT_YIELD_CAP, DEFAULT_YIELD_WEIGHT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short = 'i', long, help = "Portfolio file (.csv or .json); synthetic data when omitted")]
    input: Option<String>,

    #[arg(short = 'n', long, default_value_t = DEFAULT_PROPERTY_COUNT)]
    count: usize,

    #[arg(long, help = "Random seed for a reproducible synthetic portfolio")]
    seed: Option<u64>,

    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    #[arg(long, default_value_t = DEFAULT_YIELD_WEIGHT)]
    weight_yield: f64,

    #[arg(long, default_value_t = DEFAULT_PRICE_WEIGHT)]
    weight_price: f64,

    #[arg(long, default_value_t = DEFAULT_VACANCY_WEIGHT)]
    weight_vacancy: f64,

    #[arg(long, default_value_t = DEFAULT_TRANSIT_WEIGHT)]
    weight_transit: f64,

    #[arg(long, default_value_t = DEFAULT_FOOTFALL_WEIGHT)]
    weight_footfall: f64,

    #[arg(long, default_value_t = DEFAULT_YIELD_CAP)]
    yield_cap: f64,

    #[arg(long, default_value_t = DEFAULT_PRICE_CAP)]
    price_cap: f64,

    #[arg(long, default_value_t = DEFAULT_VACANCY_CAP)]
    vacancy_cap: f64,

    #[arg(long, help = "JSON file of named weight profiles to compare")]
    profiles: Option<String>,

    #[arg(long, help = "Compare the built-in weight profiles", default_value_t = false)]
    compare_presets: bool,

    #[arg(short, long, default_value_t = true)]
    parallel: bool,

    #[arg(long, default_value_t = false)]
    enable_csv_export: bool,

    #[arg(short = 'e', long, default_value = "exports")]
    export_dir: String,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn weight_yield(&self) -> f64 {
        self.weight_yield
    }

    pub fn weight_price(&self) -> f64 {
        self.weight_price
    }

    pub fn weight_vacancy(&self) -> f64 {
        self.weight_vacancy
    }

    pub fn weight_transit(&self) -> f64 {
        self.weight_transit
    }

    pub fn weight_footfall(&self) -> f64 {
        self.weight_footfall
    }

    pub fn yield_cap(&self) -> f64 {
        self.yield_cap
    }

    pub fn price_cap(&self) -> f64 {
        self.price_cap
    }

    pub fn vacancy_cap(&self) -> f64 {
        self.vacancy_cap
    }

    pub fn profiles(&self) -> Option<&str> {
        self.profiles.as_deref()
    }

    pub fn compare_presets(&self) -> bool {
        self.compare_presets
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn enable_csv_export(&self) -> bool {
        self.enable_csv_export
    }

    pub fn export_dir(&self) -> &str {
        &self.export_dir
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

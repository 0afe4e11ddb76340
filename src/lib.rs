// Main module declarations for the cogsite siting engine

// Core siting modules
pub mod core {
    pub mod engine;
    pub mod scoring;
    pub mod sweep;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod siting_config;
}

// Model definitions
pub mod models {
    pub mod property;
    pub mod siting;
    pub mod weights;
}

// Data loaders and generators
pub mod data {
    pub mod portfolio_loader;
    pub mod profiles_loader;
    pub mod synthetic;
}

// Analysis and reporting
pub mod analysis {
    pub mod market_stats;
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod csv_export;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used types
pub use crate::config::siting_config::SitingConfig;
pub use crate::core::engine::{SitingEngine, SitingError};
pub use crate::models::property::{GeoPoint, Property};
pub use crate::models::siting::{ScoredProperty, SitingResult};
pub use crate::models::weights::{Factor, FactorWeights, WeightProfile};

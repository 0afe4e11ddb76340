use std::fs::File;
use std::path::{Path, PathBuf};
use std::io::Write;
use std::error::Error;
use chrono::Local;

use crate::core::sweep::ProfileOutcome;
use crate::models::siting::SitingResult;
use crate::models::weights::FactorWeights;
use crate::utils::logging::{self, OperationCategory};

/// Main struct for handling CSV export
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
    verbose_logging: bool,
}

impl CsvExporter {
    /// Create a new CSV exporter writing into a timestamped subdirectory
    /// of the given output directory
    pub fn new(output_dir: impl AsRef<Path>, verbose_logging: bool) -> std::io::Result<Self> {
        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S").to_string();

        let full_path = Path::new(output_dir.as_ref()).join(&timestamp);
        std::fs::create_dir_all(&full_path)?;

        Ok(Self {
            output_dir: full_path,
            timestamp,
            verbose_logging,
        })
    }

    /// Export a siting run to CSV files
    pub fn export_siting_results(
        &self,
        result: &SitingResult,
        weights: &FactorWeights,
    ) -> Result<(), Box<dyn Error>> {
        let _timing = logging::start_timing("export_siting_results", OperationCategory::Export);

        self.export_summary(result, weights)?;
        self.export_ranked_properties(result)?;

        if self.verbose_logging {
            println!("CSV export completed successfully to: {}", self.output_dir.display());
        }

        Ok(())
    }

    /// Export summary data to CSV
    fn export_summary(
        &self,
        result: &SitingResult,
        weights: &FactorWeights,
    ) -> Result<(), Box<dyn Error>> {
        let summary_path = self.output_dir.join("siting_summary.csv");
        let mut summary_file = File::create(&summary_path)?;

        writeln!(summary_file, "Siting Summary")?;
        writeln!(summary_file, "Timestamp,{}", self.timestamp)?;
        writeln!(summary_file, "")?;

        writeln!(summary_file, "Centroid Latitude,{:.6}", result.centroid.latitude)?;
        writeln!(summary_file, "Centroid Longitude,{:.6}", result.centroid.longitude)?;
        writeln!(summary_file, "Mean Composite Score,{:.6}", result.mean_score)?;
        writeln!(summary_file, "Search Radius Hint (km),{:.2}", result.search_radius_hint)?;
        writeln!(summary_file, "Ranked Properties,{}", result.top_k.len())?;
        writeln!(summary_file, "")?;

        writeln!(summary_file, "Factor,Weight")?;
        for (factor, value) in weights.components() {
            writeln!(summary_file, "{},{}", factor, value)?;
        }

        Ok(())
    }

    /// Export the ranked property list to CSV
    fn export_ranked_properties(&self, result: &SitingResult) -> Result<(), Box<dyn Error>> {
        let ranked_path = self.output_dir.join("ranked_properties.csv");
        let mut ranked_file = File::create(&ranked_path)?;

        writeln!(
            ranked_file,
            "Rank,Id,Category,Latitude,Longitude,Composite Score,Distance (deg),Rental Yield (%),Price (per m2),Vacancy (%),Transit Proximity,Footfall"
        )?;

        for (rank, entry) in result.top_k.iter().enumerate() {
            writeln!(
                ranked_file,
                "{},{},{},{:.6},{:.6},{:.6},{:.6},{:.2},{:.2},{:.2},{:.2},{:.2}",
                rank + 1,
                entry.property.id,
                entry.property.category,
                entry.property.position.latitude,
                entry.property.position.longitude,
                entry.composite_score,
                entry.distance_to_centroid,
                entry.property.rental_yield,
                entry.property.price_per_area,
                entry.property.vacancy,
                entry.property.transit_proximity,
                entry.property.footfall
            )?;
        }

        if self.verbose_logging {
            println!(
                "Successfully exported {} ranked properties to: {}",
                result.top_k.len(),
                ranked_path.display()
            );
        }

        Ok(())
    }

    /// Export a profile comparison to CSV, one row per profile
    pub fn export_profile_comparison(
        &self,
        outcomes: &[ProfileOutcome],
    ) -> Result<(), Box<dyn Error>> {
        let _timing = logging::start_timing("export_profile_comparison", OperationCategory::Export);

        let comparison_path = self.output_dir.join("profile_comparison.csv");
        let mut comparison_file = File::create(&comparison_path)?;

        writeln!(
            comparison_file,
            "Profile,Status,Mean Composite Score,Centroid Latitude,Centroid Longitude,Top Property"
        )?;

        for outcome in outcomes {
            match &outcome.outcome {
                Ok(result) => {
                    let top_property = result
                        .top_k
                        .first()
                        .map(|entry| entry.property.id.as_str())
                        .unwrap_or("");
                    writeln!(
                        comparison_file,
                        "{},ok,{:.6},{:.6},{:.6},{}",
                        outcome.profile.name,
                        result.mean_score,
                        result.centroid.latitude,
                        result.centroid.longitude,
                        top_property
                    )?;
                }
                Err(err) => {
                    writeln!(comparison_file, "{},failed: {},,,,", outcome.profile.name, err)?;
                }
            }
        }

        if self.verbose_logging {
            println!(
                "Successfully exported {} profile outcomes to: {}",
                outcomes.len(),
                comparison_path.display()
            );
        }

        Ok(())
    }
}

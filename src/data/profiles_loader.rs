use std::fmt;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::debug;

use crate::models::weights::WeightProfile;
use crate::utils::logging::{self, DataLoadType, OperationCategory};

#[derive(Debug)]
pub enum ProfileLoadError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
}

impl From<std::io::Error> for ProfileLoadError {
    fn from(err: std::io::Error) -> Self {
        ProfileLoadError::IoError(err)
    }
}

impl From<serde_json::Error> for ProfileLoadError {
    fn from(err: serde_json::Error) -> Self {
        ProfileLoadError::JsonError(err)
    }
}

impl fmt::Display for ProfileLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileLoadError::IoError(err) => write!(f, "IO error: {}", err),
            ProfileLoadError::JsonError(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for ProfileLoadError {}

#[derive(Debug, Deserialize)]
struct ProfilesFile {
    profiles: Vec<WeightProfile>,
}

/// Loads named weight profiles from a JSON file shaped as
/// `{"profiles": [{"name": ..., "weights": {"rentalYield": ..., ...}}]}`.
pub fn load_profiles(path: &str) -> Result<Vec<WeightProfile>, ProfileLoadError> {
    let _timing = logging::start_timing(
        "load_profiles",
        OperationCategory::DataLoad {
            subcategory: DataLoadType::Json,
        },
    );
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let parsed: ProfilesFile = serde_json::from_reader(reader)?;
    debug!(path, count = parsed.profiles.len(), "weight profiles loaded");
    Ok(parsed.profiles)
}

pub fn parse_profiles(contents: &str) -> Result<Vec<WeightProfile>, ProfileLoadError> {
    let parsed: ProfilesFile = serde_json::from_str(contents)?;
    Ok(parsed.profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_profiles() {
        let contents = r#"{
            "profiles": [
                {
                    "name": "income",
                    "weights": {
                        "rentalYield": 40,
                        "pricePerArea": 15,
                        "vacancy": 30,
                        "transitProximity": 10,
                        "footfall": 5
                    }
                }
            ]
        }"#;
        let profiles = parse_profiles(contents).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "income");
        assert_eq!(profiles[0].weights.rental_yield, 40.0);
        assert_eq!(profiles[0].weights.footfall, 5.0);
    }

    #[test]
    fn malformed_profiles_file_is_a_json_error() {
        let err = parse_profiles("{\"profiles\": {}}").unwrap_err();
        assert!(matches!(err, ProfileLoadError::JsonError(_)));
    }
}

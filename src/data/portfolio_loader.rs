use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::models::property::{GeoPoint, Property};
use crate::utils::logging::{self, DataLoadType, OperationCategory};

#[derive(Debug)]
pub enum PortfolioLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    MissingField(String),
    InvalidNumber(String),
}

impl From<std::io::Error> for PortfolioLoadError {
    fn from(err: std::io::Error) -> Self {
        PortfolioLoadError::IoError(err)
    }
}

impl From<csv::Error> for PortfolioLoadError {
    fn from(err: csv::Error) -> Self {
        PortfolioLoadError::CsvError(err)
    }
}

impl From<serde_json::Error> for PortfolioLoadError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioLoadError::JsonError(err)
    }
}

impl fmt::Display for PortfolioLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortfolioLoadError::IoError(err) => write!(f, "IO error: {}", err),
            PortfolioLoadError::CsvError(err) => write!(f, "CSV error: {}", err),
            PortfolioLoadError::JsonError(err) => write!(f, "JSON error: {}", err),
            PortfolioLoadError::MissingField(field) => write!(f, "Missing field: {}", field),
            PortfolioLoadError::InvalidNumber(detail) => write!(f, "Invalid number: {}", detail),
        }
    }
}

impl std::error::Error for PortfolioLoadError {}

/// On-disk property record. Field names match the public result contract,
/// so a portfolio exported elsewhere in the toolchain loads unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRecord {
    id: String,
    latitude: f64,
    longitude: f64,
    rental_yield: f64,
    price_per_area: f64,
    vacancy: f64,
    transit_proximity: f64,
    footfall: f64,
    category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortfolioFile {
    properties: Vec<PropertyRecord>,
}

/// Loads a portfolio, dispatching on the file extension: `.json` takes the
/// JSON path, everything else is treated as CSV.
pub fn load_portfolio(path: &str) -> Result<Vec<Property>, PortfolioLoadError> {
    if Path::new(path).extension().map_or(false, |ext| ext == "json") {
        load_portfolio_json(path)
    } else {
        load_portfolio_csv(path)
    }
}

pub fn load_portfolio_csv(path: &str) -> Result<Vec<Property>, PortfolioLoadError> {
    let _timing = logging::start_timing(
        "load_portfolio_csv",
        OperationCategory::DataLoad {
            subcategory: DataLoadType::Csv,
        },
    );
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    let properties = parse_portfolio_csv(&contents)?;
    debug!(path, count = properties.len(), "portfolio loaded from CSV");
    Ok(properties)
}

/// Expected columns, in order:
/// id, latitude, longitude, rentalYield, pricePerArea, vacancy,
/// transitProximity, footfall, category.
pub fn parse_portfolio_csv(contents: &str) -> Result<Vec<Property>, PortfolioLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let mut properties = Vec::new();
    for result in reader.records() {
        let record = result?;
        let id = field(&record, 0, "id")?.to_string();
        let latitude = parse_number(&record, 1, "latitude")?;
        let longitude = parse_number(&record, 2, "longitude")?;
        let rental_yield = parse_number(&record, 3, "rentalYield")?;
        let price_per_area = parse_number(&record, 4, "pricePerArea")?;
        let vacancy = parse_number(&record, 5, "vacancy")?;
        let transit_proximity = parse_number(&record, 6, "transitProximity")?;
        let footfall = parse_number(&record, 7, "footfall")?;
        let category = field(&record, 8, "category")?.to_string();

        properties.push(Property::new(
            id,
            GeoPoint::new(latitude, longitude),
            rental_yield,
            price_per_area,
            vacancy,
            transit_proximity,
            footfall,
            category,
        ));
    }
    Ok(properties)
}

pub fn load_portfolio_json(path: &str) -> Result<Vec<Property>, PortfolioLoadError> {
    let _timing = logging::start_timing(
        "load_portfolio_json",
        OperationCategory::DataLoad {
            subcategory: DataLoadType::Json,
        },
    );
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let portfolio: PortfolioFile = serde_json::from_reader(reader)?;
    let properties = build_properties(portfolio);
    debug!(path, count = properties.len(), "portfolio loaded from JSON");
    Ok(properties)
}

pub fn parse_portfolio_json(contents: &str) -> Result<Vec<Property>, PortfolioLoadError> {
    let portfolio: PortfolioFile = serde_json::from_str(contents)?;
    Ok(build_properties(portfolio))
}

fn build_properties(portfolio: PortfolioFile) -> Vec<Property> {
    portfolio
        .properties
        .into_iter()
        .map(|record| {
            Property::new(
                record.id,
                GeoPoint::new(record.latitude, record.longitude),
                record.rental_yield,
                record.price_per_area,
                record.vacancy,
                record.transit_proximity,
                record.footfall,
                record.category,
            )
        })
        .collect()
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'a str, PortfolioLoadError> {
    record
        .get(index)
        .ok_or_else(|| PortfolioLoadError::MissingField(name.to_string()))
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<f64, PortfolioLoadError> {
    let raw = field(record, index, name)?;
    raw.trim()
        .parse()
        .map_err(|_| PortfolioLoadError::InvalidNumber(format!("{} = {:?}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV_HEADER: &str =
        "id,latitude,longitude,rentalYield,pricePerArea,vacancy,transitProximity,footfall,category";

    #[test]
    fn parses_a_well_formed_csv() {
        let contents = format!(
            "{}\nprop-1,-26.2,28.0,6.5,21000,4.2,72,55,retail\nprop-2,-26.1,28.1,5.8,18500,6.0,40,30,office\n",
            CSV_HEADER
        );
        let properties = parse_portfolio_csv(&contents).unwrap();

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].id, "prop-1");
        assert_eq!(properties[0].position.latitude, -26.2);
        assert_eq!(properties[0].rental_yield, 6.5);
        assert_eq!(properties[1].category, "office");
        assert!(properties.iter().all(|p| p.is_valid()));
    }

    #[test]
    fn short_row_reports_the_missing_column() {
        let contents = format!("{}\nprop-1,-26.2,28.0,6.5,21000,4.2,72,55\n", CSV_HEADER);
        let err = parse_portfolio_csv(&contents).unwrap_err();
        // The csv crate flags uneven row lengths before our column check.
        assert!(
            matches!(err, PortfolioLoadError::CsvError(_) | PortfolioLoadError::MissingField(_)),
            "{}",
            err
        );
    }

    #[test]
    fn unparseable_number_names_the_field() {
        let contents = format!(
            "{}\nprop-1,-26.2,28.0,plenty,21000,4.2,72,55,retail\n",
            CSV_HEADER
        );
        let err = parse_portfolio_csv(&contents).unwrap_err();
        match err {
            PortfolioLoadError::InvalidNumber(detail) => {
                assert!(detail.contains("rentalYield"), "{}", detail)
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn textual_nan_loads_but_fails_validity() {
        // "NaN" parses as f64::NAN, so the row loads; the validity filter
        // downstream is what rejects it.
        let contents = format!("{}\nprop-1,-26.2,28.0,NaN,21000,4.2,72,55,retail\n", CSV_HEADER);
        let properties = parse_portfolio_csv(&contents).unwrap();
        assert_eq!(properties.len(), 1);
        assert!(!properties[0].is_valid());
    }

    #[test]
    fn parses_a_well_formed_json_portfolio() {
        let contents = r#"{
            "properties": [
                {
                    "id": "prop-1",
                    "latitude": -26.2,
                    "longitude": 28.0,
                    "rentalYield": 6.5,
                    "pricePerArea": 21000,
                    "vacancy": 4.2,
                    "transitProximity": 72,
                    "footfall": 55,
                    "category": "retail"
                }
            ]
        }"#;
        let properties = parse_portfolio_json(contents).unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, "prop-1");
        assert_eq!(properties[0].transit_proximity, 72.0);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = parse_portfolio_json("{\"properties\": [").unwrap_err();
        assert!(matches!(err, PortfolioLoadError::JsonError(_)));
    }
}

use crate::error::{LaunchError, Result};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Embedded launch dataset, compiled into every binary that needs it.
pub static LAUNCH_CSV: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

/// One row of the launch dataset.
///
/// Columns are matched by header name, so the leading unnamed index column
/// and any extra columns are ignored. `Flight Number` and `Booster Version`
/// are optional; the other four columns are required.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Parse a CSV string into launch records.
    ///
    /// Any unparseable row fails the whole load; there is no partial result.
    pub fn parse_launch_csv(csv_object: &str) -> Result<Vec<LaunchRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let records = rdr
            .deserialize()
            .collect::<std::result::Result<Vec<LaunchRecord>, csv::Error>>()?;
        if records.is_empty() {
            return Err(LaunchError::EmptyDataset);
        }
        log::debug!("[SLR] parsed {} launch records", records.len());
        Ok(records)
    }
}

/// Read the dataset file at `path` into a string.
pub fn read_launch_csv(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| LaunchError::Read {
        path: path.display().to_string(),
        source,
    })
}

//! Loading the launch dataset from CSV.
//!
//! The loader recognises the dataset's original column headers and ignores
//! any others (including the unnamed leading index column). A missing file or
//! a row that cannot be parsed is a startup failure.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::models::{LaunchRecord, LaunchTable, OutcomeClass};

/// Default data file, resolved against the working directory.
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: u8,
}

/// Load the launch table from a CSV file on disk.
pub fn load_table(path: impl AsRef<Path>) -> Result<LaunchTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_table(file)?;
    tracing::info!(
        "Loaded {} launch records from {} (payload {}..={} kg, {} sites)",
        table.len(),
        path.display(),
        table.min_payload_mass_kg(),
        table.max_payload_mass_kg(),
        table.sites().len()
    );
    Ok(table)
}

/// Parse a launch table from any CSV source with a header row.
pub fn read_table<R: Read>(source: R) -> Result<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let raw = result?;
        let line = raw.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvRow = raw.deserialize(Some(&headers))?;
        records.push(into_record(row, line)?);
    }

    Ok(LaunchTable::new(records))
}

fn into_record(row: CsvRow, line: u64) -> Result<LaunchRecord> {
    if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
        return Err(DashboardError::InvalidRecord {
            line,
            reason: format!("payload mass must be non-negative, got {}", row.payload_mass_kg),
        });
    }

    let outcome_class = OutcomeClass::try_from(row.class)
        .map_err(|reason| DashboardError::InvalidRecord { line, reason })?;

    Ok(LaunchRecord {
        flight_number: row.flight_number,
        launch_site: row.launch_site,
        payload_mass_kg: row.payload_mass_kg,
        booster_version: row.booster_version.filter(|v| !v.is_empty()),
        booster_version_category: row.booster_version_category,
        outcome_class,
    })
}

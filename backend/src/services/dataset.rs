//! Anomaly dataset loading from JSON or CSV files

use serde::Deserialize;
use shared::{Anomaly, AnomalyDataset, AnomalyRecord, ProjectionError, ProjectionResult, Scenario};
use std::path::Path;

/// One flat row of a CSV anomaly dataset
#[derive(Debug, Deserialize)]
struct CsvRecord {
    grid_lat: f64,
    grid_lon: f64,
    month: u32,
    scenario: Scenario,
    delta_t_mean_c: f64,
    delta_t_max_c: f64,
    delta_wet_prob: f64,
    delta_intensity_frac: f64,
    delta_dry_spell_days: Option<i32>,
    delta_hot_days_90f: Option<i32>,
}

impl From<CsvRecord> for AnomalyRecord {
    fn from(row: CsvRecord) -> Self {
        AnomalyRecord {
            grid_lat: row.grid_lat,
            grid_lon: row.grid_lon,
            month: row.month,
            scenario: row.scenario,
            anomaly: Anomaly {
                delta_t_mean_c: row.delta_t_mean_c,
                delta_t_max_c: row.delta_t_max_c,
                delta_wet_prob: row.delta_wet_prob,
                delta_intensity_frac: row.delta_intensity_frac,
                delta_dry_spell_days: row.delta_dry_spell_days,
                delta_hot_days_90f: row.delta_hot_days_90f,
            },
        }
    }
}

/// Parse CSV text with a header row
pub fn parse_csv(data: &str) -> ProjectionResult<AnomalyDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let records = reader
        .deserialize::<CsvRecord>()
        .map(|row| row.map(AnomalyRecord::from))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ProjectionError::Dataset(e.to_string()))?;

    Ok(AnomalyDataset::from_records(records))
}

/// Read a dataset, picking the format from the file extension
pub fn read_dataset(path: &Path) -> ProjectionResult<AnomalyDataset> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| ProjectionError::Dataset(format!("{}: {}", path.display(), e)))?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        parse_csv(&data)
    } else {
        AnomalyDataset::from_json_str(&data)
    }
}

/// Load the configured dataset, if any.
///
/// A missing or unreadable dataset is not fatal: the provider falls back to
/// the parametric model.
pub fn load_dataset(path: Option<&str>) -> Option<AnomalyDataset> {
    let path = Path::new(path?);

    match read_dataset(path) {
        Ok(dataset) => {
            tracing::info!(
                records = dataset.len(),
                "Loaded anomaly dataset from {}",
                path.display()
            );
            Some(dataset)
        }
        Err(e) => {
            tracing::warn!("Anomaly dataset unavailable, using parametric model: {}", e);
            None
        }
    }
}

//! Bundled anomaly dataset

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::models::AnomalyRecord;
use crate::validation::validate_month;

/// A collection of anomaly records keyed by (grid cell, month, scenario).
///
/// Records that cannot be used (bad month, non-finite values) are dropped
/// with a warning at construction instead of failing the whole dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalyDataset {
    records: Vec<AnomalyRecord>,
}

impl AnomalyDataset {
    pub fn from_records(records: Vec<AnomalyRecord>) -> Self {
        let total = records.len();
        let records: Vec<AnomalyRecord> = records.into_iter().filter(is_usable).collect();

        if records.len() < total {
            tracing::warn!(
                skipped = total - records.len(),
                kept = records.len(),
                "Skipped malformed anomaly records"
            );
        }

        Self { records }
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> ProjectionResult<Self> {
        let records: Vec<AnomalyRecord> =
            serde_json::from_str(json).map_err(|e| ProjectionError::Dataset(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[AnomalyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_usable(record: &AnomalyRecord) -> bool {
    validate_month(record.month).is_ok()
        && record.grid_lat.is_finite()
        && record.grid_lon.is_finite()
        && record.anomaly.is_finite()
}

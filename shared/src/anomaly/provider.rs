//! Anomaly lookup with dataset preference and parametric fallback

use std::collections::HashMap;
use std::sync::Arc;

use super::cache::{AnomalyCache, InMemoryAnomalyCache};
use super::dataset::AnomalyDataset;
use super::fallback::parametric_anomaly;
use crate::config::ProjectionConfig;
use crate::error::{ProjectionError, ProjectionResult};
use crate::models::{Anomaly, AnomalyKey, Scenario};
use crate::types::GridCell;
use crate::validation::{validate_coordinates, validate_month};

/// Resolves (latitude, longitude, month, scenario) to an [`Anomaly`].
///
/// The grid resolution is fixed for the lifetime of a provider. Every
/// resolved anomaly is memoized, so repeated lookups for the same cell,
/// month and scenario return bit-identical values.
pub struct AnomalyProvider {
    config: ProjectionConfig,
    records: HashMap<AnomalyKey, Anomaly>,
    cache: Arc<dyn AnomalyCache>,
}

impl AnomalyProvider {
    /// Provider running on the parametric model only
    pub fn new(config: ProjectionConfig) -> ProjectionResult<Self> {
        Self::with_cache(config, None, Arc::new(InMemoryAnomalyCache::new()))
    }

    pub fn with_dataset(
        config: ProjectionConfig,
        dataset: AnomalyDataset,
    ) -> ProjectionResult<Self> {
        Self::with_cache(config, Some(dataset), Arc::new(InMemoryAnomalyCache::new()))
    }

    /// Provider with an injected backing store for the memo cache
    pub fn with_cache(
        config: ProjectionConfig,
        dataset: Option<AnomalyDataset>,
        cache: Arc<dyn AnomalyCache>,
    ) -> ProjectionResult<Self> {
        config.validate()?;

        let mut records = HashMap::new();
        if let Some(dataset) = dataset {
            for record in dataset.records() {
                let cell = GridCell::from_coordinates(
                    record.grid_lat,
                    record.grid_lon,
                    config.grid_resolution_deg,
                );
                let key = AnomalyKey::new(&cell, record.month, record.scenario);
                if records.insert(key, record.anomaly).is_some() {
                    tracing::debug!(?key, "Duplicate anomaly record, keeping the later one");
                }
            }
        }

        Ok(Self {
            config,
            records,
            cache,
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn grid_cell(&self, latitude: f64, longitude: f64) -> GridCell {
        GridCell::from_coordinates(latitude, longitude, self.config.grid_resolution_deg)
    }

    pub fn has_dataset(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn dataset_len(&self) -> usize {
        self.records.len()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Look up the anomaly for a location, month (1-12) and scenario.
    ///
    /// Fails fast on an invalid month or coordinates, before the cache is
    /// touched. A missing dataset record is never an error.
    pub fn get_anomaly(
        &self,
        latitude: f64,
        longitude: f64,
        month: u32,
        scenario: Scenario,
    ) -> ProjectionResult<Anomaly> {
        validate_month(month).map_err(|_| ProjectionError::InvalidMonth(month))?;
        validate_coordinates(latitude, longitude)
            .map_err(|_| ProjectionError::InvalidCoordinates { latitude, longitude })?;

        let cell = self.grid_cell(latitude, longitude);
        let key = AnomalyKey::new(&cell, month, scenario);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(?key, "Anomaly cache hit");
            return Ok(cached);
        }

        let anomaly = match self.records.get(&key) {
            Some(record) => *record,
            None => {
                tracing::debug!(?key, "No dataset record, using parametric model");
                parametric_anomaly(&self.config, cell.latitude(), month, scenario)
            }
        };

        Ok(self.cache.get_or_insert(key, anomaly))
    }
}

impl std::fmt::Debug for AnomalyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnomalyProvider")
            .field("config", &self.config)
            .field("dataset_records", &self.records.len())
            .field("cached", &self.cache.len())
            .finish()
    }
}

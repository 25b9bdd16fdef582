//! Climate anomaly models

use serde::{Deserialize, Serialize};

use super::scenario::Scenario;
use crate::types::GridCell;

/// Projected 2045 deltas for one (grid cell, month, scenario)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Anomaly {
    /// Mean temperature change (°C)
    pub delta_t_mean_c: f64,
    /// Maximum temperature change (°C)
    pub delta_t_max_c: f64,
    /// Change in wet-day probability (fraction)
    pub delta_wet_prob: f64,
    /// Change in precipitation intensity (fraction)
    pub delta_intensity_frac: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_dry_spell_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta_hot_days_90f: Option<i32>,
}

impl Anomaly {
    pub fn is_finite(&self) -> bool {
        self.delta_t_mean_c.is_finite()
            && self.delta_t_max_c.is_finite()
            && self.delta_wet_prob.is_finite()
            && self.delta_intensity_frac.is_finite()
    }
}

/// Lookup key for anomaly records and the provider cache
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AnomalyKey {
    pub lat_index: i64,
    pub lon_index: i64,
    pub month: u32,
    pub scenario: Scenario,
}

impl AnomalyKey {
    pub fn new(cell: &GridCell, month: u32, scenario: Scenario) -> Self {
        Self {
            lat_index: cell.lat_index,
            lon_index: cell.lon_index,
            month,
            scenario,
        }
    }
}

/// A dataset entry: an anomaly for a grid cell, month and scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnomalyRecord {
    pub grid_lat: f64,
    pub grid_lon: f64,
    pub month: u32,
    pub scenario: Scenario,
    pub anomaly: Anomaly,
}

//! Tunable constants for the projection core
//!
//! Every calibration constant lives in [`ProjectionConfig`] and is handed to
//! the provider and the engine at construction, so tests and recalibration
//! never need a rebuild. The backend deserializes this struct from its
//! `projection` config section.

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, ProjectionResult};
use crate::models::Scenario;

/// Projection calibration constants
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Grid resolution used to snap coordinates for anomaly lookup (degrees)
    pub grid_resolution_deg: f64,

    /// Typical wet-day accumulation used when a dry day turns wet (mm)
    pub median_wet_day_mm: f64,

    /// Precipitation damping per °C of solar radiation management cooling
    pub intervention_damping_alpha: f64,

    /// Global mean warming by 2045 under business-as-usual (°C)
    pub bau_base_warming_c: f64,

    /// Global mean warming by 2045 under mitigation (°C)
    pub mitigation_base_warming_c: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            grid_resolution_deg: 1.0,
            median_wet_day_mm: 5.0,
            intervention_damping_alpha: 0.05,
            bau_base_warming_c: 2.5,
            mitigation_base_warming_c: 1.8,
        }
    }
}

impl ProjectionConfig {
    /// Baseline warming for a scenario
    pub fn base_warming(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::BusinessAsUsual => self.bau_base_warming_c,
            Scenario::Mitigation => self.mitigation_base_warming_c,
        }
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        if !self.grid_resolution_deg.is_finite() || self.grid_resolution_deg <= 0.0 {
            return Err(ProjectionError::InvalidConfig(
                "grid resolution must be a positive number of degrees",
            ));
        }
        if !self.median_wet_day_mm.is_finite() || self.median_wet_day_mm < 0.0 {
            return Err(ProjectionError::InvalidConfig(
                "median wet-day precipitation cannot be negative",
            ));
        }
        if !self.intervention_damping_alpha.is_finite() || self.intervention_damping_alpha < 0.0 {
            return Err(ProjectionError::InvalidConfig(
                "intervention damping cannot be negative",
            ));
        }
        if !self.bau_base_warming_c.is_finite() || !self.mitigation_base_warming_c.is_finite() {
            return Err(ProjectionError::InvalidConfig(
                "base warming constants must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProjectionConfig::default();
        assert_eq!(config.grid_resolution_deg, 1.0);
        assert_eq!(config.median_wet_day_mm, 5.0);
        assert_eq!(config.intervention_damping_alpha, 0.05);
        assert_eq!(config.base_warming(Scenario::BusinessAsUsual), 2.5);
        assert_eq!(config.base_warming(Scenario::Mitigation), 1.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let config = ProjectionConfig {
            grid_resolution_deg: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ProjectionConfig =
            serde_json::from_str(r#"{"grid_resolution_deg": 0.5}"#).unwrap();
        assert_eq!(config.grid_resolution_deg, 0.5);
        assert_eq!(config.bau_base_warming_c, 2.5);
    }
}

//! Weather data models

use serde::{Deserialize, Serialize};

use super::scenario::{InterventionBasket, Scenario};
use crate::synthesis::dew_point_magnus;

/// A present-day observation from the weather source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObservedWeather {
    pub temperature_c: f64,
    /// Relative humidity as a fraction (0-1)
    pub relative_humidity: f64,
    /// Computed with the Magnus formula when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dew_point_c: Option<f64>,
    pub wind_speed_mps: f64,
    /// Cloud cover as a fraction (0-1)
    pub cloud_cover_fraction: f64,
    /// Probability of precipitation (0-1)
    pub precipitation_probability: f64,
    pub precipitation_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_hpa: Option<f64>,
    /// Daily maximum, when the source reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temperature_c: Option<f64>,
}

impl ObservedWeather {
    /// Build an observation, clamping the fractional fields to [0, 1]
    pub fn new(
        temperature_c: f64,
        relative_humidity: f64,
        wind_speed_mps: f64,
        cloud_cover_fraction: f64,
        precipitation_probability: f64,
        precipitation_mm: f64,
    ) -> Self {
        Self {
            temperature_c,
            relative_humidity: relative_humidity.clamp(0.0, 1.0),
            dew_point_c: None,
            wind_speed_mps,
            cloud_cover_fraction: cloud_cover_fraction.clamp(0.0, 1.0),
            precipitation_probability: precipitation_probability.clamp(0.0, 1.0),
            precipitation_mm,
            pressure_hpa: None,
            max_temperature_c: None,
        }
    }

    pub fn with_dew_point(mut self, dew_point_c: f64) -> Self {
        self.dew_point_c = Some(dew_point_c);
        self
    }

    pub fn with_pressure(mut self, pressure_hpa: f64) -> Self {
        self.pressure_hpa = Some(pressure_hpa);
        self
    }

    pub fn with_max_temperature(mut self, max_temperature_c: f64) -> Self {
        self.max_temperature_c = Some(max_temperature_c);
        self
    }

    /// Reported dew point, or the Magnus estimate from temperature and humidity
    pub fn dew_point(&self) -> f64 {
        self.dew_point_c
            .unwrap_or_else(|| dew_point_magnus(self.temperature_c, self.relative_humidity))
    }
}

/// The 2045 analog of an observation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthesizedWeather {
    pub temperature_c: f64,
    pub max_temperature_c: f64,
    pub min_temperature_c: f64,
    pub relative_humidity: f64,
    pub dew_point_c: f64,
    pub wind_speed_mps: f64,
    pub cloud_cover_fraction: f64,
    pub precipitation_probability: f64,
    pub precipitation_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_hpa: Option<f64>,
    /// Realized mean temperature change after interventions (°C)
    pub temperature_delta_c: f64,
    pub scenario: Scenario,
    pub interventions: InterventionBasket,
}

//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap API and maps its response onto the
//! observation the projection pipeline consumes

use reqwest::Client;
use serde::Deserialize;
use shared::{precipitation_probability_heuristic, ObservedWeather};

use crate::error::{AppError, AppResult};

/// Source of present-day observations
#[axum::async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current observation at a location
    async fn current_observation(&self, latitude: f64, longitude: f64)
        -> AppResult<ObservedWeather>;
}

/// OpenWeatherMap client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: OWMMain,
    #[serde(default)]
    wind: Option<OWMWind>,
    #[serde(default)]
    clouds: Option<OWMClouds>,
    #[serde(default)]
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    pressure: Option<f64>,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMClouds {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

impl OpenWeatherClient {
    /// Create a new client against the given API base URL
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[axum::async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_observation(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> AppResult<ObservedWeather> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherService(format!("{} - {}", status, body)));
        }

        let data: OWMCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherService(format!("Failed to parse response: {}", e)))?;

        Ok(convert_current_response(data))
    }
}

/// Convert an OpenWeatherMap response to an observation
fn convert_current_response(data: OWMCurrentResponse) -> ObservedWeather {
    let precipitation_mm = data
        .rain
        .and_then(|r| r.one_hour)
        .unwrap_or(0.0)
        .max(0.0);

    let mut observed = ObservedWeather::new(
        data.main.temp,
        data.main.humidity / 100.0,
        data.wind.map(|w| w.speed).unwrap_or(0.0),
        data.clouds.map(|c| c.all / 100.0).unwrap_or(0.0),
        precipitation_probability_heuristic(precipitation_mm),
        precipitation_mm,
    );

    if let Some(pressure) = data.main.pressure {
        observed = observed.with_pressure(pressure);
    }
    if let Some(temp_max) = data.main.temp_max {
        observed = observed.with_max_temperature(temp_max);
    }

    observed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rainy_response() {
        let json = r#"{
            "main": {"temp": 18.5, "temp_max": 20.1, "pressure": 1008, "humidity": 82},
            "wind": {"speed": 4.2},
            "clouds": {"all": 90},
            "rain": {"1h": 1.6}
        }"#;
        let data: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        let observed = convert_current_response(data);

        assert_eq!(observed.temperature_c, 18.5);
        assert!((observed.relative_humidity - 0.82).abs() < 1e-9);
        assert!((observed.cloud_cover_fraction - 0.9).abs() < 1e-9);
        assert_eq!(observed.precipitation_mm, 1.6);
        assert_eq!(observed.precipitation_probability, 0.8);
        assert_eq!(observed.pressure_hpa, Some(1008.0));
        assert_eq!(observed.max_temperature_c, Some(20.1));
    }

    #[test]
    fn test_convert_dry_response_defaults() {
        let json = r#"{"main": {"temp": 25.0, "humidity": 40}}"#;
        let data: OWMCurrentResponse = serde_json::from_str(json).unwrap();
        let observed = convert_current_response(data);

        assert_eq!(observed.precipitation_mm, 0.0);
        assert_eq!(observed.precipitation_probability, 0.2);
        assert_eq!(observed.wind_speed_mps, 0.0);
        assert_eq!(observed.pressure_hpa, None);
    }
}

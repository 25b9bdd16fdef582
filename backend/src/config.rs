//! Configuration management for the Climate 2045 server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with C45_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::ProjectionConfig;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Anomaly dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Projection calibration constants
    #[serde(default)]
    pub projection: ProjectionConfig,

    /// Impact card presentation
    pub impacts: ImpactsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; current-conditions lookups are disabled without it
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatasetConfig {
    /// Path to a JSON or CSV anomaly dataset
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImpactsConfig {
    /// Maximum number of impact cards per projection (2-4)
    pub max_cards: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("C45_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", "https://api.openweathermap.org/data/2.5")?
            .set_default("impacts.max_cards", 4)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (C45_ prefix)
            .add_source(
                Environment::with_prefix("C45")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

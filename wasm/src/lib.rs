//! WebAssembly module for Climate 2045
//!
//! Provides client-side computation for:
//! - Offline projections on the parametric anomaly model
//! - Heat index and dew point
//! - Cloudburst intensity estimates

use wasm_bindgen::prelude::*;

use shared::impacts;
use shared::synthesis::dew_point_magnus;
use shared::{
    project, AnomalyDataset, AnomalyProvider, ProjectionConfig, ProjectionRequest,
    SynthesisEngine,
};

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Projection engine kept alive on the JavaScript side so anomaly lookups
/// stay memoized between calls
#[wasm_bindgen]
pub struct Projector {
    provider: AnomalyProvider,
    engine: SynthesisEngine,
}

#[wasm_bindgen]
impl Projector {
    /// Projector running on the parametric model with default calibration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Projector, JsValue> {
        let config = ProjectionConfig::default();
        Ok(Projector {
            provider: AnomalyProvider::new(config).map_err(to_js_error)?,
            engine: SynthesisEngine::new(config),
        })
    }

    /// Projector backed by a JSON anomaly dataset
    #[wasm_bindgen(js_name = withDataset)]
    pub fn with_dataset(dataset_json: &str) -> Result<Projector, JsValue> {
        let config = ProjectionConfig::default();
        let dataset = AnomalyDataset::from_json_str(dataset_json).map_err(to_js_error)?;
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("Loaded {} anomaly records", dataset.len()).into());
        Ok(Projector {
            provider: AnomalyProvider::with_dataset(config, dataset).map_err(to_js_error)?,
            engine: SynthesisEngine::new(config),
        })
    }

    /// Project a JSON request, returning the projection as JSON
    pub fn project(&self, request_json: &str) -> Result<String, JsValue> {
        let request: ProjectionRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

        let projection = project(&self.provider, &self.engine, &request).map_err(to_js_error)?;
        serde_json::to_string(&projection).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = cachedAnomalies)]
    pub fn cached_anomalies(&self) -> usize {
        self.provider.cache_len()
    }
}

/// Calendar month (1-12) from the browser clock, for requests that leave
/// the month to the client
#[wasm_bindgen(js_name = currentMonth)]
pub fn current_month() -> u32 {
    js_sys::Date::new_0().get_month() + 1
}

/// One-shot projection of a JSON request
#[wasm_bindgen]
pub fn project_json(request_json: &str) -> Result<String, JsValue> {
    Projector::new()?.project(request_json)
}

/// Heat index in °C (relative humidity as a fraction)
#[wasm_bindgen]
pub fn calculate_heat_index(temp_c: f64, relative_humidity: f64) -> f64 {
    impacts::calculate_heat_index(temp_c, relative_humidity)
}

/// Cloudburst intensity multiplier for a warming delta
#[wasm_bindgen]
pub fn calculate_burst_index(intensity_fraction: f64, global_temp_delta_c: f64) -> f64 {
    impacts::calculate_burst_index(intensity_fraction, global_temp_delta_c)
}

/// Percentage increase in extreme precipitation
#[wasm_bindgen]
pub fn extreme_precipitation_increase(current_mm: f64, future_mm: f64) -> f64 {
    impacts::extreme_precipitation_increase(current_mm, future_mm)
}

/// Dew point in °C (relative humidity as a fraction)
#[wasm_bindgen]
pub fn dew_point(temp_c: f64, relative_humidity: f64) -> f64 {
    dew_point_magnus(temp_c, relative_humidity)
}

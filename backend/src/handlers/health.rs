//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub dataset: String,
    pub dataset_records: usize,
    pub cached_anomalies: usize,
    pub max_impact_cards: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.projection.provider();

    let dataset_status = if provider.has_dataset() {
        "loaded".to_string()
    } else {
        "parametric".to_string()
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        dataset: dataset_status,
        dataset_records: provider.dataset_len(),
        cached_anomalies: provider.cache_len(),
        max_impact_cards: state.projection.max_cards(),
    })
}

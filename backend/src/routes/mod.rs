//! Route definitions for the Climate 2045 API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/projections", projection_routes())
        .route("/anomalies", get(handlers::get_anomaly))
        .route("/interventions", get(handlers::list_interventions))
}

/// Projection routes
fn projection_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_projection))
        .route("/current", get(handlers::get_current_projection))
}

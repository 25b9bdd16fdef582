//! HTTP handlers for projection and anomaly endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    Anomaly, GpsCoordinates, GridCell, InterventionBasket, InterventionLevel, ObservedWeather,
    Projection, ProjectionRequest, Scenario,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Request body for projecting a caller-supplied observation
#[derive(Debug, Deserialize)]
pub struct CreateProjectionInput {
    pub location: GpsCoordinates,
    /// Defaults to the current month
    pub month: Option<u32>,
    #[serde(default)]
    pub scenario: Scenario,
    /// Preset level; ignored when an explicit basket is given
    pub intervention: Option<InterventionLevel>,
    pub interventions: Option<InterventionBasket>,
    pub observed: ObservedWeather,
    pub max_cards: Option<usize>,
}

impl CreateProjectionInput {
    fn into_request(self, current_month: u32, default_max_cards: usize) -> ProjectionRequest {
        let interventions = self
            .interventions
            .or_else(|| self.intervention.map(|level| level.basket()))
            .unwrap_or_default();

        ProjectionRequest {
            location: self.location,
            month: self.month.unwrap_or(current_month),
            scenario: self.scenario,
            interventions,
            observed: self.observed,
            max_cards: self.max_cards.unwrap_or(default_max_cards),
        }
    }
}

/// Project a caller-supplied observation
pub async fn create_projection(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectionInput>,
) -> AppResult<Json<Projection>> {
    let request = input.into_request(Utc::now().month(), state.projection.max_cards());
    let projection = state.projection.project(request)?;
    Ok(Json(projection))
}

/// Query parameters for projecting current conditions
#[derive(Debug, Deserialize, Validate)]
pub struct CurrentProjectionQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Defaults to the current month
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
    #[serde(default)]
    pub scenario: Scenario,
    #[serde(default)]
    pub intervention: InterventionLevel,
}

/// Fetch current weather at a location and project it to 2045
pub async fn get_current_projection(
    State(state): State<AppState>,
    Query(query): Query<CurrentProjectionQuery>,
) -> AppResult<Json<Projection>> {
    query.validate()?;

    let month = query.month.unwrap_or_else(|| Utc::now().month());
    let projection = state
        .projection
        .project_current(
            GpsCoordinates::new(query.latitude, query.longitude),
            month,
            query.scenario,
            query.intervention.basket(),
        )
        .await?;

    Ok(Json(projection))
}

/// Query parameters for a raw anomaly lookup
#[derive(Debug, Deserialize, Validate)]
pub struct AnomalyQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
    #[serde(default)]
    pub scenario: Scenario,
}

#[derive(Debug, Serialize)]
pub struct AnomalyResponse {
    pub grid_cell: GridCell,
    pub month: u32,
    pub scenario: Scenario,
    pub anomaly: Anomaly,
}

/// Look up the anomaly for a grid cell
pub async fn get_anomaly(
    State(state): State<AppState>,
    Query(query): Query<AnomalyQuery>,
) -> AppResult<Json<AnomalyResponse>> {
    query.validate()?;

    let provider = state.projection.provider();
    let anomaly = provider
        .get_anomaly(query.latitude, query.longitude, query.month, query.scenario)
        .map_err(AppError::from)?;

    Ok(Json(AnomalyResponse {
        grid_cell: provider.grid_cell(query.latitude, query.longitude),
        month: query.month,
        scenario: query.scenario,
        anomaly,
    }))
}

#[derive(Debug, Serialize)]
pub struct InterventionPreset {
    pub level: InterventionLevel,
    pub label: String,
    pub srm_cooling_c: f64,
    pub cdr_cooling_c: f64,
    pub total_cooling_c: f64,
}

/// List the intervention presets
pub async fn list_interventions() -> Json<Vec<InterventionPreset>> {
    let presets = InterventionLevel::ALL
        .iter()
        .map(|level| {
            let basket = level.basket();
            InterventionPreset {
                level: *level,
                label: level.to_string(),
                srm_cooling_c: basket.srm_cooling_c,
                cdr_cooling_c: basket.cdr_cooling_c,
                total_cooling_c: basket.total_cooling(),
            }
        })
        .collect();

    Json(presets)
}

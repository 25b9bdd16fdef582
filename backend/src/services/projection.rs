//! Projection service wiring the anomaly provider, synthesis engine and
//! weather source together

use std::sync::Arc;

use shared::{
    project, AnomalyProvider, GpsCoordinates, InterventionBasket, ObservedWeather, Projection,
    ProjectionRequest, Scenario, SynthesisEngine,
};

use crate::error::{AppError, AppResult};
use crate::external::WeatherSource;

/// Projection service shared across handlers
#[derive(Clone)]
pub struct ProjectionService {
    provider: Arc<AnomalyProvider>,
    engine: SynthesisEngine,
    weather_source: Option<Arc<dyn WeatherSource>>,
    max_cards: usize,
}

impl ProjectionService {
    /// Create a new ProjectionService
    pub fn new(
        provider: Arc<AnomalyProvider>,
        weather_source: Option<Arc<dyn WeatherSource>>,
        max_cards: usize,
    ) -> Self {
        let engine = SynthesisEngine::new(*provider.config());
        Self {
            provider,
            engine,
            weather_source,
            max_cards,
        }
    }

    pub fn provider(&self) -> &AnomalyProvider {
        &self.provider
    }

    pub fn max_cards(&self) -> usize {
        self.max_cards
    }

    /// Project a caller-supplied observation.
    ///
    /// The request's card limit is capped by the configured maximum.
    pub fn project(&self, mut request: ProjectionRequest) -> AppResult<Projection> {
        request.max_cards = request.max_cards.min(self.max_cards);

        let projection = project(&self.provider, &self.engine, &request)?;

        tracing::debug!(
            latitude = request.location.latitude,
            longitude = request.location.longitude,
            month = request.month,
            scenario = request.scenario.code(),
            delta_c = projection.synthesized.temperature_delta_c,
            cards = projection.cards.len(),
            "Projected observation"
        );

        Ok(projection)
    }

    /// Fetch current conditions from the weather source and project them
    pub async fn project_current(
        &self,
        location: GpsCoordinates,
        month: u32,
        scenario: Scenario,
        interventions: InterventionBasket,
    ) -> AppResult<Projection> {
        let observed = self.fetch_observation(location).await?;

        self.project(ProjectionRequest {
            location,
            month,
            scenario,
            interventions,
            observed,
            max_cards: self.max_cards,
        })
    }

    async fn fetch_observation(&self, location: GpsCoordinates) -> AppResult<ObservedWeather> {
        shared::validate_coordinates(location.latitude, location.longitude)
            .map_err(|msg| AppError::Validation {
                field: "location".to_string(),
                message: msg.to_string(),
            })?;

        let source = self.weather_source.as_ref().ok_or_else(|| {
            tracing::warn!("No weather source configured");
            AppError::WeatherServiceUnavailable
        })?;

        source
            .current_observation(location.latitude, location.longitude)
            .await
    }
}

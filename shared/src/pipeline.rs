//! End-to-end projection: anomaly lookup, synthesis, impact cards

use serde::{Deserialize, Serialize};

use crate::anomaly::AnomalyProvider;
use crate::error::{ProjectionError, ProjectionResult};
use crate::impacts::cards::{select_impact_cards, ImpactContext, MAX_CARDS};
use crate::models::{
    Anomaly, ImpactCard, InterventionBasket, ObservedWeather, Scenario, SynthesizedWeather,
};
use crate::synthesis::SynthesisEngine;
use crate::types::{GpsCoordinates, GridCell};
use crate::validation::{
    validate_coordinates, validate_interventions, validate_month, validate_observation,
};

/// Wet-day probability the weather source does not report: 0.8 when it is
/// currently raining, 0.2 otherwise.
pub fn precipitation_probability_heuristic(precipitation_mm: f64) -> f64 {
    if precipitation_mm > 0.0 {
        0.8
    } else {
        0.2
    }
}

fn default_max_cards() -> usize {
    MAX_CARDS
}

/// Everything needed to project one observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub location: GpsCoordinates,
    pub month: u32,
    #[serde(default)]
    pub scenario: Scenario,
    #[serde(default)]
    pub interventions: InterventionBasket,
    pub observed: ObservedWeather,
    #[serde(default = "default_max_cards")]
    pub max_cards: usize,
}

/// The synthesized 2045 day and its impact cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projection {
    pub grid_cell: GridCell,
    pub anomaly: Anomaly,
    pub synthesized: SynthesizedWeather,
    pub cards: Vec<ImpactCard>,
}

/// Run the full projection for a request.
///
/// Input is validated first and rejected without touching the provider.
/// When the basket includes solar radiation management, precipitation is
/// damped against the business-as-usual projection for the same cell.
pub fn project(
    provider: &AnomalyProvider,
    engine: &SynthesisEngine,
    request: &ProjectionRequest,
) -> ProjectionResult<Projection> {
    let GpsCoordinates {
        latitude,
        longitude,
    } = request.location;

    validate_month(request.month).map_err(|_| ProjectionError::InvalidMonth(request.month))?;
    validate_coordinates(latitude, longitude)
        .map_err(|_| ProjectionError::InvalidCoordinates { latitude, longitude })?;
    validate_observation(&request.observed).map_err(ProjectionError::InvalidObservation)?;
    validate_interventions(&request.interventions)
        .map_err(ProjectionError::InvalidInterventions)?;

    let anomaly = provider.get_anomaly(latitude, longitude, request.month, request.scenario)?;

    let synthesized = if request.interventions.srm_cooling_c > 0.0 {
        let bau_anomaly = match request.scenario {
            Scenario::BusinessAsUsual => anomaly,
            Scenario::Mitigation => provider.get_anomaly(
                latitude,
                longitude,
                request.month,
                Scenario::BusinessAsUsual,
            )?,
        };
        engine.synthesize_against_baseline(
            &request.observed,
            &anomaly,
            &bau_anomaly,
            request.scenario,
            &request.interventions,
        )
    } else {
        engine.synthesize(
            &request.observed,
            &anomaly,
            request.scenario,
            &request.interventions,
        )
    };

    let cards = select_impact_cards(
        &ImpactContext {
            month: request.month,
            observed: &request.observed,
            synthesized: &synthesized,
            anomaly: &anomaly,
        },
        request.max_cards,
    );

    Ok(Projection {
        grid_cell: provider.grid_cell(latitude, longitude),
        anomaly,
        synthesized,
        cards,
    })
}

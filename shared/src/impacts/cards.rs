//! Impact card builders and selection
//!
//! Each builder turns raw calculator output into an [`ImpactCard`] with a
//! display value, a one-sentence description and a severity bucket.

use super::air_quality::{calculate_ozone_risk, is_warm_month};
use super::drought::{estimate_drought_days, estimate_pet_change, moisture_balance_change};
use super::heat::{calculate_heat_index, heat_index_delta, tropical_night_risk};
use super::precipitation::{burst_index_percent, calculate_burst_index};
use super::seasons::{
    allergy_season_extension_days, vector_season_extension_days, vector_season_suitable,
};
use crate::models::{
    Anomaly, ImpactCard, ImpactType, ObservedWeather, Severity, SynthesizedWeather,
};

pub const MIN_CARDS: usize = 2;
pub const MAX_CARDS: usize = 4;

/// Wet probability at which cloudburst risk is worth showing on a dry day.
const CLOUDBURST_RELEVANT_WET_PROB: f64 = 0.5;

/// Realized warming above which dry spells are always shown (°C).
const DRY_SPELL_WARMING_C: f64 = 1.5;

/// Inputs shared by all card builders
#[derive(Debug, Clone, Copy)]
pub struct ImpactContext<'a> {
    pub month: u32,
    pub observed: &'a ObservedWeather,
    pub synthesized: &'a SynthesizedWeather,
    pub anomaly: &'a Anomaly,
}

fn classify(value: f64, high_above: f64, moderate_above: f64) -> Severity {
    if value > high_above {
        Severity::High
    } else if value > moderate_above {
        Severity::Moderate
    } else {
        Severity::Low
    }
}

fn signed(value: f64, decimals: usize) -> String {
    if value >= 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

// ============================================================================
// Card Builders
// ============================================================================

pub fn thermal_comfort_card(
    observed: &ObservedWeather,
    synthesized: &SynthesizedWeather,
) -> ImpactCard {
    let delta = heat_index_delta(
        observed.temperature_c,
        observed.relative_humidity,
        synthesized.temperature_c,
        synthesized.relative_humidity,
    );
    let feels_like = calculate_heat_index(synthesized.temperature_c, synthesized.relative_humidity);

    let description = if tropical_night_risk(synthesized.min_temperature_c) {
        format!(
            "In 2045 this day would feel like {:.1}°C, with nights staying above 24°C.",
            feels_like
        )
    } else {
        format!("In 2045 this day would feel like {:.1}°C.", feels_like)
    };

    ImpactCard::new(
        ImpactType::ThermalComfort,
        format!("{}°C", signed(delta, 1)),
        description,
        classify(delta, 4.0, 2.0),
    )
}

pub fn cloudburst_card(anomaly: &Anomaly, synthesized: &SynthesizedWeather) -> ImpactCard {
    let burst =
        calculate_burst_index(anomaly.delta_intensity_frac, synthesized.temperature_delta_c);
    let percent = burst_index_percent(burst);

    ImpactCard::new(
        ImpactType::Cloudburst,
        format!("{}%", signed(percent, 0)),
        format!(
            "Heavy downpours would be about {:.0}% more intense than today.",
            percent.max(0.0)
        ),
        classify(percent, 30.0, 15.0),
    )
}

pub fn dry_spell_card(
    observed: &ObservedWeather,
    synthesized: &SynthesizedWeather,
    anomaly: &Anomaly,
) -> ImpactCard {
    let precipitation_change = synthesized.precipitation_mm - observed.precipitation_mm;
    let pet_change = estimate_pet_change(synthesized.temperature_delta_c);
    let balance =
        moisture_balance_change(precipitation_change, observed.precipitation_mm, pet_change);
    let days = estimate_drought_days(balance, anomaly.delta_dry_spell_days);

    let severity = if days >= 5 {
        Severity::High
    } else if days >= 3 {
        Severity::Moderate
    } else {
        Severity::Low
    };

    ImpactCard::new(
        ImpactType::DrySpell,
        format!("{} days", signed(days as f64, 0)),
        format!(
            "Dry spells would last about {} more days, with {:.0}% more evaporation.",
            days.max(0),
            pet_change.max(0.0)
        ),
        severity,
    )
}

/// `None` outside May-September: ozone risk is not meaningful there
pub fn air_quality_card(synthesized: &SynthesizedWeather, month: u32) -> Option<ImpactCard> {
    if !is_warm_month(month) {
        return None;
    }

    let risk = calculate_ozone_risk(
        synthesized.max_temperature_c,
        synthesized.cloud_cover_fraction,
        month,
    );

    Some(ImpactCard::new(
        ImpactType::AirQuality,
        format!("{:.0}%", risk * 100.0),
        format!(
            "Afternoon highs near {:.0}°C raise the chance of unhealthy ozone levels.",
            synthesized.max_temperature_c
        ),
        classify(risk, 0.7, 0.4),
    ))
}

pub fn vector_season_card(synthesized: &SynthesizedWeather) -> ImpactCard {
    let days = vector_season_extension_days(synthesized.temperature_delta_c);
    let description = if vector_season_suitable(synthesized.temperature_c) {
        format!("Mosquito-friendly warmth would last about {} days longer each year.", days)
    } else {
        format!(
            "Conditions stay below 18°C today, but the mosquito season would still grow \
             by about {} days.",
            days
        )
    };

    let severity = if days >= 60 {
        Severity::High
    } else if days >= 30 {
        Severity::Moderate
    } else {
        Severity::Low
    };

    ImpactCard::new(ImpactType::VectorSeason, format!("+{} days", days), description, severity)
}

pub fn allergy_season_card(
    observed: &ObservedWeather,
    synthesized: &SynthesizedWeather,
) -> ImpactCard {
    let observed_min = observed.temperature_c - crate::synthesis::DIURNAL_HALF_RANGE_C;
    let days = allergy_season_extension_days(synthesized.min_temperature_c - observed_min);

    let severity = if days >= 28 {
        Severity::High
    } else if days >= 14 {
        Severity::Moderate
    } else {
        Severity::Low
    };

    ImpactCard::new(
        ImpactType::AllergySeason,
        format!("+{} days", days),
        format!("Warmer nights would stretch the pollen season by about {} days.", days),
        severity,
    )
}

// ============================================================================
// Selection
// ============================================================================

fn cloudburst_relevant(synthesized: &SynthesizedWeather) -> bool {
    synthesized.precipitation_mm > 0.0
        || synthesized.precipitation_probability >= CLOUDBURST_RELEVANT_WET_PROB
}

fn dry_spell_relevant(observed: &ObservedWeather, synthesized: &SynthesizedWeather) -> bool {
    synthesized.precipitation_mm < observed.precipitation_mm
        || synthesized.temperature_delta_c > DRY_SPELL_WARMING_C
}

/// Build the ordered card list for display.
///
/// Priority: thermal comfort always, then cloudburst, dry spell and air
/// quality when relevant. Seasonal cards fill up to the minimum: vector
/// season first when the synthesized day is warm enough for mosquitoes,
/// allergy season first otherwise. `max_cards` is clamped to 2..=4.
pub fn select_impact_cards(context: &ImpactContext<'_>, max_cards: usize) -> Vec<ImpactCard> {
    let limit = max_cards.clamp(MIN_CARDS, MAX_CARDS);
    let ImpactContext {
        month,
        observed,
        synthesized,
        anomaly,
    } = *context;

    let mut cards = vec![thermal_comfort_card(observed, synthesized)];

    if cloudburst_relevant(synthesized) {
        cards.push(cloudburst_card(anomaly, synthesized));
    }
    if dry_spell_relevant(observed, synthesized) {
        cards.push(dry_spell_card(observed, synthesized, anomaly));
    }
    if let Some(card) = air_quality_card(synthesized, month) {
        cards.push(card);
    }

    if cards.len() < MIN_CARDS {
        let vector = vector_season_card(synthesized);
        let allergy = allergy_season_card(observed, synthesized);
        let fillers = if vector_season_suitable(synthesized.temperature_c) {
            [vector, allergy]
        } else {
            [allergy, vector]
        };
        let missing = MIN_CARDS - cards.len();
        cards.extend(fillers.into_iter().take(missing));
    }

    cards.truncate(limit);
    cards
}

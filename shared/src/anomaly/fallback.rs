//! Parametric anomaly model used when no dataset record exists.

use crate::config::ProjectionConfig;
use crate::models::{Anomaly, Scenario};

/// Extremes warm faster than the mean.
const MAX_TO_MEAN_RATIO: f64 = 1.3;

/// Change in wet-day probability per °C of warming.
const WET_PROB_PER_C: f64 = 0.03;

/// Clausius-Clapeyron proxy: ~7% more moisture-holding capacity per °C.
pub const CLAUSIUS_CLAPEYRON_PER_C: f64 = 0.07;

/// Additional days above 90°F per °C of warming.
const HOT_DAYS_PER_C: f64 = 5.0;

const DRY_SPELL_DAYS_PER_C_BAU: f64 = 2.0;
const DRY_SPELL_DAYS_PER_C_MITIGATION: f64 = 1.0;

/// Polar amplification multiplier by latitude band.
pub fn latitude_factor(latitude: f64) -> f64 {
    let abs_lat = latitude.abs();
    if abs_lat > 60.0 {
        1.5
    } else if abs_lat > 45.0 {
        1.1
    } else if abs_lat > 30.0 {
        0.95
    } else {
        0.85
    }
}

/// Whether `month` falls in the hemisphere's winter (DJF north, JJA south).
pub fn is_winter(latitude: f64, month: u32) -> bool {
    if latitude >= 0.0 {
        matches!(month, 12 | 1 | 2)
    } else {
        matches!(month, 6..=8)
    }
}

/// Whether `month` falls in the hemisphere's summer (JJA north, DJF south).
pub fn is_summer(latitude: f64, month: u32) -> bool {
    if latitude >= 0.0 {
        matches!(month, 6..=8)
    } else {
        matches!(month, 12 | 1 | 2)
    }
}

/// Seasonal multiplier: polar winters and mid-latitude summers warm faster.
/// The tropics get no seasonal adjustment.
pub fn seasonal_factor(latitude: f64, month: u32) -> f64 {
    let abs_lat = latitude.abs();
    if abs_lat > 60.0 {
        if is_winter(latitude, month) {
            1.3
        } else {
            1.0
        }
    } else if abs_lat > 30.0 {
        if is_summer(latitude, month) {
            1.1
        } else {
            1.0
        }
    } else {
        1.0
    }
}

/// Estimate an anomaly for a grid-cell latitude, month and scenario.
pub fn parametric_anomaly(
    config: &ProjectionConfig,
    latitude: f64,
    month: u32,
    scenario: Scenario,
) -> Anomaly {
    let delta_t_mean_c = config.base_warming(scenario)
        * latitude_factor(latitude)
        * seasonal_factor(latitude, month);

    let dry_spell_rate = match scenario {
        Scenario::BusinessAsUsual => DRY_SPELL_DAYS_PER_C_BAU,
        Scenario::Mitigation => DRY_SPELL_DAYS_PER_C_MITIGATION,
    };

    Anomaly {
        delta_t_mean_c,
        delta_t_max_c: delta_t_mean_c * MAX_TO_MEAN_RATIO,
        delta_wet_prob: delta_t_mean_c * WET_PROB_PER_C,
        delta_intensity_frac: delta_t_mean_c * CLAUSIUS_CLAPEYRON_PER_C,
        delta_dry_spell_days: Some((delta_t_mean_c * dry_spell_rate).round() as i32),
        delta_hot_days_90f: Some((delta_t_mean_c * HOT_DAYS_PER_C).round() as i32),
    }
}

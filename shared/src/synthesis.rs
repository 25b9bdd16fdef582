//! Weather synthesis by delta mapping
//!
//! Adds an anomaly to an observation to produce the 2045 analog. Intervention
//! baskets are positive cooling magnitudes and are always subtracted from
//! the warming delta. Every function here is pure.

use crate::config::ProjectionConfig;
use crate::models::{Anomaly, InterventionBasket, ObservedWeather, Scenario, SynthesizedWeather};

/// Magnus formula constants
const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

/// Keeps `ln(RH)` finite for bone-dry readings.
const MIN_MAGNUS_HUMIDITY: f64 = 0.01;

/// Diurnal-range proxy when the source reports no daily max/min (°C).
pub const DIURNAL_HALF_RANGE_C: f64 = 5.0;

/// Dew point (°C) from temperature (°C) and relative humidity (fraction)
pub fn dew_point_magnus(temp_c: f64, relative_humidity: f64) -> f64 {
    let rh = relative_humidity.clamp(MIN_MAGNUS_HUMIDITY, 1.0);
    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + rh.ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

/// `T' = T_obs + ΔT_mean − SRM − CDR`
pub fn synthesize_temperature(
    observed_c: f64,
    delta_t_mean_c: f64,
    basket: &InterventionBasket,
) -> f64 {
    observed_c + delta_t_mean_c - basket.total_cooling()
}

/// Daily max from the reported max, or `T_obs + 5 °C` when absent
pub fn synthesize_max_temperature(
    observed_max_c: Option<f64>,
    observed_c: f64,
    delta_t_max_c: f64,
    basket: &InterventionBasket,
) -> f64 {
    let base = observed_max_c.unwrap_or(observed_c + DIURNAL_HALF_RANGE_C);
    base + delta_t_max_c - basket.total_cooling()
}

/// Nightly minimum estimated as `T_obs − 5 °C`, shifted by the mean delta
pub fn synthesize_min_temperature(
    observed_c: f64,
    delta_t_mean_c: f64,
    basket: &InterventionBasket,
) -> f64 {
    observed_c - DIURNAL_HALF_RANGE_C + delta_t_mean_c - basket.total_cooling()
}

/// Dew point recomputed from the synthesized temperature, humidity held constant
pub fn synthesize_dew_point(synthesized_temp_c: f64, observed_humidity: f64) -> f64 {
    dew_point_magnus(synthesized_temp_c, observed_humidity)
}

pub fn synthesize_wet_probability(observed: f64, delta_wet_prob: f64) -> f64 {
    (observed + delta_wet_prob).clamp(0.0, 1.0)
}

/// Future precipitation amount (mm), never negative.
///
/// Wet days scale by intensity. Dry days that become more likely to be wet
/// get a typical wet-day accumulation weighted by the new probability.
pub fn synthesize_precipitation(
    observed_mm: f64,
    observed_wet_prob: f64,
    synthesized_wet_prob: f64,
    delta_intensity_frac: f64,
    median_wet_day_mm: f64,
) -> f64 {
    let amount = if observed_mm > 0.0 {
        observed_mm * (1.0 + delta_intensity_frac)
    } else if synthesized_wet_prob > observed_wet_prob {
        synthesized_wet_prob * median_wet_day_mm * (1.0 + delta_intensity_frac)
    } else {
        0.0
    };
    amount.max(0.0)
}

/// Damp a projected amount against the business-as-usual amount.
///
/// Scales by `1 − α·SRM` and never exceeds the unmitigated value.
pub fn damp_precipitation(
    projected_mm: f64,
    baseline_bau_mm: f64,
    srm_cooling_c: f64,
    alpha: f64,
) -> f64 {
    let k = 1.0 - alpha * srm_cooling_c;
    (projected_mm * k).min(baseline_bau_mm).max(0.0)
}

/// Stateless synthesis engine carrying its calibration constants
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesisEngine {
    config: ProjectionConfig,
}

impl SynthesisEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Synthesize the 2045 analog of `observed`
    pub fn synthesize(
        &self,
        observed: &ObservedWeather,
        anomaly: &Anomaly,
        scenario: Scenario,
        basket: &InterventionBasket,
    ) -> SynthesizedWeather {
        let humidity = observed.relative_humidity.clamp(0.0, 1.0);
        let observed_wet_prob = observed.precipitation_probability.clamp(0.0, 1.0);

        let temperature_c =
            synthesize_temperature(observed.temperature_c, anomaly.delta_t_mean_c, basket);
        let precipitation_probability =
            synthesize_wet_probability(observed_wet_prob, anomaly.delta_wet_prob);

        SynthesizedWeather {
            temperature_c,
            max_temperature_c: synthesize_max_temperature(
                observed.max_temperature_c,
                observed.temperature_c,
                anomaly.delta_t_max_c,
                basket,
            ),
            min_temperature_c: synthesize_min_temperature(
                observed.temperature_c,
                anomaly.delta_t_mean_c,
                basket,
            ),
            relative_humidity: humidity,
            dew_point_c: synthesize_dew_point(temperature_c, humidity),
            // Wind and cloud are passed through unchanged for now
            wind_speed_mps: observed.wind_speed_mps,
            cloud_cover_fraction: observed.cloud_cover_fraction,
            precipitation_probability,
            precipitation_mm: synthesize_precipitation(
                observed.precipitation_mm,
                observed_wet_prob,
                precipitation_probability,
                anomaly.delta_intensity_frac,
                self.config.median_wet_day_mm,
            ),
            pressure_hpa: observed.pressure_hpa,
            temperature_delta_c: temperature_c - observed.temperature_c,
            scenario,
            interventions: *basket,
        }
    }

    /// Synthesize, then damp precipitation against a business-as-usual anomaly
    /// for the same location and month.
    pub fn synthesize_against_baseline(
        &self,
        observed: &ObservedWeather,
        anomaly: &Anomaly,
        bau_anomaly: &Anomaly,
        scenario: Scenario,
        basket: &InterventionBasket,
    ) -> SynthesizedWeather {
        let mut synthesized = self.synthesize(observed, anomaly, scenario, basket);
        let baseline = self.synthesize(
            observed,
            bau_anomaly,
            Scenario::BusinessAsUsual,
            &InterventionBasket::NONE,
        );

        synthesized.precipitation_mm = damp_precipitation(
            synthesized.precipitation_mm,
            baseline.precipitation_mm,
            basket.srm_cooling_c,
            self.config.intervention_damping_alpha,
        );
        synthesized
    }
}

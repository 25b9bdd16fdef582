//! Cloudburst and extreme precipitation indicators

use crate::anomaly::fallback::CLAUSIUS_CLAPEYRON_PER_C;

/// Relative change in heavy-rain intensity.
///
/// Combines the anomaly's intensity fraction with a Clausius-Clapeyron
/// adjustment on the realized temperature delta, so intervention cooling is
/// only counted once.
pub fn calculate_burst_index(intensity_fraction: f64, global_temp_delta_c: f64) -> f64 {
    (1.0 + intensity_fraction) * (1.0 + CLAUSIUS_CLAPEYRON_PER_C * global_temp_delta_c)
}

/// Burst index as a percentage increase
pub fn burst_index_percent(burst_index: f64) -> f64 {
    (burst_index - 1.0) * 100.0
}

/// Percentage change between two precipitation totals, 0 when the baseline is 0
pub fn extreme_precipitation_increase(current_mm: f64, future_mm: f64) -> f64 {
    if current_mm <= 0.0 {
        return 0.0;
    }
    (future_mm - current_mm) / current_mm * 100.0
}

//! Heat stress indicators

use crate::types::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Below this air temperature the heat index equals the air temperature.
pub const HEAT_INDEX_THRESHOLD_F: f64 = 80.0;

/// Nights staying above 24 °C (75 °F) count as tropical nights.
pub const TROPICAL_NIGHT_C: f64 = 24.0;

// Rothfusz regression coefficients (NWS), °F and percent humidity
const C1: f64 = -42.379;
const C2: f64 = 2.049_015_23;
const C3: f64 = 10.143_331_27;
const C4: f64 = -0.224_755_41;
const C5: f64 = -0.006_837_83;
const C6: f64 = -0.054_817_17;
const C7: f64 = 0.001_228_74;
const C8: f64 = 0.000_852_82;
const C9: f64 = -0.000_001_99;

/// Heat index (°C) from air temperature (°C) and relative humidity (fraction)
pub fn calculate_heat_index(temp_c: f64, relative_humidity: f64) -> f64 {
    let t = celsius_to_fahrenheit(temp_c);
    if t < HEAT_INDEX_THRESHOLD_F {
        return temp_c;
    }

    let r = relative_humidity.clamp(0.0, 1.0) * 100.0;
    let hi_f = C1
        + C2 * t
        + C3 * r
        + C4 * t * r
        + C5 * t * t
        + C6 * r * r
        + C7 * t * t * r
        + C8 * t * r * r
        + C9 * t * t * r * r;

    fahrenheit_to_celsius(hi_f)
}

/// Heat index change between the observation and the synthesized weather
pub fn heat_index_delta(
    observed_temp_c: f64,
    observed_humidity: f64,
    synthesized_temp_c: f64,
    synthesized_humidity: f64,
) -> f64 {
    calculate_heat_index(synthesized_temp_c, synthesized_humidity)
        - calculate_heat_index(observed_temp_c, observed_humidity)
}

pub fn tropical_night_risk(min_temp_c: f64) -> bool {
    min_temp_c > TROPICAL_NIGHT_C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_identity() {
        assert_eq!(calculate_heat_index(20.0, 0.9), 20.0);
        assert_eq!(calculate_heat_index(26.5, 0.5), 26.5);
        assert_eq!(calculate_heat_index(-5.0, 0.1), -5.0);
    }

    #[test]
    fn test_nws_reference_value() {
        // NWS table: 90 °F at 70% RH feels like ~106 °F
        let hi = calculate_heat_index(fahrenheit_to_celsius(90.0), 0.7);
        assert!((celsius_to_fahrenheit(hi) - 105.9).abs() < 1.0);
    }

    #[test]
    fn test_humid_heat_exceeds_air_temperature() {
        assert!(calculate_heat_index(32.0, 0.8) > 32.0);
    }

    #[test]
    fn test_heat_index_delta() {
        assert_eq!(heat_index_delta(20.0, 0.5, 22.0, 0.5), 2.0);
        assert!(heat_index_delta(30.0, 0.7, 33.0, 0.7) > 3.0);
    }

    #[test]
    fn test_tropical_night() {
        assert!(tropical_night_risk(24.5));
        assert!(!tropical_night_risk(24.0));
        assert!(!tropical_night_risk(18.0));
    }
}

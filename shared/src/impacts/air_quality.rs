//! Ground-level ozone risk

use crate::types::celsius_to_fahrenheit;

/// Ozone formation needs strong sun and heat; below this it is negligible.
const OZONE_REFERENCE_F: f64 = 90.0;
const OZONE_SCALE: f64 = 10.0;

/// May through September
pub fn is_warm_month(month: u32) -> bool {
    (5..=9).contains(&month)
}

/// Ozone risk score in [0, 1]; exactly 0 outside the warm-month window
pub fn calculate_ozone_risk(max_temp_c: f64, cloud_cover_fraction: f64, month: u32) -> f64 {
    if !is_warm_month(month) {
        return 0.0;
    }

    let sunshine = 1.0 - cloud_cover_fraction.clamp(0.0, 1.0);
    let x = (celsius_to_fahrenheit(max_temp_c) - OZONE_REFERENCE_F) * sunshine / OZONE_SCALE;
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_month_is_zero() {
        assert_eq!(calculate_ozone_risk(35.0, 0.2, 1), 0.0);
        assert_eq!(calculate_ozone_risk(40.0, 0.0, 10), 0.0);
        assert_eq!(calculate_ozone_risk(40.0, 0.0, 4), 0.0);
    }

    #[test]
    fn test_warm_month_window() {
        assert!(!is_warm_month(4));
        assert!(is_warm_month(5));
        assert!(is_warm_month(9));
        assert!(!is_warm_month(10));
    }

    #[test]
    fn test_reference_temperature_is_midpoint() {
        let risk = calculate_ozone_risk(crate::types::fahrenheit_to_celsius(90.0), 0.0, 7);
        assert!((risk - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hot_clear_day_is_high() {
        // 35 °C = 95 °F, 80% sunshine: x = 0.4
        let risk = calculate_ozone_risk(35.0, 0.2, 7);
        assert!((risk - 1.0 / (1.0 + (-0.4f64).exp())).abs() < 1e-9);

        assert!(calculate_ozone_risk(42.0, 0.0, 7) > 0.7);
    }

    #[test]
    fn test_overcast_neutralizes_heat() {
        let risk = calculate_ozone_risk(40.0, 1.0, 7);
        assert!((risk - 0.5).abs() < 1e-9);
    }
}

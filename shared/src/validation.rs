//! Validation utilities for the Climate 2045 projection platform
//!
//! The projection pipeline runs these checks before any anomaly lookup, so
//! the calculators can assume physically meaningful inputs.

use crate::models::{InterventionBasket, ObservedWeather};

// ============================================================================
// Calendar and Location
// ============================================================================

/// Validate a calendar month (1-12)
pub fn validate_month(month: u32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    Ok(())
}

/// Validate WGS84 decimal-degree coordinates
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

// ============================================================================
// Observations
// ============================================================================

/// Validate an observation before it is synthesized
pub fn validate_observation(observed: &ObservedWeather) -> Result<(), &'static str> {
    let numbers = [
        observed.temperature_c,
        observed.relative_humidity,
        observed.wind_speed_mps,
        observed.cloud_cover_fraction,
        observed.precipitation_probability,
        observed.precipitation_mm,
    ];
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err("Observation values must be finite numbers");
    }
    if observed.dew_point_c.is_some_and(|d| !d.is_finite())
        || observed.max_temperature_c.is_some_and(|t| !t.is_finite())
    {
        return Err("Observation values must be finite numbers");
    }
    if observed.precipitation_mm < 0.0 {
        return Err("Precipitation cannot be negative");
    }
    if observed.wind_speed_mps < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    if !is_fraction(observed.relative_humidity) {
        return Err("Relative humidity must be between 0 and 1");
    }
    if !is_fraction(observed.cloud_cover_fraction) {
        return Err("Cloud cover must be between 0 and 1");
    }
    if !is_fraction(observed.precipitation_probability) {
        return Err("Precipitation probability must be between 0 and 1");
    }
    // Anything below absolute zero is an upstream unit bug
    if observed.temperature_c < -273.15 {
        return Err("Temperature is below absolute zero");
    }
    Ok(())
}

/// Check that a value is a usable fraction (0-1)
pub fn is_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

// ============================================================================
// Interventions
// ============================================================================

/// Intervention baskets carry cooling magnitudes, so both parts must be
/// finite and non-negative
pub fn validate_interventions(basket: &InterventionBasket) -> Result<(), &'static str> {
    if !basket.srm_cooling_c.is_finite() || !basket.cdr_cooling_c.is_finite() {
        return Err("Intervention cooling must be a finite number");
    }
    if basket.srm_cooling_c < 0.0 || basket.cdr_cooling_c < 0.0 {
        return Err("Intervention cooling cannot be negative");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> ObservedWeather {
        ObservedWeather::new(20.0, 0.6, 3.0, 0.4, 0.2, 0.0)
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(40.7, -74.0).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(90.1, 0.0).is_err());
        assert!(validate_coordinates(0.0, -180.5).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_validate_observation_valid() {
        assert!(validate_observation(&observation()).is_ok());
    }

    #[test]
    fn test_validate_observation_negative_precipitation() {
        let mut observed = observation();
        observed.precipitation_mm = -1.0;
        assert!(validate_observation(&observed).is_err());
    }

    #[test]
    fn test_validate_observation_non_finite() {
        let mut observed = observation();
        observed.temperature_c = f64::INFINITY;
        assert!(validate_observation(&observed).is_err());

        let observed = observation().with_dew_point(f64::NAN);
        assert!(validate_observation(&observed).is_err());
    }

    #[test]
    fn test_validate_observation_fraction_out_of_range() {
        let mut observed = observation();
        observed.relative_humidity = 60.0;
        assert_eq!(
            validate_observation(&observed),
            Err("Relative humidity must be between 0 and 1")
        );

        let mut observed = observation();
        observed.cloud_cover_fraction = -0.1;
        assert!(validate_observation(&observed).is_err());

        let mut observed = observation();
        observed.precipitation_probability = 1.5;
        assert!(validate_observation(&observed).is_err());
    }

    #[test]
    fn test_validate_interventions() {
        assert!(validate_interventions(&InterventionBasket::NONE).is_ok());
        assert!(validate_interventions(&InterventionBasket::HIGH).is_ok());
        assert!(validate_interventions(&InterventionBasket::new(-0.5, 0.0)).is_err());
        assert!(validate_interventions(&InterventionBasket::new(0.0, -0.1)).is_err());
        assert!(validate_interventions(&InterventionBasket::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_is_fraction() {
        assert!(is_fraction(0.0));
        assert!(is_fraction(1.0));
        assert!(!is_fraction(1.01));
        assert!(!is_fraction(-0.01));
    }
}

//! Dry-spell and drought risk

/// Potential evapotranspiration rises ~5% per °C of warming.
const PET_PERCENT_PER_C: f64 = 5.0;

/// PET change in percent for a temperature change
pub fn estimate_pet_change(temp_delta_c: f64) -> f64 {
    temp_delta_c * PET_PERCENT_PER_C
}

/// Precipitation change minus the extra evaporative demand (mm)
pub fn moisture_balance_change(
    precipitation_change_mm: f64,
    baseline_precipitation_mm: f64,
    pet_change_percent: f64,
) -> f64 {
    precipitation_change_mm - baseline_precipitation_mm * pet_change_percent / 100.0
}

/// Additional dry-spell days.
///
/// Explicit anomaly data always wins over the moisture-balance heuristic.
pub fn estimate_drought_days(
    moisture_balance_change: f64,
    anomaly_dry_spell_days: Option<i32>,
) -> i32 {
    if let Some(days) = anomaly_dry_spell_days {
        return days;
    }

    if moisture_balance_change < -10.0 {
        5
    } else if moisture_balance_change < -5.0 {
        3
    } else if moisture_balance_change < 0.0 {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_change() {
        assert_eq!(estimate_pet_change(2.0), 10.0);
        assert_eq!(estimate_pet_change(0.0), 0.0);
    }

    #[test]
    fn test_moisture_balance() {
        // -2mm of rain, plus 10% more evaporation on a 20mm baseline
        assert!((moisture_balance_change(-2.0, 20.0, 10.0) + 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_drought_day_thresholds() {
        assert_eq!(estimate_drought_days(-15.0, None), 5);
        assert_eq!(estimate_drought_days(-10.0, None), 3);
        assert_eq!(estimate_drought_days(-7.0, None), 3);
        assert_eq!(estimate_drought_days(-5.0, None), 1);
        assert_eq!(estimate_drought_days(-0.1, None), 1);
        assert_eq!(estimate_drought_days(0.0, None), 0);
        assert_eq!(estimate_drought_days(4.0, None), 0);
    }

    #[test]
    fn test_anomaly_overrides_estimate() {
        assert_eq!(estimate_drought_days(-15.0, Some(7)), 7);
        assert_eq!(estimate_drought_days(10.0, Some(2)), 2);
    }
}

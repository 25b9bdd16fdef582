//! Anomaly provider integration tests
//!
//! Tests for anomaly lookup including:
//! - Grid cell rounding
//! - Lookup idempotence and caching
//! - Scenario monotonicity
//! - Polar amplification

use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

use shared::{
    Anomaly, AnomalyDataset, AnomalyProvider, AnomalyRecord, GridCell, ProjectionConfig,
    ProjectionError, Scenario,
};

fn provider() -> AnomalyProvider {
    AnomalyProvider::new(ProjectionConfig::default()).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Nearest-cell rounding, not truncation
    #[test]
    fn test_grid_rounding_examples() {
        let a = GridCell::from_coordinates(40.3, -74.7, 1.0);
        let b = GridCell::from_coordinates(40.7, -74.3, 1.0);

        assert_eq!(a.latitude(), 40.0);
        assert_eq!(a.longitude(), -75.0);
        assert_eq!(b.latitude(), 41.0);
        assert_eq!(b.longitude(), -74.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_provider_grid_uses_configured_resolution() {
        let coarse = AnomalyProvider::new(ProjectionConfig {
            grid_resolution_deg: 2.5,
            ..Default::default()
        })
        .unwrap();

        let cell = coarse.grid_cell(41.0, -73.0);
        assert_eq!(cell.latitude(), 40.0);
        assert_eq!(cell.longitude(), -72.5);
    }

    #[test]
    fn test_polar_amplification() {
        let provider = provider();
        for scenario in [Scenario::BusinessAsUsual, Scenario::Mitigation] {
            for month in 1..=12 {
                let polar = provider.get_anomaly(70.0, 20.0, month, scenario).unwrap();
                let tropical = provider.get_anomaly(10.0, 20.0, month, scenario).unwrap();
                assert!(polar.delta_t_mean_c > tropical.delta_t_mean_c);
            }
        }
    }

    #[test]
    fn test_arctic_winter_warms_most() {
        let provider = provider();
        let january = provider
            .get_anomaly(70.0, 20.0, 1, Scenario::BusinessAsUsual)
            .unwrap();
        let july = provider
            .get_anomaly(70.0, 20.0, 7, Scenario::BusinessAsUsual)
            .unwrap();

        assert!((january.delta_t_mean_c - 2.5 * 1.5 * 1.3).abs() < 1e-9);
        assert!((july.delta_t_mean_c - 2.5 * 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_dataset_from_json_is_preferred() {
        let json = r#"[{
            "grid_lat": 52.0, "grid_lon": 13.0, "month": 8, "scenario": "mitigation",
            "anomaly": {
                "delta_t_mean_c": 1.2, "delta_t_max_c": 1.9,
                "delta_wet_prob": -0.02, "delta_intensity_frac": 0.05,
                "delta_dry_spell_days": 3, "delta_hot_days_90f": 4
            }
        }]"#;
        let dataset = AnomalyDataset::from_json_str(json).unwrap();
        let provider = AnomalyProvider::with_dataset(ProjectionConfig::default(), dataset).unwrap();

        let anomaly = provider
            .get_anomaly(52.4, 13.4, 8, Scenario::Mitigation)
            .unwrap();
        assert_eq!(anomaly.delta_t_mean_c, 1.2);
        assert_eq!(anomaly.delta_dry_spell_days, Some(3));
        assert_eq!(anomaly.delta_hot_days_90f, Some(4));
    }

    #[test]
    fn test_empty_dataset_falls_back() {
        let provider =
            AnomalyProvider::with_dataset(ProjectionConfig::default(), AnomalyDataset::default())
                .unwrap();
        assert!(!provider.has_dataset());

        let anomaly = provider
            .get_anomaly(52.4, 13.4, 8, Scenario::Mitigation)
            .unwrap();
        assert!(anomaly.delta_t_mean_c > 0.0);
    }

    #[test]
    fn test_dataset_record_snapped_to_grid() {
        let dataset = AnomalyDataset::from_records(vec![AnomalyRecord {
            grid_lat: 40.2,
            grid_lon: -74.8,
            month: 1,
            scenario: Scenario::BusinessAsUsual,
            anomaly: Anomaly {
                delta_t_mean_c: 4.0,
                delta_t_max_c: 5.0,
                delta_wet_prob: 0.0,
                delta_intensity_frac: 0.0,
                delta_dry_spell_days: None,
                delta_hot_days_90f: None,
            },
        }]);
        let provider = AnomalyProvider::with_dataset(ProjectionConfig::default(), dataset).unwrap();

        let anomaly = provider
            .get_anomaly(39.6, -75.4, 1, Scenario::BusinessAsUsual)
            .unwrap();
        assert_eq!(anomaly.delta_t_mean_c, 4.0);
    }

    #[test]
    fn test_invalid_month_is_contract_violation() {
        let provider = provider();
        assert_eq!(
            provider.get_anomaly(0.0, 0.0, 13, Scenario::BusinessAsUsual),
            Err(ProjectionError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_concurrent_lookups_converge() {
        let provider = Arc::new(provider());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider = Arc::clone(&provider);
                thread::spawn(move || {
                    provider
                        .get_anomaly(35.0, 139.0, 8, Scenario::BusinessAsUsual)
                        .unwrap()
                })
            })
            .collect();

        let results: Vec<Anomaly> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(provider.cache_len(), 1);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn latitude_strategy() -> impl Strategy<Value = f64> {
        -90.0..=90.0f64
    }

    fn longitude_strategy() -> impl Strategy<Value = f64> {
        -180.0..=180.0f64
    }

    fn month_strategy() -> impl Strategy<Value = u32> {
        1u32..=12
    }

    fn scenario_strategy() -> impl Strategy<Value = Scenario> {
        prop_oneof![Just(Scenario::BusinessAsUsual), Just(Scenario::Mitigation)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Repeated lookups are bit-identical regardless of lookups in between
        #[test]
        fn prop_lookup_idempotent(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            month in month_strategy(),
            scenario in scenario_strategy(),
            other_lat in latitude_strategy(),
            other_lon in longitude_strategy(),
            other_month in month_strategy(),
        ) {
            let provider = provider();

            let first = provider.get_anomaly(lat, lon, month, scenario).unwrap();
            provider.get_anomaly(other_lat, other_lon, other_month, scenario).unwrap();
            let second = provider.get_anomaly(lat, lon, month, scenario).unwrap();

            prop_assert_eq!(first.delta_t_mean_c.to_bits(), second.delta_t_mean_c.to_bits());
            prop_assert_eq!(first, second);
        }

        /// Mitigation never warms more than business-as-usual
        #[test]
        fn prop_mitigation_not_warmer(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            month in month_strategy(),
        ) {
            let provider = provider();
            let bau = provider.get_anomaly(lat, lon, month, Scenario::BusinessAsUsual).unwrap();
            let mitigation = provider.get_anomaly(lat, lon, month, Scenario::Mitigation).unwrap();

            prop_assert!(bau.delta_t_mean_c >= mitigation.delta_t_mean_c);
        }

        /// Coordinates within half a cell of a centre share its cell
        #[test]
        fn prop_grid_nearest_cell(
            lat_index in -80i64..=80,
            lon_index in -170i64..=170,
            lat_offset in -0.49..0.49f64,
            lon_offset in -0.49..0.49f64,
        ) {
            let cell = GridCell::from_coordinates(
                lat_index as f64 + lat_offset,
                lon_index as f64 + lon_offset,
                1.0,
            );
            prop_assert_eq!(cell.lat_index, lat_index);
            prop_assert_eq!(cell.lon_index, lon_index);
        }

        /// Extremes warm faster than the mean in the parametric model
        #[test]
        fn prop_max_delta_exceeds_mean(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            month in month_strategy(),
            scenario in scenario_strategy(),
        ) {
            let anomaly = provider().get_anomaly(lat, lon, month, scenario).unwrap();
            prop_assert!(anomaly.delta_t_max_c > anomaly.delta_t_mean_c);
        }
    }
}

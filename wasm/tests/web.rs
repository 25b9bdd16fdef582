//! Browser tests for the WebAssembly bindings
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use climate_2045_wasm::{current_month, Projector};

wasm_bindgen_test_configure!(run_in_browser);

const REQUEST: &str = r#"{
    "location": {"latitude": 35.7, "longitude": 139.7},
    "month": 8,
    "observed": {
        "temperature_c": 31.0, "relative_humidity": 0.7,
        "wind_speed_mps": 2.0, "cloud_cover_fraction": 0.3,
        "precipitation_probability": 0.2, "precipitation_mm": 0.0
    }
}"#;

#[wasm_bindgen_test]
fn test_current_month_in_range() {
    assert!((1..=12).contains(&current_month()));
}

#[wasm_bindgen_test]
fn test_projector_memoizes_in_browser() {
    let projector = Projector::new().unwrap();
    projector.project(REQUEST).unwrap();
    projector.project(REQUEST).unwrap();
    assert_eq!(projector.cached_anomalies(), 1);
}

#[wasm_bindgen_test]
fn test_dataset_load_and_bad_json() {
    let dataset = r#"[{
        "grid_lat": 36.0, "grid_lon": 140.0, "month": 8, "scenario": "bau",
        "anomaly": {
            "delta_t_mean_c": 1.8, "delta_t_max_c": 2.4,
            "delta_wet_prob": 0.01, "delta_intensity_frac": 0.1
        }
    }]"#;
    let projector = Projector::with_dataset(dataset).unwrap();
    assert!(projector.project(REQUEST).is_ok());
    assert!(projector.project("{").is_err());
}

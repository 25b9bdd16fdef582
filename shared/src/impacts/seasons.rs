//! Vector (mosquito) and allergy season lengths

/// Mean temperature at which mosquito activity becomes sustained.
pub const VECTOR_THRESHOLD_C: f64 = 18.0;

/// About one extra month of suitable conditions per 2 °C of warming.
pub fn vector_season_extension_days(temp_delta_c: f64) -> i32 {
    ((temp_delta_c / 2.0).floor() * 30.0).max(0.0) as i32
}

pub fn vector_season_suitable(mean_temp_c: f64) -> bool {
    mean_temp_c >= VECTOR_THRESHOLD_C
}

/// Two weeks of extra frost-free period per °C of minimum-temperature warming.
pub fn allergy_season_extension_days(temp_delta_min_c: f64) -> i32 {
    (temp_delta_min_c * 14.0).round().max(0.0) as i32
}

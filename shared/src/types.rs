//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A discretized latitude/longitude bucket.
///
/// Cells are addressed by integer indices so they can be hashed and compared
/// exactly; the centre coordinates are `index * resolution`. Snapping uses
/// nearest-cell rounding (half away from zero), so two coordinates within half
/// a cell of each other always land in the same cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GridCell {
    pub lat_index: i64,
    pub lon_index: i64,
    pub resolution_deg: f64,
}

impl GridCell {
    /// Snap a coordinate to the nearest cell at `resolution_deg`
    pub fn from_coordinates(latitude: f64, longitude: f64, resolution_deg: f64) -> Self {
        Self {
            lat_index: (latitude / resolution_deg).round() as i64,
            lon_index: (longitude / resolution_deg).round() as i64,
            resolution_deg,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.lat_index as f64 * self.resolution_deg
    }

    pub fn longitude(&self) -> f64 {
        self.lon_index as f64 * self.resolution_deg
    }
}

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_cell_nearest_rounding() {
        let a = GridCell::from_coordinates(40.3, -74.7, 1.0);
        let b = GridCell::from_coordinates(40.7, -74.3, 1.0);

        assert_eq!((a.latitude(), a.longitude()), (40.0, -75.0));
        assert_eq!((b.latitude(), b.longitude()), (41.0, -74.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_grid_cell_half_resolution() {
        let cell = GridCell::from_coordinates(40.3, -74.7, 0.5);
        assert!((cell.latitude() - 40.5).abs() < 1e-9);
        assert!((cell.longitude() - (-74.5)).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_conversion() {
        assert!((celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(32.0)).abs() < 1e-9);
        assert!((fahrenheit_to_celsius(celsius_to_fahrenheit(26.7)) - 26.7).abs() < 1e-9);
    }
}

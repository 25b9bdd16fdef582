//! HTTP request handlers

pub mod health;
pub mod projection;

pub use health::health_check;
pub use projection::{create_projection, get_anomaly, get_current_projection, list_interventions};

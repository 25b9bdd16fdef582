//! Error types for the projection core

use thiserror::Error;

/// Contract violations raised by the projection core.
///
/// Missing dataset records are not errors: the provider falls back to the
/// parametric model. These variants only cover malformed caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Invalid observation: {0}")]
    InvalidObservation(&'static str),

    #[error("Invalid interventions: {0}")]
    InvalidInterventions(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result type alias for the projection core
pub type ProjectionResult<T> = Result<T, ProjectionError>;

//! Shared core for the Climate 2045 projection platform
//!
//! This crate holds everything that turns a present-day observation into a
//! year-2045 scenario: the anomaly lookup, the weather synthesis and the
//! impact calculators. It performs no I/O and is used by the backend server
//! and by the WASM bindings.

pub mod anomaly;
pub mod config;
pub mod error;
pub mod impacts;
pub mod models;
pub mod pipeline;
pub mod synthesis;
pub mod types;
pub mod validation;

pub use anomaly::{AnomalyCache, AnomalyDataset, AnomalyProvider, InMemoryAnomalyCache};
pub use config::ProjectionConfig;
pub use error::{ProjectionError, ProjectionResult};
pub use models::*;
pub use pipeline::{precipitation_probability_heuristic, project, Projection, ProjectionRequest};
pub use synthesis::SynthesisEngine;
pub use types::*;
pub use validation::*;

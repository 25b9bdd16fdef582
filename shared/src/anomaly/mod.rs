//! Anomaly lookup: dataset records, parametric fallback and memo cache

mod cache;
mod dataset;
pub mod fallback;
mod provider;

pub use cache::{AnomalyCache, InMemoryAnomalyCache};
pub use dataset::AnomalyDataset;
pub use provider::AnomalyProvider;

//! Business logic services

pub mod dataset;
pub mod projection;

pub use dataset::load_dataset;
pub use projection::ProjectionService;

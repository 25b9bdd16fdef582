//! Domain models for the Climate 2045 projection platform

mod anomaly;
mod impact;
mod scenario;
mod weather;

pub use anomaly::*;
pub use impact::*;
pub use scenario::*;
pub use weather::*;

//! Impact calculators: human-relevant indicators derived from synthesized weather

pub mod air_quality;
pub mod cards;
pub mod drought;
pub mod heat;
pub mod precipitation;
pub mod seasons;

pub use air_quality::{calculate_ozone_risk, is_warm_month};
pub use cards::{select_impact_cards, ImpactContext};
pub use drought::{estimate_drought_days, estimate_pet_change, moisture_balance_change};
pub use heat::{calculate_heat_index, heat_index_delta, tropical_night_risk};
pub use precipitation::{
    burst_index_percent, calculate_burst_index, extreme_precipitation_increase,
};
pub use seasons::{
    allergy_season_extension_days, vector_season_extension_days, vector_season_suitable,
};

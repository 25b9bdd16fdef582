//! Emissions scenarios and intervention baskets

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Emissions trajectory through 2045
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// High-emissions trajectory with no additional mitigation
    #[default]
    #[serde(rename = "bau")]
    BusinessAsUsual,
    /// Paris-aligned lower-emissions trajectory
    #[serde(rename = "mitigation")]
    Mitigation,
}

impl Scenario {
    pub fn code(&self) -> &'static str {
        match self {
            Scenario::BusinessAsUsual => "bau",
            Scenario::Mitigation => "mitigation",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scenario::BusinessAsUsual => write!(f, "Business as usual"),
            Scenario::Mitigation => write!(f, "Mitigation"),
        }
    }
}

impl FromStr for Scenario {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bau" | "business_as_usual" | "business-as-usual" => Ok(Scenario::BusinessAsUsual),
            "mitigation" => Ok(Scenario::Mitigation),
            _ => Err("Scenario must be one of: bau, mitigation"),
        }
    }
}

/// Cooling offsets from climate interventions, both in °C.
///
/// Values are positive magnitudes of cooling and are subtracted from the
/// warming delta during synthesis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct InterventionBasket {
    /// Solar radiation management cooling
    pub srm_cooling_c: f64,
    /// Carbon dioxide removal cooling
    pub cdr_cooling_c: f64,
}

impl InterventionBasket {
    pub const NONE: Self = Self::new(0.0, 0.0);
    pub const LOW: Self = Self::new(0.3, 0.1);
    pub const MEDIUM: Self = Self::new(0.6, 0.2);
    pub const HIGH: Self = Self::new(1.0, 0.3);

    pub const fn new(srm_cooling_c: f64, cdr_cooling_c: f64) -> Self {
        Self {
            srm_cooling_c,
            cdr_cooling_c,
        }
    }

    pub fn total_cooling(&self) -> f64 {
        self.srm_cooling_c + self.cdr_cooling_c
    }
}

/// Canonical intervention presets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterventionLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl InterventionLevel {
    pub const ALL: [InterventionLevel; 4] = [
        InterventionLevel::None,
        InterventionLevel::Low,
        InterventionLevel::Medium,
        InterventionLevel::High,
    ];

    pub fn basket(&self) -> InterventionBasket {
        match self {
            InterventionLevel::None => InterventionBasket::NONE,
            InterventionLevel::Low => InterventionBasket::LOW,
            InterventionLevel::Medium => InterventionBasket::MEDIUM,
            InterventionLevel::High => InterventionBasket::HIGH,
        }
    }
}

impl std::fmt::Display for InterventionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterventionLevel::None => write!(f, "None"),
            InterventionLevel::Low => write!(f, "Low"),
            InterventionLevel::Medium => write!(f, "Medium"),
            InterventionLevel::High => write!(f, "High"),
        }
    }
}

impl FromStr for InterventionLevel {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(InterventionLevel::None),
            "low" => Ok(InterventionLevel::Low),
            "medium" => Ok(InterventionLevel::Medium),
            "high" => Ok(InterventionLevel::High),
            _ => Err("Intervention level must be one of: none, low, medium, high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(InterventionLevel::None.basket(), InterventionBasket::new(0.0, 0.0));
        assert_eq!(InterventionLevel::Low.basket(), InterventionBasket::new(0.3, 0.1));
        assert_eq!(InterventionLevel::Medium.basket(), InterventionBasket::new(0.6, 0.2));
        assert_eq!(InterventionLevel::High.basket(), InterventionBasket::new(1.0, 0.3));
    }

    #[test]
    fn test_total_cooling() {
        assert!((InterventionBasket::HIGH.total_cooling() - 1.3).abs() < 1e-9);
        assert_eq!(InterventionBasket::NONE.total_cooling(), 0.0);
    }

    #[test]
    fn test_scenario_parsing() {
        assert_eq!("bau".parse::<Scenario>(), Ok(Scenario::BusinessAsUsual));
        assert_eq!("Mitigation".parse::<Scenario>(), Ok(Scenario::Mitigation));
        assert!("rcp85".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_scenario_serde_names() {
        assert_eq!(
            serde_json::to_string(&Scenario::BusinessAsUsual).unwrap(),
            "\"bau\""
        );
        let parsed: Scenario = serde_json::from_str("\"mitigation\"").unwrap();
        assert_eq!(parsed, Scenario::Mitigation);
    }
}

//! Impact card models

use serde::{Deserialize, Serialize};

/// Kinds of downstream impact shown to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ImpactType {
    ThermalComfort,
    Cloudburst,
    DrySpell,
    AirQuality,
    VectorSeason,
    AllergySeason,
}

impl ImpactType {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactType::ThermalComfort => "Thermal comfort",
            ImpactType::Cloudburst => "Cloudburst risk",
            ImpactType::DrySpell => "Dry spells",
            ImpactType::AirQuality => "Air quality",
            ImpactType::VectorSeason => "Mosquito season",
            ImpactType::AllergySeason => "Allergy season",
        }
    }

    /// Icon name for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            ImpactType::ThermalComfort => "thermometer.sun",
            ImpactType::Cloudburst => "cloud.heavyrain",
            ImpactType::DrySpell => "sun.dust",
            ImpactType::AirQuality => "aqi.medium",
            ImpactType::VectorSeason => "ant",
            ImpactType::AllergySeason => "leaf",
        }
    }
}

impl std::fmt::Display for ImpactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity bucket for an impact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Moderate => write!(f, "Moderate"),
            Severity::High => write!(f, "High"),
        }
    }
}

/// One impact indicator ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImpactCard {
    pub impact_type: ImpactType,
    pub value: String,
    pub description: String,
    pub severity: Severity,
}

impl ImpactCard {
    pub fn new(
        impact_type: ImpactType,
        value: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            impact_type,
            value: value.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn label(&self) -> &'static str {
        self.impact_type.label()
    }
}

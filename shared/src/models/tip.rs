//! Eco-tip models

use serde::{Deserialize, Serialize};

/// Focus area of an eco tip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TipCategory {
    SoilHealth,
    WaterConservation,
    EnergyEfficiency,
    SoilConservation,
    PestManagement,
}

impl std::fmt::Display for TipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipCategory::SoilHealth => write!(f, "Soil Health"),
            TipCategory::WaterConservation => write!(f, "Water Conservation"),
            TipCategory::EnergyEfficiency => write!(f, "Energy Efficiency"),
            TipCategory::SoilConservation => write!(f, "Soil Conservation"),
            TipCategory::PestManagement => write!(f, "Pest Management"),
        }
    }
}

/// A single eco-friendly farming tip
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EcoTip {
    pub category: TipCategory,
    pub tip: &'static str,
    pub description: &'static str,
}

/// Tips sharing a category, in display order
#[derive(Debug, Clone, Serialize)]
pub struct TipGroup {
    pub category: TipCategory,
    pub tips: Vec<EcoTip>,
}

//! Irrigation method and soil type models used by the water simulation

use serde::{Deserialize, Serialize};

/// Irrigation methods with a known efficiency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    /// Any method not in the table
    Other,
}

impl IrrigationMethod {
    /// Resolve a user-supplied method name; unrecognised names map to `Other`
    pub fn from_input(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "drip" => IrrigationMethod::Drip,
            "sprinkler" => IrrigationMethod::Sprinkler,
            _ => IrrigationMethod::Other,
        }
    }

    /// Fraction of applied water reaching the crop
    pub fn efficiency(&self) -> f64 {
        match self {
            IrrigationMethod::Drip => 0.95,
            IrrigationMethod::Sprinkler => 0.85,
            IrrigationMethod::Other => 0.80,
        }
    }
}

/// Soil types with a known infiltration rate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    /// Any soil not in the table
    Other,
}

impl SoilType {
    pub fn from_input(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "clay" => SoilType::Clay,
            "loam" => SoilType::Loam,
            "sandy" => SoilType::Sandy,
            _ => SoilType::Other,
        }
    }

    pub fn infiltration(&self) -> f64 {
        match self {
            SoilType::Clay => 0.7,
            SoilType::Loam => 0.9,
            SoilType::Sandy => 0.8,
            SoilType::Other => 0.75,
        }
    }
}

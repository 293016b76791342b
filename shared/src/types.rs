//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Number of months covered by a water simulation
pub const MONTHS_PER_YEAR: usize = 12;

/// Number of seasons in a regional rainfall distribution
pub const SEASONS_PER_YEAR: usize = 4;

/// Advisory features selectable from the page form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CropEfficiency,
    WaterManagement,
    LocalizedWaterData,
    EcoTips,
    Exit,
}

impl Feature {
    /// Resolve the form selector ("1" through "5")
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(Feature::CropEfficiency),
            "2" => Some(Feature::WaterManagement),
            "3" => Some(Feature::LocalizedWaterData),
            "4" => Some(Feature::EcoTips),
            "5" => Some(Feature::Exit),
            _ => None,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Feature::CropEfficiency => "1",
            Feature::WaterManagement => "2",
            Feature::LocalizedWaterData => "3",
            Feature::EcoTips => "4",
            Feature::Exit => "5",
        }
    }

    /// Panel heading shown above the feature output
    pub fn title(&self) -> &'static str {
        match self {
            Feature::CropEfficiency => "Advanced Crop Efficiency Planner",
            Feature::WaterManagement => "Enhanced Water Management Tool",
            Feature::LocalizedWaterData => "Enhanced Localized Water Data",
            Feature::EcoTips => "Eco-Tips Section",
            Feature::Exit => "Exit",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Seasons of a regional rainfall distribution, in table order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; SEASONS_PER_YEAR] =
        [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Autumn => write!(f, "Autumn"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Capitalise the first character and lowercase the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_selector_round_trip() {
        for selector in ["1", "2", "3", "4", "5"] {
            let feature = Feature::from_selector(selector).unwrap();
            assert_eq!(feature.selector(), selector);
        }
    }

    #[test]
    fn test_feature_selector_rejects_unknown() {
        assert_eq!(Feature::from_selector("0"), None);
        assert_eq!(Feature::from_selector("6"), None);
        assert_eq!(Feature::from_selector(""), None);
        assert_eq!(Feature::from_selector("crop"), None);
        assert_eq!(Feature::from_selector(" 1"), None);
        assert_eq!(Feature::from_selector("1\n"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("wheat"), "Wheat");
        assert_eq!(capitalize("SEMI-ARID"), "Semi-arid");
        assert_eq!(capitalize(""), "");
    }
}

//! Regional climate models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::types::SEASONS_PER_YEAR;

/// Regions covered by the regional table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.as_str() == lowered)
            .ok_or(())
    }
}

/// Climate category of a region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Climate {
    Temperate,
    Arid,
    Humid,
    SemiArid,
}

impl Climate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Temperate => "temperate",
            Climate::Arid => "arid",
            Climate::Humid => "humid",
            Climate::SemiArid => "semi-arid",
        }
    }
}

impl std::fmt::Display for Climate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static climate and rainfall metadata for a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionRecord {
    pub region: Region,
    /// Annual rainfall in mm
    pub annual_rainfall_mm: u32,
    pub climate: Climate,
    /// Average temperature in °C
    pub avg_temp_celsius: i32,
    /// Rainfall per season in mm, Spring through Winter
    pub seasonal_rainfall_mm: [i32; SEASONS_PER_YEAR],
}

//! Crop and historical observation models

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Crops with historical observations in the reference tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Corn,
    Soy,
    Rice,
}

impl Crop {
    pub const ALL: [Crop; 4] = [Crop::Wheat, Crop::Corn, Crop::Soy, Crop::Rice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "wheat",
            Crop::Corn => "corn",
            Crop::Soy => "soy",
            Crop::Rice => "rice",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Crop {
    type Err = ();

    /// Case-insensitive match on the crop name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Crop::ALL
            .into_iter()
            .find(|crop| crop.as_str() == lowered)
            .ok_or(())
    }
}

/// One historical observation for a crop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CropObservation {
    pub yield_units: f64,
    pub water_use: f64,
    pub fertilizer: f64,
}

impl CropObservation {
    pub const fn new(yield_units: f64, water_use: f64, fertilizer: f64) -> Self {
        Self {
            yield_units,
            water_use,
            fertilizer,
        }
    }
}

/// Historical record for a single crop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecord {
    pub crop: Crop,
    pub observations: Vec<CropObservation>,
}

impl CropRecord {
    /// Build a record from parallel yield, water-use and fertilizer series.
    ///
    /// Returns `None` when the series lengths differ or are empty.
    pub fn from_series(
        crop: Crop,
        yields: &[f64],
        water_use: &[f64],
        fertilizer: &[f64],
    ) -> Option<Self> {
        if yields.is_empty() || yields.len() != water_use.len() || yields.len() != fertilizer.len()
        {
            return None;
        }
        let observations = yields
            .iter()
            .zip(water_use)
            .zip(fertilizer)
            .map(|((&y, &w), &f)| CropObservation::new(y, w, f))
            .collect();
        Some(Self { crop, observations })
    }

    pub fn yields(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.yield_units).collect()
    }

    pub fn mean_water_use(&self) -> f64 {
        mean(self.observations.iter().map(|o| o.water_use))
    }

    pub fn mean_fertilizer(&self) -> f64 {
        mean(self.observations.iter().map(|o| o.fertilizer))
    }
}

pub(crate) fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    values.sum::<f64>() / n as f64
}

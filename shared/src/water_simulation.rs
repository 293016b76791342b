//! Seasonal water-loss simulation
//!
//! Monthly rainfall is the region's seasonal pattern repeated across the year
//! with integer jitter; monthly loss is a random base loss scaled by how much
//! water the irrigation method and soil let escape. All randomness comes from
//! an [`EntropySource`] supplied by the caller.

use rand::Rng;
use serde::Serialize;

use crate::error::AdvisoryResult;
use crate::models::{IrrigationMethod, Region, SoilType};
use crate::reference::ReferenceData;
use crate::types::MONTHS_PER_YEAR;

/// Rainfall jitter is drawn from `RAINFALL_NOISE_MIN..RAINFALL_NOISE_MAX`
pub const RAINFALL_NOISE_MIN: i32 = -10;
pub const RAINFALL_NOISE_MAX: i32 = 10;

/// Base monthly loss is drawn from `BASE_LOSS_MIN..BASE_LOSS_MAX` (mm)
pub const BASE_LOSS_MIN: f64 = 10.0;
pub const BASE_LOSS_MAX: f64 = 30.0;

/// Source of the random draws made by the simulator
pub trait EntropySource {
    /// Integer rainfall jitter in `RAINFALL_NOISE_MIN..RAINFALL_NOISE_MAX`
    fn rainfall_noise(&mut self) -> i32;

    /// Base monthly loss in `BASE_LOSS_MIN..BASE_LOSS_MAX`
    fn base_loss(&mut self) -> f64;
}

/// Adapts any `rand` generator into an entropy source
#[derive(Debug, Clone)]
pub struct RngEntropy<R>(pub R);

impl<R: Rng> EntropySource for RngEntropy<R> {
    fn rainfall_noise(&mut self) -> i32 {
        self.0.gen_range(RAINFALL_NOISE_MIN..RAINFALL_NOISE_MAX)
    }

    fn base_loss(&mut self) -> f64 {
        self.0.gen_range(BASE_LOSS_MIN..BASE_LOSS_MAX)
    }
}

/// Raw simulation parameters as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInputs {
    pub irrigation_method: String,
    pub soil_type: String,
    pub region: String,
}

/// Twelve months of simulated rainfall and water loss for a region
#[derive(Debug, Clone, Serialize)]
pub struct WaterSimulation {
    pub region: Region,
    pub irrigation_method: IrrigationMethod,
    pub soil_type: SoilType,
    pub irrigation_efficiency: f64,
    pub soil_infiltration: f64,
    pub monthly_rainfall_mm: [i32; MONTHS_PER_YEAR],
    pub monthly_loss_mm: [f64; MONTHS_PER_YEAR],
}

impl WaterSimulation {
    pub fn mean_rainfall(&self) -> f64 {
        self.monthly_rainfall_mm.iter().map(|&r| r as f64).sum::<f64>() / MONTHS_PER_YEAR as f64
    }

    pub fn mean_loss(&self) -> f64 {
        self.monthly_loss_mm.iter().sum::<f64>() / MONTHS_PER_YEAR as f64
    }

    /// Fraction of each base loss that is actually lost
    pub fn loss_factor(&self) -> f64 {
        loss_factor(self.irrigation_efficiency, self.soil_infiltration)
    }

    /// File name the chart for this simulation is stored under
    pub fn chart_file_name(&self) -> String {
        chart_file_name(self.region)
    }
}

pub fn loss_factor(irrigation_efficiency: f64, soil_infiltration: f64) -> f64 {
    (1.0 - irrigation_efficiency) * (1.0 - soil_infiltration)
}

pub fn chart_file_name(region: Region) -> String {
    format!("{}_water_simulation_enhanced.png", region.as_str())
}

/// Water-loss simulator over the regional table
pub struct WaterSimulator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> WaterSimulator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn simulate<E: EntropySource + ?Sized>(
        &self,
        inputs: &SimulationInputs,
        entropy: &mut E,
    ) -> AdvisoryResult<WaterSimulation> {
        let record = self.reference.region(&inputs.region)?;
        let irrigation_method = IrrigationMethod::from_input(&inputs.irrigation_method);
        let soil_type = SoilType::from_input(&inputs.soil_type);
        let irrigation_efficiency = irrigation_method.efficiency();
        let soil_infiltration = soil_type.infiltration();

        let seasonal = &record.seasonal_rainfall_mm;
        let mut monthly_rainfall_mm = [0; MONTHS_PER_YEAR];
        for (month, rainfall) in monthly_rainfall_mm.iter_mut().enumerate() {
            *rainfall = seasonal[month % seasonal.len()] + entropy.rainfall_noise();
        }

        let factor = loss_factor(irrigation_efficiency, soil_infiltration);
        let mut monthly_loss_mm = [0.0; MONTHS_PER_YEAR];
        for loss in monthly_loss_mm.iter_mut() {
            *loss = entropy.base_loss() * factor;
        }

        Ok(WaterSimulation {
            region: record.region,
            irrigation_method,
            soil_type,
            irrigation_efficiency,
            soil_infiltration,
            monthly_rainfall_mm,
            monthly_loss_mm,
        })
    }
}

/// Fixed advice shown with every simulation
pub const WATER_SUGGESTIONS: [&str; 3] = [
    "Consider scheduling irrigation during periods with low evaporation.",
    "Upgrade to smart irrigation systems for real-time adjustments.",
    "Use weather forecast data to further fine-tune irrigation schedules.",
];

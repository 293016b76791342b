//! Form validation for the advisory features
//!
//! Each feature form arrives as optional strings. A form is accepted only
//! when every required field is present and non-empty, and numeric fields
//! parse; otherwise the user gets the feature's validation message and no
//! computation runs.

use serde::Deserialize;
use validator::Validate;

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::water_simulation::SimulationInputs;
use crate::yield_estimator::YieldInputs;

pub const CROP_FIELDS_REQUIRED: &str = "All fields are required for Crop Efficiency Planner.";
pub const NUMERIC_FIELDS_INVALID: &str =
    "Invalid input types. Please ensure numeric fields are correctly filled.";
pub const WATER_FIELDS_REQUIRED: &str = "All fields are required for Water Management Tool.";
pub const REGION_REQUIRED: &str = "Region selection is required for Localized Water Data.";

// ============================================================================
// Feature Forms
// ============================================================================

/// Crop Efficiency Planner form fields
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CropPlannerForm {
    #[validate(required, length(min = 1))]
    pub crop_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub soil_quality: Option<String>,
    #[validate(required, length(min = 1))]
    pub farm_size: Option<String>,
    #[validate(required, length(min = 1))]
    pub fertilizer_level: Option<String>,
    #[validate(required, length(min = 1))]
    pub irrigation_eff: Option<String>,
}

impl CropPlannerForm {
    pub fn into_inputs(self) -> AdvisoryResult<YieldInputs> {
        self.validate()
            .map_err(|_| AdvisoryError::InvalidInput(CROP_FIELDS_REQUIRED.to_string()))?;

        let (
            Some(crop),
            Some(soil_quality),
            Some(farm_size),
            Some(fertilizer_level),
            Some(irrigation_eff),
        ) = (
            self.crop_type,
            self.soil_quality,
            self.farm_size,
            self.fertilizer_level,
            self.irrigation_eff,
        )
        else {
            return Err(AdvisoryError::InvalidInput(CROP_FIELDS_REQUIRED.to_string()));
        };

        let invalid = || AdvisoryError::InvalidInput(NUMERIC_FIELDS_INVALID.to_string());
        Ok(YieldInputs {
            crop,
            soil_quality: parse_int(&soil_quality).ok_or_else(invalid)?,
            farm_size: parse_float(&farm_size).ok_or_else(invalid)?,
            fertilizer_level: parse_float(&fertilizer_level).ok_or_else(invalid)?,
            irrigation_efficiency: parse_float(&irrigation_eff).ok_or_else(invalid)?,
        })
    }
}

/// Water Management Tool form fields
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WaterManagementForm {
    #[validate(required, length(min = 1))]
    pub irrigation_method: Option<String>,
    #[validate(required, length(min = 1))]
    pub soil_type: Option<String>,
    #[validate(required, length(min = 1))]
    pub region: Option<String>,
}

impl WaterManagementForm {
    pub fn into_inputs(self) -> AdvisoryResult<SimulationInputs> {
        let required = || AdvisoryError::InvalidInput(WATER_FIELDS_REQUIRED.to_string());
        self.validate().map_err(|_| required())?;

        match (self.irrigation_method, self.soil_type, self.region) {
            (Some(irrigation_method), Some(soil_type), Some(region)) => Ok(SimulationInputs {
                irrigation_method,
                soil_type,
                region,
            }),
            _ => Err(required()),
        }
    }
}

/// Localized Water Data form fields
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LocalizedDataForm {
    #[validate(required, length(min = 1))]
    pub localized_region: Option<String>,
}

impl LocalizedDataForm {
    /// The selected region name
    pub fn into_region(self) -> AdvisoryResult<String> {
        let required = || AdvisoryError::InvalidInput(REGION_REQUIRED.to_string());
        self.validate().map_err(|_| required())?;
        self.localized_region.ok_or_else(required)
    }
}

// ============================================================================
// Numeric Parsing
// ============================================================================

/// Parse an integer field, ignoring surrounding whitespace
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Parse a finite float field, ignoring surrounding whitespace
pub fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

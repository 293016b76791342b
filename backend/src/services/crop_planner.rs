//! Crop Efficiency Planner service

use askama::Template;
use shared::yield_estimator::{YieldEstimator, YieldInputs};
use shared::{Feature, ReferenceData};

use super::FeatureOutput;
use crate::error::AppResult;
use crate::views::{self, CropPlannerPanel};

pub struct CropPlannerService<'a> {
    reference: &'a ReferenceData,
}

impl<'a> CropPlannerService<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn run(&self, inputs: &YieldInputs) -> AppResult<FeatureOutput> {
        let html = match YieldEstimator::new(self.reference).estimate(inputs) {
            Ok(prediction) => {
                tracing::info!(
                    crop = %prediction.crop,
                    predicted_yield = prediction.predicted_yield,
                    rmse = prediction.rmse,
                    "Yield estimated"
                );
                CropPlannerPanel::from(&prediction).render()?
            }
            Err(err) => views::feature_error(Feature::CropEfficiency, &err)?,
        };
        Ok(FeatureOutput::panel(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(crop: &str) -> YieldInputs {
        YieldInputs {
            crop: crop.to_string(),
            soil_quality: 5,
            farm_size: 12.0,
            fertilizer_level: 0.0,
            irrigation_efficiency: 1.0,
        }
    }

    #[test]
    fn test_renders_prediction() {
        let data = ReferenceData::builtin();
        let output = CropPlannerService::new(&data).run(&inputs("wheat")).unwrap();

        assert!(output.html.contains("12.00 acres of Wheat"));
        assert!(output.html.contains("Predicted Yield:</strong> 307.00 units"));
        assert!(output.html.contains("95% Confidence Interval:"));
        assert_eq!(output.visualization_url, None);
    }

    #[test]
    fn test_unknown_crop_renders_error_panel() {
        let data = ReferenceData::builtin();
        let output = CropPlannerService::new(&data).run(&inputs("barley")).unwrap();

        assert!(output.html.contains("panel-error"));
        assert!(output
            .html
            .contains("not found! Available: wheat, corn, soy, rice"));
        assert!(!output.html.contains("Predicted Yield"));
    }
}

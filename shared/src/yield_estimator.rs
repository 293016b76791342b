//! Crop yield estimation
//!
//! Fits a linear model of yield on (water use, fertilizer, soil feature) to a
//! crop's historical observations and evaluates it at the historical means,
//! adjusted for the grower's irrigation efficiency and fertilizer plan.

use serde::Serialize;

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::models::Crop;
use crate::reference::ReferenceData;
use crate::regression::LinearModel;

/// Soil quality is scaled by this factor before entering the model
pub const SOIL_FEATURE_SCALE: f64 = 0.1;

/// Water-use reduction per unit of irrigation inefficiency
pub const IRRIGATION_WATER_FACTOR: f64 = 0.02;

/// Two-sided 95% normal quantile used for the interval
pub const INTERVAL_Z: f64 = 1.96;

/// Validated inputs for a yield estimate
#[derive(Debug, Clone, PartialEq)]
pub struct YieldInputs {
    pub crop: String,
    pub soil_quality: i64,
    /// Farm size in acres; reported back but not part of the model
    pub farm_size: f64,
    pub fertilizer_level: f64,
    /// Expected in [0, 1]
    pub irrigation_efficiency: f64,
}

/// A yield estimate with its residual-based interval
#[derive(Debug, Clone, Serialize)]
pub struct YieldPrediction {
    pub crop: Crop,
    pub farm_size: f64,
    pub predicted_yield: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub rmse: f64,
    /// Feature vector the model was evaluated at
    pub evaluation: [f64; 3],
    pub model: LinearModel<3>,
}

/// Yield estimator over the historical crop table
pub struct YieldEstimator<'a> {
    reference: &'a ReferenceData,
}

impl<'a> YieldEstimator<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn estimate(&self, inputs: &YieldInputs) -> AdvisoryResult<YieldPrediction> {
        let record = self.reference.crop(&inputs.crop)?;
        let soil_feature = soil_feature(inputs.soil_quality);

        let features: Vec<[f64; 3]> = record
            .observations
            .iter()
            .map(|o| [o.water_use, o.fertilizer, soil_feature])
            .collect();
        let targets = record.yields();

        let model = LinearModel::fit(&features, &targets)?;

        let evaluation = [
            adjusted_water_use(record.mean_water_use(), inputs.irrigation_efficiency),
            record.mean_fertilizer() + inputs.fertilizer_level,
            soil_feature,
        ];
        let predicted_yield = model.predict(&evaluation);
        let rmse = model.rmse(&features, &targets);
        let margin = INTERVAL_Z * rmse;
        let lower_bound = predicted_yield - margin;
        let upper_bound = predicted_yield + margin;

        if ![predicted_yield, rmse, lower_bound, upper_bound]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(AdvisoryError::ComputationFailure(format!(
                "yield prediction for {} is not a finite number",
                record.crop
            )));
        }

        Ok(YieldPrediction {
            crop: record.crop,
            farm_size: inputs.farm_size,
            predicted_yield,
            lower_bound,
            upper_bound,
            rmse,
            evaluation,
            model,
        })
    }
}

pub fn soil_feature(soil_quality: i64) -> f64 {
    soil_quality as f64 * SOIL_FEATURE_SCALE
}

/// Average water use scaled down for irrigation inefficiency
pub fn adjusted_water_use(mean_water_use: f64, irrigation_efficiency: f64) -> f64 {
    mean_water_use * (1.0 - (1.0 - irrigation_efficiency) * IRRIGATION_WATER_FACTOR)
}

/// Fixed agronomy recommendations shown with every estimate
pub const CROP_RECOMMENDATIONS: [&str; 3] = [
    "Adjust fertilizer input as per soil nutrient testing.",
    "Consider micro-irrigation to boost water efficiency.",
    "Regularly update historical data for better predictions.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn inputs(crop: &str) -> YieldInputs {
        YieldInputs {
            crop: crop.to_string(),
            soil_quality: 5,
            farm_size: 10.0,
            fertilizer_level: 0.0,
            irrigation_efficiency: 1.0,
        }
    }

    #[test]
    fn test_full_efficiency_keeps_mean_water_use() {
        let data = ReferenceData::builtin();
        let prediction = YieldEstimator::new(&data).estimate(&inputs("wheat")).unwrap();

        assert_eq!(prediction.evaluation[0], 398.0);
        assert_eq!(prediction.evaluation[1], 52.0);
        assert_eq!(prediction.evaluation[2], 0.5);
    }

    #[test]
    fn test_estimate_at_historical_means_is_mean_yield() {
        let data = ReferenceData::builtin();
        let prediction = YieldEstimator::new(&data).estimate(&inputs("wheat")).unwrap();

        assert_relative_eq!(prediction.predicted_yield, 307.0, epsilon = 1e-9);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let data = ReferenceData::builtin();
        let estimator = YieldEstimator::new(&data);
        let first = estimator.estimate(&inputs("wheat")).unwrap();
        let second = estimator.estimate(&inputs("wheat")).unwrap();

        assert_eq!(first.predicted_yield, second.predicted_yield);
        assert_eq!(first.lower_bound, second.lower_bound);
        assert_eq!(first.upper_bound, second.upper_bound);
    }

    #[test]
    fn test_crop_name_is_case_insensitive() {
        let data = ReferenceData::builtin();
        let prediction = YieldEstimator::new(&data).estimate(&inputs("Corn")).unwrap();
        assert_eq!(prediction.crop, Crop::Corn);
    }

    #[test]
    fn test_unknown_crop() {
        let data = ReferenceData::builtin();
        let err = YieldEstimator::new(&data).estimate(&inputs("barley")).unwrap_err();
        assert!(matches!(err, AdvisoryError::UnknownCrop { ref name, .. } if name == "barley"));
    }

    #[test]
    fn test_soil_quality_does_not_move_prediction() {
        let data = ReferenceData::builtin();
        let estimator = YieldEstimator::new(&data);
        let mut poor = inputs("rice");
        poor.soil_quality = 1;
        let mut rich = inputs("rice");
        rich.soil_quality = 9;

        let poor = estimator.estimate(&poor).unwrap();
        let rich = estimator.estimate(&rich).unwrap();
        assert_relative_eq!(poor.predicted_yield, rich.predicted_yield, epsilon = 1e-9);
        assert_eq!(rich.model.weights[2], 0.0);
    }

    #[test]
    fn test_interval_width_is_residual_based() {
        let data = ReferenceData::builtin();
        let prediction = YieldEstimator::new(&data).estimate(&inputs("soy")).unwrap();
        let width = prediction.upper_bound - prediction.lower_bound;
        assert_relative_eq!(width, 2.0 * INTERVAL_Z * prediction.rmse, epsilon = 1e-9);
    }

    #[test]
    fn test_adjusted_water_use() {
        assert_eq!(adjusted_water_use(400.0, 1.0), 400.0);
        assert_relative_eq!(adjusted_water_use(400.0, 0.5), 396.0, epsilon = 1e-9);
        assert_relative_eq!(adjusted_water_use(400.0, 0.0), 392.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_evaluation_is_computation_failure() {
        let data = ReferenceData::builtin();
        let estimator = YieldEstimator::new(&data);

        let mut nan_efficiency = inputs("wheat");
        nan_efficiency.irrigation_efficiency = f64::NAN;
        assert!(matches!(
            estimator.estimate(&nan_efficiency),
            Err(AdvisoryError::ComputationFailure(_))
        ));

        let mut infinite_fertilizer = inputs("corn");
        infinite_fertilizer.fertilizer_level = f64::INFINITY;
        assert!(matches!(
            estimator.estimate(&infinite_fertilizer),
            Err(AdvisoryError::ComputationFailure(_))
        ));
    }

    proptest! {
        /// Extreme magnitudes either give a finite ordered interval or fail
        /// as a computation error, never a non-finite prediction
        #[test]
        fn prop_extreme_inputs_never_yield_non_finite(
            crop_index in 0usize..4,
            fertilizer_level in prop_oneof![
                -1e308f64..1e308,
                Just(f64::MAX),
                Just(f64::MIN),
            ],
            irrigation_efficiency in -1e308f64..1e308,
        ) {
            let data = ReferenceData::builtin();
            let result = YieldEstimator::new(&data).estimate(&YieldInputs {
                crop: Crop::ALL[crop_index].to_string(),
                soil_quality: 5,
                farm_size: 1.0,
                fertilizer_level,
                irrigation_efficiency,
            });
            match result {
                Ok(prediction) => {
                    prop_assert!(prediction.predicted_yield.is_finite());
                    prop_assert!(prediction.lower_bound <= prediction.predicted_yield);
                    prop_assert!(prediction.predicted_yield <= prediction.upper_bound);
                }
                Err(err) => {
                    let is_failure = matches!(err, AdvisoryError::ComputationFailure(_));
                    prop_assert!(is_failure);
                }
            }
        }

        #[test]
        fn prop_known_crops_give_ordered_interval(
            crop_index in 0usize..4,
            soil_quality in -20i64..20,
            fertilizer_level in -50.0f64..50.0,
            irrigation_efficiency in 0.0f64..=1.0,
        ) {
            let data = ReferenceData::builtin();
            let crop = Crop::ALL[crop_index];
            let prediction = YieldEstimator::new(&data)
                .estimate(&YieldInputs {
                    crop: crop.to_string(),
                    soil_quality,
                    farm_size: 1.0,
                    fertilizer_level,
                    irrigation_efficiency,
                })
                .unwrap();

            prop_assert!(prediction.predicted_yield.is_finite());
            prop_assert!(prediction.lower_bound <= prediction.predicted_yield);
            prop_assert!(prediction.predicted_yield <= prediction.upper_bound);
        }

        #[test]
        fn prop_unknown_crops_fail(name in "[a-z]{1,12}") {
            prop_assume!(name.parse::<Crop>().is_err());
            let data = ReferenceData::builtin();
            let result = YieldEstimator::new(&data).estimate(&inputs(&name));
            let is_unknown_crop = matches!(result, Err(AdvisoryError::UnknownCrop { .. }));
            prop_assert!(is_unknown_crop);
        }
    }
}

//! Advisory page handlers
//!
//! `GET /` renders the empty page. `POST /` dispatches the submitted form to
//! exactly one feature service and renders its panel into the same page.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use shared::validation::{CropPlannerForm, LocalizedDataForm, WaterManagementForm};
use shared::water_simulation::RngEntropy;
use shared::{AdvisoryError, Feature};

use crate::error::AppResult;
use crate::services::{
    CropPlannerService, EcoTipsService, FeatureOutput, RegionalDataService,
    WaterManagementService,
};
use crate::views::IndexTemplate;
use crate::AppState;

/// Every field the advisory page can submit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureForm {
    pub feature: Option<String>,
    pub crop_type: Option<String>,
    pub soil_quality: Option<String>,
    pub farm_size: Option<String>,
    pub fertilizer_level: Option<String>,
    pub irrigation_eff: Option<String>,
    pub irrigation_method: Option<String>,
    pub soil_type: Option<String>,
    pub region: Option<String>,
    pub localized_region: Option<String>,
}

impl FeatureForm {
    pub fn crop_planner(&self) -> CropPlannerForm {
        CropPlannerForm {
            crop_type: self.crop_type.clone(),
            soil_quality: self.soil_quality.clone(),
            farm_size: self.farm_size.clone(),
            fertilizer_level: self.fertilizer_level.clone(),
            irrigation_eff: self.irrigation_eff.clone(),
        }
    }

    pub fn water_management(&self) -> WaterManagementForm {
        WaterManagementForm {
            irrigation_method: self.irrigation_method.clone(),
            soil_type: self.soil_type.clone(),
            region: self.region.clone(),
        }
    }

    pub fn localized_data(&self) -> LocalizedDataForm {
        LocalizedDataForm {
            localized_region: self.localized_region.clone(),
        }
    }

    pub fn selected_feature(&self) -> Option<Feature> {
        self.feature.as_deref().and_then(Feature::from_selector)
    }
}

/// What a submission resolved to before rendering
enum Outcome {
    Output(FeatureOutput),
    Rejected(String),
    Empty,
}

/// Render the empty advisory page
pub async fn show_index(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_page(&state, Outcome::Empty)
}

/// Run the submitted feature and render its result
pub async fn submit_feature(
    State(state): State<AppState>,
    Form(form): Form<FeatureForm>,
) -> AppResult<Response> {
    let Some(feature) = form.selected_feature() else {
        tracing::debug!(feature = ?form.feature, "No feature selected");
        return Ok(render_page(&state, Outcome::Empty)?.into_response());
    };
    tracing::info!(feature = feature.selector(), "Dispatching {}", feature);

    let outcome = match feature {
        Feature::CropEfficiency => match form.crop_planner().into_inputs() {
            Ok(inputs) => Outcome::Output(CropPlannerService::new(&state.reference).run(&inputs)?),
            Err(err) => rejected(feature, err),
        },
        Feature::WaterManagement => match form.water_management().into_inputs() {
            Ok(inputs) => {
                let reference = state.reference.clone();
                let config = state.config.clone();
                let output = tokio::task::spawn_blocking(move || {
                    let mut entropy = RngEntropy(rand::thread_rng());
                    WaterManagementService::new(&reference, &config.assets)
                        .run(&inputs, &mut entropy)
                })
                .await??;
                Outcome::Output(output)
            }
            Err(err) => rejected(feature, err),
        },
        Feature::LocalizedWaterData => match form.localized_data().into_region() {
            Ok(region) => Outcome::Output(RegionalDataService::new(&state.reference).run(&region)?),
            Err(err) => rejected(feature, err),
        },
        Feature::EcoTips => Outcome::Output(EcoTipsService.run()?),
        Feature::Exit => return Ok(Redirect::to("/").into_response()),
    };

    Ok(render_page(&state, outcome)?.into_response())
}

fn rejected(feature: Feature, err: AdvisoryError) -> Outcome {
    tracing::warn!(feature = feature.selector(), "Validation failed: {}", err);
    Outcome::Rejected(err.user_message())
}

fn render_page(state: &AppState, outcome: Outcome) -> AppResult<Html<String>> {
    let (output, error) = match outcome {
        Outcome::Output(output) => (Some(output), None),
        Outcome::Rejected(message) => (None, Some(message)),
        Outcome::Empty => (None, None),
    };
    let (output, visualization_url) = match output {
        Some(FeatureOutput {
            html,
            visualization_url,
        }) => (Some(html), visualization_url),
        None => (None, None),
    };

    let page = IndexTemplate {
        static_prefix: state.config.assets.url_prefix.trim_end_matches('/').to_string(),
        crops: state.reference.crop_names(),
        regions: state.reference.region_names(),
        output,
        visualization_url,
        error,
    };
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_form_splits_by_feature() {
        let form = FeatureForm {
            feature: Some("2".to_string()),
            irrigation_method: Some("drip".to_string()),
            soil_type: Some("clay".to_string()),
            region: Some("east".to_string()),
            localized_region: Some("west".to_string()),
            ..Default::default()
        };

        assert_eq!(form.selected_feature(), Some(Feature::WaterManagement));
        let inputs = form.water_management().into_inputs().unwrap();
        assert_eq!(inputs.region, "east");
        assert_eq!(form.localized_data().into_region().unwrap(), "west");
        assert!(form.crop_planner().into_inputs().is_err());
    }

    #[test]
    fn test_unknown_selector_selects_nothing() {
        let form = FeatureForm {
            feature: Some("9".to_string()),
            ..Default::default()
        };
        assert_eq!(form.selected_feature(), None);
        assert_eq!(FeatureForm::default().selected_feature(), None);
    }
}

//! Askama views for the advisory page and its feature panels

use askama::Template;
use shared::regional::{RegionalReport, SeasonalRainfall};
use shared::water_simulation::{WaterSimulation, WATER_SUGGESTIONS};
use shared::yield_estimator::{YieldPrediction, CROP_RECOMMENDATIONS};
use shared::{capitalize, AdvisoryError, Feature, TipGroup};

// ============================================================================
// Page
// ============================================================================

/// The single advisory page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub static_prefix: String,
    pub crops: Vec<&'static str>,
    pub regions: Vec<&'static str>,
    /// Rendered feature panel
    pub output: Option<String>,
    pub visualization_url: Option<String>,
    /// Validation message for the submitted form
    pub error: Option<String>,
}

// ============================================================================
// Feature Panels
// ============================================================================

#[derive(Template)]
#[template(path = "panels/crop_planner.html")]
pub struct CropPlannerPanel {
    pub title: &'static str,
    pub crop_name: String,
    pub farm_size: f64,
    pub predicted_yield: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub recommendations: &'static [&'static str],
}

impl From<&YieldPrediction> for CropPlannerPanel {
    fn from(prediction: &YieldPrediction) -> Self {
        Self {
            title: Feature::CropEfficiency.title(),
            crop_name: capitalize(prediction.crop.as_str()),
            farm_size: prediction.farm_size,
            predicted_yield: prediction.predicted_yield,
            lower_bound: prediction.lower_bound,
            upper_bound: prediction.upper_bound,
            recommendations: &CROP_RECOMMENDATIONS,
        }
    }
}

#[derive(Template)]
#[template(path = "panels/water_management.html")]
pub struct WaterManagementPanel {
    pub title: &'static str,
    pub region_name: String,
    pub mean_rainfall: f64,
    pub mean_loss: f64,
    pub saved_path: String,
    pub suggestions: &'static [&'static str],
}

impl WaterManagementPanel {
    pub fn new(simulation: &WaterSimulation, saved_path: String) -> Self {
        Self {
            title: Feature::WaterManagement.title(),
            region_name: capitalize(simulation.region.as_str()),
            mean_rainfall: simulation.mean_rainfall(),
            mean_loss: simulation.mean_loss(),
            saved_path,
            suggestions: &WATER_SUGGESTIONS,
        }
    }
}

#[derive(Template)]
#[template(path = "panels/regional_data.html")]
pub struct RegionalDataPanel {
    pub title: &'static str,
    pub region_name: String,
    pub annual_rainfall_mm: u32,
    pub climate_name: String,
    pub avg_temp_celsius: i32,
    pub seasons: Vec<SeasonalRainfall>,
    pub recommendations: &'static [&'static str],
}

impl From<RegionalReport> for RegionalDataPanel {
    fn from(report: RegionalReport) -> Self {
        Self {
            title: Feature::LocalizedWaterData.title(),
            region_name: capitalize(report.region.as_str()),
            annual_rainfall_mm: report.annual_rainfall_mm,
            climate_name: capitalize(report.climate.as_str()),
            avg_temp_celsius: report.avg_temp_celsius,
            seasons: report.seasons,
            recommendations: report.recommendations,
        }
    }
}

#[derive(Template)]
#[template(path = "panels/eco_tips.html")]
pub struct EcoTipsPanel {
    pub title: &'static str,
    pub groups: Vec<TipGroup>,
}

#[derive(Template)]
#[template(path = "panels/feature_error.html")]
pub struct FeatureErrorPanel {
    pub title: &'static str,
    pub code: &'static str,
    pub message: String,
}

/// Render a failed feature as its panel, logging by severity
pub fn feature_error(feature: Feature, err: &AdvisoryError) -> askama::Result<String> {
    if err.is_user_error() {
        tracing::warn!(code = err.code(), "{} rejected: {}", feature, err);
    } else {
        tracing::error!(code = err.code(), "{} failed: {}", feature, err);
    }

    FeatureErrorPanel {
        title: feature.title(),
        code: err.code(),
        message: err.user_message(),
    }
    .render()
}

//! Feature services for the Agricultural Advisory Platform
//!
//! Each service runs one advisory feature and renders its result panel.
//! Advisory failures become error panels; only rendering failures escape as
//! `AppError`.

pub mod crop_planner;
pub mod eco_tips;
pub mod regional_data;
pub mod water_management;

pub use crop_planner::CropPlannerService;
pub use eco_tips::EcoTipsService;
pub use regional_data::RegionalDataService;
pub use water_management::WaterManagementService;

/// Rendered result of one feature request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureOutput {
    /// Panel HTML, already escaped
    pub html: String,
    /// Chart produced by the request, if any
    pub visualization_url: Option<String>,
}

impl FeatureOutput {
    pub fn panel(html: String) -> Self {
        Self {
            html,
            visualization_url: None,
        }
    }
}

//! Eco-Tips section

use askama::Template;
use shared::tips::grouped_tips;
use shared::Feature;

use super::FeatureOutput;
use crate::error::AppResult;
use crate::views::EcoTipsPanel;

#[derive(Debug, Default, Clone, Copy)]
pub struct EcoTipsService;

impl EcoTipsService {
    pub fn run(&self) -> AppResult<FeatureOutput> {
        let html = EcoTipsPanel {
            title: Feature::EcoTips.title(),
            groups: grouped_tips(),
        }
        .render()?;
        Ok(FeatureOutput::panel(html))
    }
}

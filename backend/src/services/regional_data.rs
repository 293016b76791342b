//! Localized Water Data service

use askama::Template;
use shared::{regional, Feature, ReferenceData};

use super::FeatureOutput;
use crate::error::AppResult;
use crate::views::{self, RegionalDataPanel};

pub struct RegionalDataService<'a> {
    reference: &'a ReferenceData,
}

impl<'a> RegionalDataService<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    pub fn run(&self, region: &str) -> AppResult<FeatureOutput> {
        let html = match regional::lookup(self.reference, region) {
            Ok(report) => {
                tracing::debug!(region = %report.region, climate = report.climate.as_str(), "Regional data lookup");
                RegionalDataPanel::from(report).render()?
            }
            Err(err) => views::feature_error(Feature::LocalizedWaterData, &err)?,
        };
        Ok(FeatureOutput::panel(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arid_region_recommendations() {
        let data = ReferenceData::builtin();
        let output = RegionalDataService::new(&data).run("South").unwrap();

        assert!(output.html.contains("Region:</strong> South"));
        assert!(output.html.contains("Climate:</strong> Arid"));
        assert!(output.html.contains("Implement rainwater harvesting techniques."));
        assert_eq!(output.visualization_url, None);
    }

    #[test]
    fn test_unknown_region() {
        let data = ReferenceData::builtin();
        let output = RegionalDataService::new(&data).run("central").unwrap();

        assert!(output.html.contains("panel-error"));
        assert!(output.html.contains("Error: Region &#x27;central&#x27; not found!"));
    }
}

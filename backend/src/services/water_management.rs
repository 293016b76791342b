//! Water Management Tool service
//!
//! Runs the water-loss simulation, writes its chart into the visuals
//! directory and renders the summary panel. Nothing is written when the
//! simulation itself fails.

use askama::Template;
use shared::water_simulation::{EntropySource, SimulationInputs, WaterSimulation, WaterSimulator};
use shared::{Feature, ReferenceData};
use std::path::PathBuf;

use super::FeatureOutput;
use crate::charts;
use crate::config::AssetsConfig;
use crate::error::AppResult;
use crate::views::{self, WaterManagementPanel};

pub struct WaterManagementService<'a> {
    reference: &'a ReferenceData,
    assets: &'a AssetsConfig,
}

impl<'a> WaterManagementService<'a> {
    pub fn new(reference: &'a ReferenceData, assets: &'a AssetsConfig) -> Self {
        Self { reference, assets }
    }

    pub fn run<E: EntropySource + ?Sized>(
        &self,
        inputs: &SimulationInputs,
        entropy: &mut E,
    ) -> AppResult<FeatureOutput> {
        match self.simulate_and_chart(inputs, entropy) {
            Ok((simulation, chart_path)) => {
                tracing::info!(
                    region = %simulation.region,
                    mean_rainfall = simulation.mean_rainfall(),
                    mean_loss = simulation.mean_loss(),
                    chart = %chart_path.display(),
                    "Water simulation complete"
                );
                let html =
                    WaterManagementPanel::new(&simulation, chart_path.display().to_string())
                        .render()?;
                Ok(FeatureOutput {
                    html,
                    visualization_url: Some(self.assets.visual_url(&simulation.chart_file_name())),
                })
            }
            Err(err) => {
                let html = views::feature_error(Feature::WaterManagement, &err.into_advisory())?;
                Ok(FeatureOutput::panel(html))
            }
        }
    }

    fn simulate_and_chart<E: EntropySource + ?Sized>(
        &self,
        inputs: &SimulationInputs,
        entropy: &mut E,
    ) -> AppResult<(WaterSimulation, PathBuf)> {
        let simulation = WaterSimulator::new(self.reference).simulate(inputs, entropy)?;

        let visuals_dir = self.assets.visuals_dir();
        std::fs::create_dir_all(&visuals_dir)?;
        let chart_path = visuals_dir.join(simulation.chart_file_name());

        let image = charts::render_water_chart(&simulation);
        charts::write_png_atomic(&image, &chart_path)?;

        Ok((simulation, chart_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::water_simulation::RngEntropy;

    struct Constant;

    impl EntropySource for Constant {
        fn rainfall_noise(&mut self) -> i32 {
            0
        }

        fn base_loss(&mut self) -> f64 {
            20.0
        }
    }

    fn assets(dir: &std::path::Path) -> AssetsConfig {
        AssetsConfig {
            static_dir: dir.to_path_buf(),
            visuals_subdir: "visuals".to_string(),
            url_prefix: "/static".to_string(),
        }
    }

    fn inputs(region: &str) -> SimulationInputs {
        SimulationInputs {
            irrigation_method: "drip".to_string(),
            soil_type: "loam".to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_writes_chart_and_reports_means() {
        let dir = tempfile::tempdir().unwrap();
        let assets = assets(dir.path());
        let data = ReferenceData::builtin();

        let output = WaterManagementService::new(&data, &assets)
            .run(&inputs("North"), &mut Constant)
            .unwrap();

        assert_eq!(
            output.visualization_url.as_deref(),
            Some("/static/visuals/north_water_simulation_enhanced.png")
        );
        assert!(dir
            .path()
            .join("visuals/north_water_simulation_enhanced.png")
            .exists());
        assert!(output.html.contains("Average Monthly Rainfall:</strong> 250.00 mm"));
        assert!(output.html.contains("Average Simulated Water Loss:</strong> 0.10 mm"));
        assert!(output.html.contains("Seasonal Water Usage Simulation - North Region"));
    }

    #[test]
    fn test_unknown_region_writes_no_chart() {
        let dir = tempfile::tempdir().unwrap();
        let assets = assets(dir.path());
        let data = ReferenceData::builtin();

        let output = WaterManagementService::new(&data, &assets)
            .run(&inputs("atlantis"), &mut RngEntropy(rand::thread_rng()))
            .unwrap();

        assert_eq!(output.visualization_url, None);
        assert!(output.html.contains("Error: Region &#x27;atlantis&#x27; not found!"));
        assert!(!dir.path().join("visuals").exists());
    }

    #[test]
    fn test_unwritable_visuals_dir_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the visuals directory should be
        std::fs::write(dir.path().join("visuals"), b"not a directory").unwrap();
        let assets = assets(dir.path());
        let data = ReferenceData::builtin();

        let output = WaterManagementService::new(&data, &assets)
            .run(&inputs("south"), &mut Constant)
            .unwrap();

        assert_eq!(output.visualization_url, None);
        assert!(output.html.contains("An error occurred: IO error"));
    }
}

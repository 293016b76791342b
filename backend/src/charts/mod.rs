//! PNG charts for the water management tool
//!
//! The chart overlays monthly rainfall (blue, round markers) and simulated
//! water loss (red, square markers) on a light grid. Titles and axis labels
//! are rendered by the page around the image.

mod canvas;

use image::{ImageFormat, Rgb, RgbImage};
use shared::water_simulation::WaterSimulation;
use std::path::{Path, PathBuf};

pub use canvas::{Canvas, Point};

use crate::error::AppResult;

pub const CHART_WIDTH: u32 = 1500;
pub const CHART_HEIGHT: u32 = 900;

const MARGIN_LEFT: i64 = 110;
const MARGIN_RIGHT: i64 = 50;
const MARGIN_TOP: i64 = 80;
const MARGIN_BOTTOM: i64 = 90;
const HORIZONTAL_GRID_LINES: i64 = 6;

pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
pub const GRID: Rgb<u8> = Rgb([221, 221, 221]);
pub const AXIS: Rgb<u8> = Rgb([68, 68, 68]);
pub const RAINFALL_COLOR: Rgb<u8> = Rgb([0x34, 0x98, 0xdb]);
pub const LOSS_COLOR: Rgb<u8> = Rgb([0xe7, 0x4c, 0x3c]);

/// Maps month index and value onto pixel coordinates
#[derive(Debug, Clone, Copy)]
pub struct ChartFrame {
    pub left: i64,
    pub right: i64,
    pub top: i64,
    pub bottom: i64,
    pub months: usize,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartFrame {
    pub fn for_series(width: u32, height: u32, months: usize, values: &[f64]) -> Self {
        let highest = values.iter().copied().fold(0.0_f64, f64::max);
        let lowest = values.iter().copied().fold(0.0_f64, f64::min);
        let y_max = if highest > 0.0 { highest * 1.1 } else { 1.0 };
        Self {
            left: MARGIN_LEFT,
            right: width as i64 - MARGIN_RIGHT,
            top: MARGIN_TOP,
            bottom: height as i64 - MARGIN_BOTTOM,
            months: months.max(2),
            y_min: lowest * 1.1,
            y_max,
        }
    }

    pub fn x(&self, month_index: usize) -> i64 {
        let span = (self.right - self.left) as f64;
        self.left + (span * month_index as f64 / (self.months - 1) as f64).round() as i64
    }

    pub fn y(&self, value: f64) -> i64 {
        let span = (self.bottom - self.top) as f64;
        let fraction = (value - self.y_min) / (self.y_max - self.y_min);
        self.bottom - (span * fraction).round() as i64
    }

    pub fn point(&self, month_index: usize, value: f64) -> Point {
        (self.x(month_index), self.y(value))
    }
}

/// Rasterise the rainfall and loss series of a simulation
pub fn render_water_chart(simulation: &WaterSimulation) -> RgbImage {
    let rainfall: Vec<f64> = simulation
        .monthly_rainfall_mm
        .iter()
        .map(|&r| r as f64)
        .collect();
    let losses = simulation.monthly_loss_mm.to_vec();
    let all_values: Vec<f64> = rainfall.iter().chain(&losses).copied().collect();

    let mut canvas = Canvas::new(CHART_WIDTH, CHART_HEIGHT, BACKGROUND);
    let frame = ChartFrame::for_series(CHART_WIDTH, CHART_HEIGHT, rainfall.len(), &all_values);

    draw_grid(&mut canvas, &frame);
    draw_series(&mut canvas, &frame, &rainfall, RAINFALL_COLOR, Marker::Circle);
    draw_series(&mut canvas, &frame, &losses, LOSS_COLOR, Marker::Square);
    draw_legend(&mut canvas, &frame);

    canvas.into_image()
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Circle,
    Square,
}

impl Marker {
    fn draw(&self, canvas: &mut Canvas, at: Point, color: Rgb<u8>) {
        match self {
            Marker::Circle => canvas.circle(at, 7, color),
            Marker::Square => canvas.square(at, 6, color),
        }
    }
}

fn draw_grid(canvas: &mut Canvas, frame: &ChartFrame) {
    for month in 0..frame.months {
        let x = frame.x(month);
        canvas.line((x, frame.top), (x, frame.bottom), 1, GRID);
        canvas.line((x, frame.bottom), (x, frame.bottom + 8), 2, AXIS);
    }
    for step in 0..=HORIZONTAL_GRID_LINES {
        let y = frame.bottom - (frame.bottom - frame.top) * step / HORIZONTAL_GRID_LINES;
        canvas.line((frame.left, y), (frame.right, y), 1, GRID);
        canvas.line((frame.left - 8, y), (frame.left, y), 2, AXIS);
    }
    canvas.line((frame.left, frame.top), (frame.left, frame.bottom), 2, AXIS);
    canvas.line((frame.left, frame.bottom), (frame.right, frame.bottom), 2, AXIS);
}

fn draw_series(
    canvas: &mut Canvas,
    frame: &ChartFrame,
    values: &[f64],
    color: Rgb<u8>,
    marker: Marker,
) {
    let points: Vec<Point> = values
        .iter()
        .enumerate()
        .map(|(month, &value)| frame.point(month, value))
        .collect();
    for pair in points.windows(2) {
        canvas.line(pair[0], pair[1], 3, color);
    }
    for &point in &points {
        marker.draw(canvas, point, color);
    }
}

/// Legend swatches in the top margin, right-aligned
fn draw_legend(canvas: &mut Canvas, frame: &ChartFrame) {
    let y = frame.top / 2;
    let entries = [
        (RAINFALL_COLOR, Marker::Circle),
        (LOSS_COLOR, Marker::Square),
    ];
    for (slot, (color, marker)) in entries.into_iter().enumerate() {
        let right = frame.right - 140 * slot as i64;
        let left = right - 100;
        canvas.line((left, y), (right, y), 3, color);
        marker.draw(canvas, ((left + right) / 2, y), color);
    }
}

/// Encode a chart as PNG and move it into place.
///
/// The image is written to a uniquely named sibling first so readers only
/// ever see a complete file; concurrent writers for the same path each
/// replace it whole and the last rename wins.
pub fn write_png_atomic(image: &RgbImage, path: &Path) -> AppResult<()> {
    let staging = staging_path(path);
    let result: AppResult<()> = image
        .save_with_format(&staging, ImageFormat::Png)
        .map_err(Into::into)
        .and_then(|()| std::fs::rename(&staging, path).map_err(Into::into));

    if result.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    result
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chart.png".to_string());
    path.with_file_name(format!(".{}.{:016x}.tmp", file_name, rand::random::<u64>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{IrrigationMethod, Region, SoilType};

    fn simulation() -> WaterSimulation {
        WaterSimulation {
            region: Region::North,
            irrigation_method: IrrigationMethod::Drip,
            soil_type: SoilType::Loam,
            irrigation_efficiency: 0.95,
            soil_infiltration: 0.9,
            monthly_rainfall_mm: [201, 299, 252, 248, 203, 297, 254, 246, 205, 295, 250, 250],
            monthly_loss_mm: [0.1; 12],
        }
    }

    #[test]
    fn test_chart_dimensions() {
        let image = render_water_chart(&simulation());
        assert_eq!(image.width(), CHART_WIDTH);
        assert_eq!(image.height(), CHART_HEIGHT);
    }

    #[test]
    fn test_series_points_use_series_colors() {
        let sim = simulation();
        let image = render_water_chart(&sim);
        let values: Vec<f64> = sim
            .monthly_rainfall_mm
            .iter()
            .map(|&r| r as f64)
            .chain(sim.monthly_loss_mm)
            .collect();
        let frame = ChartFrame::for_series(CHART_WIDTH, CHART_HEIGHT, 12, &values);

        let (x, y) = frame.point(1, 299.0);
        assert_eq!(*image.get_pixel(x as u32, y as u32), RAINFALL_COLOR);
        let (x, y) = frame.point(6, 0.1);
        assert_eq!(*image.get_pixel(x as u32, y as u32), LOSS_COLOR);
    }

    #[test]
    fn test_frame_maps_extremes_inside_plot() {
        let frame = ChartFrame::for_series(CHART_WIDTH, CHART_HEIGHT, 12, &[0.0, 100.0]);
        assert_eq!(frame.x(0), frame.left);
        assert_eq!(frame.x(11), frame.right);
        assert_eq!(frame.y(0.0), frame.bottom);
        assert!(frame.y(100.0) > frame.top);
    }

    #[test]
    fn test_write_png_atomic_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("north_water_simulation_enhanced.png");
        let image = render_water_chart(&simulation());

        write_png_atomic(&image, &path).unwrap();
        write_png_atomic(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_write_png_atomic_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.png");
        let image = RgbImage::new(4, 4);
        assert!(write_png_atomic(&image, &path).is_err());
        assert!(!path.exists());
    }
}

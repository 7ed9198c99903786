// src/plot_functions/plot_stress_strain.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_STRESS_STRAIN, LINE_WIDTH_PLOT};
use crate::pipeline::AnalysisReport;
use crate::plot_framework::{
    draw_single_plot, padded_bounds, to_points, PlotConfig, PlotSeries, SeriesKind,
};

pub const STRAIN_AXIS_LABEL: &str = "Strain (mm/mm)";
pub const STRESS_AXIS_LABEL: &str = "Stress (MPa)";

/// Scatter series of the full stress-strain curve.
pub fn stress_strain_series(report: &AnalysisReport) -> PlotSeries {
    PlotSeries {
        data: to_points(report.sample.strain.view(), report.stress.view()),
        label: "Stress - Strain".to_string(),
        color: *COLOR_STRESS_STRAIN,
        stroke_width: LINE_WIDTH_PLOT,
        kind: SeriesKind::Scatter,
    }
}

/// Padded axis ranges covering the whole curve.
pub fn full_curve_ranges(
    report: &AnalysisReport,
) -> Result<(std::ops::Range<f64>, std::ops::Range<f64>), Box<dyn Error>> {
    let (x_min, x_max) =
        padded_bounds(&report.sample.strain).ok_or("strain has no finite values to plot")?;
    let (y_min, y_max) = padded_bounds(&report.stress).ok_or("stress has no finite values to plot")?;
    Ok((x_min..x_max, y_min..y_max))
}

/// Generates the plain Stress-Strain scatter plot.
pub fn plot_stress_strain(report: &AnalysisReport, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{}_StressStrain.png", report.sample_name));
    let (x_range, y_range) = full_curve_ranges(report)?;

    let config = PlotConfig {
        title: format!("Stress-Strain Curve for Sample {}", report.sample_name),
        x_range,
        y_range,
        series: vec![stress_strain_series(report)],
        markers: Vec::new(),
        x_label: STRAIN_AXIS_LABEL.to_string(),
        y_label: STRESS_AXIS_LABEL.to_string(),
    };
    draw_single_plot(&output_file, &config)
}

// src/plot_functions/plot_stress_strain.rs

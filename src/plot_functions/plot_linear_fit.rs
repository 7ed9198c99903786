// src/plot_functions/plot_linear_fit.rs

use ndarray::s;
use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_BEST_FIT, COLOR_STRESS_STRAIN, LINE_WIDTH_PLOT};
use crate::pipeline::AnalysisReport;
use crate::plot_framework::{
    calculate_range, draw_single_plot, padded_bounds, to_points, PlotConfig, PlotSeries,
    SeriesKind,
};
use crate::plot_functions::plot_stress_strain::{STRAIN_AXIS_LABEL, STRESS_AXIS_LABEL};

/// Generates the Linear Region plot with its least-squares best fit line.
pub fn plot_linear_fit(report: &AnalysisReport, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{}_LinearFit.png", report.sample_name));
    let end = report.linear_fit.linear_index;
    let linear_strain = report.sample.strain.slice(s![..end]);
    let linear_stress = report.stress.slice(s![..end]);
    let best_fit_line = report.linear_fit.best_fit_line(linear_strain);

    let (x_min, x_max) = padded_bounds(linear_strain).ok_or("linear region has no finite strain")?;
    let (stress_min, stress_max) =
        padded_bounds(linear_stress).ok_or("linear region has no finite stress")?;
    let (fit_min, fit_max) = padded_bounds(&best_fit_line).unwrap_or((stress_min, stress_max));
    let (y_min, y_max) = calculate_range(stress_min.min(fit_min), stress_max.max(fit_max));

    let config = PlotConfig {
        title: format!("Linear Region for Sample {} with best fit", report.sample_name),
        x_range: x_min..x_max,
        y_range: y_min..y_max,
        series: vec![
            PlotSeries {
                data: to_points(linear_strain, linear_stress),
                label: "Stress - Strain".to_string(),
                color: *COLOR_STRESS_STRAIN,
                stroke_width: LINE_WIDTH_PLOT,
                kind: SeriesKind::Scatter,
            },
            PlotSeries {
                data: to_points(linear_strain, best_fit_line.view()),
                label: format!(
                    "Best Linear Fit (E = {:.1} GPa)",
                    report.elastic_modulus_gpa()
                ),
                color: *COLOR_BEST_FIT,
                stroke_width: LINE_WIDTH_PLOT,
                kind: SeriesKind::Line,
            },
        ],
        markers: Vec::new(),
        x_label: STRAIN_AXIS_LABEL.to_string(),
        y_label: STRESS_AXIS_LABEL.to_string(),
    };
    draw_single_plot(&output_file, &config)
}

// src/plot_functions/plot_linear_fit.rs

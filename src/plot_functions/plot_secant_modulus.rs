// src/plot_functions/plot_secant_modulus.rs

use std::error::Error;
use std::path::Path;

use crate::constants::COLOR_SECANT_POINT;
use crate::pipeline::AnalysisReport;
use crate::plot_framework::{draw_single_plot, PlotConfig, PlotMarker};
use crate::plot_functions::plot_stress_strain::{
    full_curve_ranges, stress_strain_series, STRAIN_AXIS_LABEL, STRESS_AXIS_LABEL,
};

/// Generates the Stress-Strain plot marking the end of the linear region (secant modulus at 40%).
pub fn plot_secant_modulus(report: &AnalysisReport, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{}_SecantModulus.png", report.sample_name));
    let (x_range, y_range) = full_curve_ranges(report)?;
    let index = report.linear_fit.linear_index;

    let config = PlotConfig {
        title: format!("Stress-Strain Curve for Sample {}", report.sample_name),
        x_range,
        y_range,
        series: vec![stress_strain_series(report)],
        markers: vec![PlotMarker {
            point: (report.sample.strain[index], report.stress[index]),
            label: "Secant Modulus at 40%".to_string(),
            color: *COLOR_SECANT_POINT,
        }],
        x_label: STRAIN_AXIS_LABEL.to_string(),
        y_label: STRESS_AXIS_LABEL.to_string(),
    };
    draw_single_plot(&output_file, &config)
}

// src/plot_functions/plot_secant_modulus.rs

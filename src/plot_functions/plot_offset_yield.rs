// src/plot_functions/plot_offset_yield.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_OFFSET_LINE, COLOR_YIELD_POINT, LINE_WIDTH_PLOT, OFFSET_PLOT_X_MIN,
    OFFSET_PLOT_Y_HEADROOM,
};
use crate::data_analysis::summary::sequence_max;
use crate::pipeline::AnalysisReport;
use crate::plot_framework::{
    draw_single_plot, in_plot_range, to_points, PlotConfig, PlotMarker, PlotSeries, SeriesKind,
};
use crate::plot_functions::plot_stress_strain::{
    stress_strain_series, STRAIN_AXIS_LABEL, STRESS_AXIS_LABEL,
};

/// Generates the Stress-Strain plot with the 0.2% offset line and the yield point.
pub fn plot_offset_yield(report: &AnalysisReport, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{}_OffsetYield.png", report.sample_name));

    // The offset line is unbounded, so the view is pinned to the curve itself.
    let x_max = sequence_max(&report.sample.strain, "strain")?;
    let y_max = OFFSET_PLOT_Y_HEADROOM * sequence_max(&report.stress, "stress")?;
    let x_range = OFFSET_PLOT_X_MIN..x_max.max(OFFSET_PLOT_X_MIN + f64::EPSILON);
    let y_range = 0.0..y_max.max(f64::EPSILON);

    let offset_points: Vec<(f64, f64)> =
        to_points(report.sample.strain.view(), report.yield_result.offset_line.view())
            .into_iter()
            .filter(|&(x, y)| in_plot_range(&x_range, x) && in_plot_range(&y_range, y))
            .collect();

    let index = report.yield_result.intercept_index;
    let config = PlotConfig {
        title: format!(
            "Stress-Strain Curve for Sample {} with 0.2% Yield",
            report.sample_name
        ),
        x_range: x_range.clone(),
        y_range: y_range.clone(),
        series: vec![
            stress_strain_series(report),
            PlotSeries {
                data: offset_points,
                label: "0.2% Offset Yield".to_string(),
                color: *COLOR_OFFSET_LINE,
                stroke_width: LINE_WIDTH_PLOT,
                kind: SeriesKind::Line,
            },
        ],
        markers: vec![PlotMarker {
            point: (report.sample.strain[index], report.stress[index]),
            label: format!("Yield Strength ({:.1} MPa)", report.yield_stress_mpa),
            color: *COLOR_YIELD_POINT,
        }],
        x_label: STRAIN_AXIS_LABEL.to_string(),
        y_label: STRESS_AXIS_LABEL.to_string(),
    };
    draw_single_plot(&output_file, &config)
}

// src/plot_functions/plot_offset_yield.rs

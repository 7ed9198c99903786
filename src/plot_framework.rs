// src/plot_framework.rs

use log::info;
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, PathElement, TriangleMarker};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use ndarray::ArrayView1;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, LINE_WIDTH_LEGEND,
    MARKER_SIZE, PLOT_HEIGHT, PLOT_WIDTH, SCATTER_POINT_SIZE,
};
use crate::types::PlotPoints;

/// Calculate plot range with padding.
/// Adds 5% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-9 { 0.5 } else { range * 0.05 };
    (min - padding, max + padding)
}

/// Padded (min, max) over finite values, `None` if there are none.
pub fn padded_bounds<'a, I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if min.is_infinite() || max.is_infinite() {
        None
    } else {
        Some(calculate_range(min, max))
    }
}

/// Inclusive of both ends, so points sitting on the axis limits are still drawn.
pub fn in_plot_range(range: &Range<f64>, value: f64) -> bool {
    value >= range.start && value <= range.end
}

/// Zips two index-aligned sequences into plot points.
pub fn to_points(x: ArrayView1<f64>, y: ArrayView1<f64>) -> PlotPoints {
    x.iter().zip(y.iter()).map(|(&a, &b)| (a, b)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesKind {
    Scatter,
    Line,
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: PlotPoints,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub kind: SeriesKind,
}

/// A single highlighted point (e.g. the yield point).
#[derive(Clone)]
pub struct PlotMarker {
    pub point: (f64, f64),
    pub label: String,
    pub color: RGBColor,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub markers: Vec<PlotMarker>,
    pub x_label: String,
    pub y_label: String,
}

/// Renders one chart to a PNG file.
pub fn draw_single_plot(output_file: &Path, plot_config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_file, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(&WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let x_range = plot_config.x_range.clone();
    let y_range = plot_config.y_range.clone();
    let in_view =
        move |&(x, y): &(f64, f64)| in_plot_range(&x_range, x) && in_plot_range(&y_range, y);

    for series in &plot_config.series {
        if series.data.is_empty() {
            continue;
        }
        let color = series.color;
        match series.kind {
            SeriesKind::Scatter => {
                chart
                    .draw_series(
                        series
                            .data
                            .iter()
                            .copied()
                            .filter(|p| in_view(p))
                            .map(|p| Circle::new(p, SCATTER_POINT_SIZE, color.filled())),
                    )?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE / 2, color.filled()));
            }
            SeriesKind::Line => {
                chart
                    .draw_series(LineSeries::new(
                        series.data.iter().copied(),
                        color.stroke_width(series.stroke_width),
                    ))?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
                    });
            }
        }
    }

    for marker in &plot_config.markers {
        let color = marker.color;
        chart
            .draw_series(std::iter::once(TriangleMarker::new(
                marker.point,
                MARKER_SIZE,
                color.filled(),
            )))?
            .label(marker.label.as_str())
            .legend(move |(x, y)| TriangleMarker::new((x + 10, y), MARKER_SIZE / 2, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", FONT_SIZE_LEGEND))
        .draw()?;

    root_area.present()?;
    info!("Plot saved as '{}'.", output_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_calculate_range_pads_and_orders() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
        let (lo, hi) = calculate_range(3.0, 3.0);
        assert_eq!((lo, hi), (2.5, 3.5));
    }

    #[test]
    fn test_padded_bounds_skips_non_finite() {
        assert_eq!(padded_bounds(&[f64::NAN, f64::INFINITY]), None);
        let (lo, hi) = padded_bounds(&[f64::NAN, 0.0, 20.0]).unwrap();
        assert!((lo + 1.0).abs() < 1e-12);
        assert!((hi - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_in_plot_range_includes_both_limits() {
        let range = -0.001..0.02;
        assert!(in_plot_range(&range, 0.02));
        assert!(in_plot_range(&range, -0.001));
        assert!(in_plot_range(&range, 0.01));
        assert!(!in_plot_range(&range, 0.0201));
        assert!(!in_plot_range(&range, f64::NAN));
    }

    #[test]
    fn test_to_points() {
        let x = array![0.0, 1.0];
        let y = array![5.0, 6.0];
        assert_eq!(to_points(x.view(), y.view()), vec![(0.0, 5.0), (1.0, 6.0)]);
    }
}

// src/plot_framework.rs

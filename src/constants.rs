// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{GREEN, LIGHTBLUE, ORANGE, PURPLE, RED};
use plotters::style::RGBColor;

// --- Analysis Constants ---
// Fraction of peak stress that bounds the linear region (secant modulus at 40%).
pub const SECANT_MODULUS_FRACTION: f64 = 0.40;
// Strain offset for the parallel yield line (0.2%).
pub const YIELD_OFFSET_STRAIN: f64 = 0.002;
// kN / mm^2 -> MPa
pub const KN_PER_MM2_TO_MPA: f64 = 1000.0;
pub const MPA_PER_GPA: f64 = 1000.0;
// Relative tolerance when comparing instrument-reported maxima against the recorded data.
pub const REPORTED_MAXIMUM_TOLERANCE: f64 = 0.01;

// --- Input File Layout ---
// First field of the units row that precedes the data table.
pub const DATA_SECTION_MARKER: &str = "(s)";
pub const LABEL_GAGE_DIAMETER: &str = "Gage Diameter";
pub const LABEL_MAXIMUM_FORCE: &str = "Maximum Force";
pub const LABEL_MAXIMUM_STRAIN: &str = "Maximum Strain";
// Metadata rows look like `<Label>,<units-or-blank>,<value>`.
pub const METADATA_VALUE_FIELD: usize = 2;
// time, displacement, force, strain
pub const DATA_COLUMN_COUNT: usize = 4;

// --- CLI Defaults ---
pub const DEFAULT_DATA_ROOT: &str = "data/tensile";
pub const DEFAULT_MATERIAL: &str = "1045CR";
pub const DEFAULT_SAMPLE: &str = "C01A1045CR_1";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 960;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 16;

// --- Plot Color Assignments ---
pub const COLOR_STRESS_STRAIN: &RGBColor = &LIGHTBLUE;
pub const COLOR_SECANT_POINT: &RGBColor = &ORANGE;
pub const COLOR_BEST_FIT: &RGBColor = &RED;
pub const COLOR_OFFSET_LINE: &RGBColor = &GREEN;
pub const COLOR_YIELD_POINT: &RGBColor = &PURPLE;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker sizes in pixels
pub const SCATTER_POINT_SIZE: u32 = 2;
pub const MARKER_SIZE: u32 = 10;

// Plot padding for the 0.2% offset chart, matching the usual presentation of the curve.
pub const OFFSET_PLOT_X_MIN: f64 = -0.001;
pub const OFFSET_PLOT_Y_HEADROOM: f64 = 1.1;

// src/constants.rs

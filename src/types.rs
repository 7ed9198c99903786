// src/types.rs
// Type aliases shared between the analysis stages

use ndarray::Array1;

// Engineering stress (MPa), index-aligned with the strain sequence it was derived from.
pub type StressCurve = Array1<f64>;

// Ultimate tensile stress (MPa) and fracture strain.
pub type StrengthStrain = (f64, f64);

// (x, y) pairs for plot series
pub type PlotPoints = Vec<(f64, f64)>;

// src/types.rs

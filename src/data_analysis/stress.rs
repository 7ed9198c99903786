// src/data_analysis/stress.rs

use ndarray::Array1;
use std::f64::consts::PI;

use crate::constants::KN_PER_MM2_TO_MPA;
use crate::error::{Result, TensileError};
use crate::types::StressCurve;

/// Cross-sectional area (mm^2) of a round specimen.
pub fn cross_sectional_area(sample_diameter_mm: f64) -> f64 {
    PI * (sample_diameter_mm / 2.0).powi(2)
}

/// Calculates engineering stress (MPa) from force (kN) and specimen diameter (mm).
pub fn calculate_stress(force_kn: &Array1<f64>, sample_diameter_mm: f64) -> Result<StressCurve> {
    if !sample_diameter_mm.is_finite() || sample_diameter_mm <= 0.0 {
        return Err(TensileError::invalid(format!(
            "sample diameter must be positive, got {} mm",
            sample_diameter_mm
        )));
    }
    let area_mm2 = cross_sectional_area(sample_diameter_mm);
    Ok(force_kn.mapv(|f| f / area_mm2 * KN_PER_MM2_TO_MPA))
}


// src/data_analysis/stress.rs

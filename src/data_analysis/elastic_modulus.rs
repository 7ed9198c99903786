// src/data_analysis/elastic_modulus.rs

use log::debug;
use ndarray::{s, Array1, ArrayView1};

use crate::constants::{MPA_PER_GPA, SECANT_MODULUS_FRACTION};
use crate::data_analysis::least_squares::fit_line;
use crate::data_analysis::nearest::closest_index;
use crate::data_analysis::summary::sequence_max;
use crate::error::{Result, TensileError};

/// Best-fit line over the linear (elastic) region of a stress-strain curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFitResult {
    pub linear_index: usize, // End of the linear region (exclusive).
    pub slope: f64,          // Elastic modulus (MPa).
    pub intercept: f64,      // MPa
}

impl LinearFitResult {
    pub fn elastic_modulus_gpa(&self) -> f64 {
        self.slope / MPA_PER_GPA
    }

    /// Evaluates `slope * strain + intercept`.
    pub fn best_fit_line(&self, strain: ArrayView1<f64>) -> Array1<f64> {
        strain.mapv(|e| self.slope * e + self.intercept)
    }
}

/// Estimates the elastic modulus with the secant modulus at 40% method.
///
/// The linear region runs from the first sample up to (not including) the
/// sample whose stress is closest to 40% of the peak stress.
pub fn calculate_elastic_modulus(
    strain: &Array1<f64>,
    stress: &Array1<f64>,
) -> Result<LinearFitResult> {
    if strain.len() != stress.len() {
        return Err(TensileError::invalid(format!(
            "strain and stress lengths differ ({} vs {})",
            strain.len(),
            stress.len()
        )));
    }

    let secant_stress = sequence_max(stress, "stress")? * SECANT_MODULUS_FRACTION;
    let linear_index = closest_index(secant_stress, stress)
        .ok_or_else(|| TensileError::invalid("no comparable stress values"))?;
    debug!(
        "Secant target {:.3} MPa closest at index {} ({:.3} MPa)",
        secant_stress, linear_index, stress[linear_index]
    );

    if linear_index < 2 {
        return Err(TensileError::invalid(format!(
            "linear region ends at index {}, at least 2 points are needed",
            linear_index
        )));
    }

    let (slope, intercept) = fit_line(
        strain.slice(s![..linear_index]),
        stress.slice(s![..linear_index]),
    )?;

    Ok(LinearFitResult {
        linear_index,
        slope,
        intercept,
    })
}


// src/data_analysis/elastic_modulus.rs

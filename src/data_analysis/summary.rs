// src/data_analysis/summary.rs

use ndarray::Array1;
use ndarray_stats::errors::MinMaxError;
use ndarray_stats::QuantileExt;

use crate::error::{Result, TensileError};
use crate::types::StrengthStrain;

/// Returns (ultimate tensile stress, fracture strain).
///
/// Both are plain maxima of their own sequence and need not share an index.
pub fn calculate_max_strength_strain(
    strain: &Array1<f64>,
    stress: &Array1<f64>,
) -> Result<StrengthStrain> {
    let ultimate_tensile_stress = sequence_max(stress, "stress")?;
    let fracture_strain = sequence_max(strain, "strain")?;
    Ok((ultimate_tensile_stress, fracture_strain))
}

/// Maximum of a sequence, failing on empty input or NaN.
pub fn sequence_max(values: &Array1<f64>, name: &str) -> Result<f64> {
    match values.max() {
        Ok(max) => Ok(*max),
        Err(MinMaxError::EmptyInput) => {
            Err(TensileError::invalid(format!("{} sequence is empty", name)))
        }
        Err(_) => Err(TensileError::invalid(format!(
            "{} sequence contains values without a defined order (NaN)",
            name
        ))),
    }
}


// src/data_analysis/summary.rs

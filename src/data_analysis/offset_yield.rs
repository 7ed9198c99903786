// src/data_analysis/offset_yield.rs

use log::debug;
use ndarray::Array1;

use crate::constants::YIELD_OFFSET_STRAIN;
use crate::data_analysis::nearest::closest_index;
use crate::error::{Result, TensileError};

/// 0.2% offset line and its intersection with the stress-strain curve.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldResult {
    pub offset_line: Array1<f64>, // MPa, index-aligned with strain.
    pub intercept_index: usize,
}

impl YieldResult {
    /// Stress at the intersection, `None` if `stress` is shorter than the curve this result came from.
    pub fn yield_stress(&self, stress: &Array1<f64>) -> Option<f64> {
        stress.get(self.intercept_index).copied()
    }
}

/// Locates the 0.2% offset yield point.
///
/// Builds `slope * (strain - 0.002)` and returns the first index where the
/// stress curve is closest to it.
pub fn calculate_percent_offset(
    slope: f64,
    strain: &Array1<f64>,
    stress: &Array1<f64>,
) -> Result<YieldResult> {
    if strain.len() != stress.len() {
        return Err(TensileError::invalid(format!(
            "strain and stress lengths differ ({} vs {})",
            strain.len(),
            stress.len()
        )));
    }

    let offset_line = strain.mapv(|e| slope * (e - YIELD_OFFSET_STRAIN));
    let distance = stress - &offset_line;
    let intercept_index = closest_index(0.0, &distance)
        .ok_or_else(|| TensileError::invalid("no comparable stress values for offset yield"))?;
    debug!(
        "Offset line meets the curve at index {} ({:.3} MPa)",
        intercept_index, stress[intercept_index]
    );

    Ok(YieldResult {
        offset_line,
        intercept_index,
    })
}


// src/data_analysis/offset_yield.rs

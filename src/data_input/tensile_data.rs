// src/data_input/tensile_data.rs

use ndarray::Array1;

use crate::error::{Result, TensileError};

/// Scalar values read from the metadata preamble of an instrument export.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMetadata {
    pub gage_diameter_mm: f64,          // Specimen diameter at the measurement region.
    pub maximum_force_kn: Option<f64>,  // Instrument-reported peak force.
    pub maximum_strain: Option<f64>,    // Instrument-reported peak strain.
}

/// One tensile test: metadata plus four index-aligned time series.
#[derive(Debug, Clone)]
pub struct TestSample {
    pub metadata: SampleMetadata,
    pub time_s: Array1<f64>,
    pub displacement_mm: Array1<f64>,
    pub force_kn: Array1<f64>,
    pub strain: Array1<f64>,
}

impl TestSample {
    /// Builds a sample, rejecting columns of unequal length.
    pub fn new(
        metadata: SampleMetadata,
        time_s: Array1<f64>,
        displacement_mm: Array1<f64>,
        force_kn: Array1<f64>,
        strain: Array1<f64>,
    ) -> Result<Self> {
        let n = time_s.len();
        if displacement_mm.len() != n || force_kn.len() != n || strain.len() != n {
            return Err(TensileError::invalid(format!(
                "column lengths differ (time {}, displacement {}, force {}, strain {})",
                n,
                displacement_mm.len(),
                force_kn.len(),
                strain.len()
            )));
        }
        Ok(TestSample {
            metadata,
            time_s,
            displacement_mm,
            force_kn,
            strain,
        })
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn gage_diameter_mm(&self) -> f64 {
        self.metadata.gage_diameter_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn metadata() -> SampleMetadata {
        SampleMetadata {
            gage_diameter_mm: 6.0,
            maximum_force_kn: None,
            maximum_strain: None,
        }
    }

    #[test]
    fn test_new_accepts_equal_lengths() {
        let sample = TestSample::new(
            metadata(),
            array![0.0, 0.1],
            array![0.0, 0.01],
            array![0.0, 1.5],
            array![0.0, 0.001],
        )
        .unwrap();
        assert_eq!(sample.len(), 2);
        assert!(!sample.is_empty());
        assert_eq!(sample.gage_diameter_mm(), 6.0);
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = TestSample::new(
            metadata(),
            array![0.0, 0.1],
            array![0.0, 0.01],
            array![0.0],
            array![0.0, 0.001],
        )
        .unwrap_err();
        assert!(matches!(err, TensileError::InvalidInput(_)));
    }
}

// src/data_input/tensile_data.rs

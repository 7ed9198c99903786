// src/pipeline.rs

use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::constants::REPORTED_MAXIMUM_TOLERANCE;
use crate::data_analysis::elastic_modulus::{calculate_elastic_modulus, LinearFitResult};
use crate::data_analysis::offset_yield::{calculate_percent_offset, YieldResult};
use crate::data_analysis::stress::calculate_stress;
use crate::data_analysis::summary::{calculate_max_strength_strain, sequence_max};
use crate::data_input::tensile_data::TestSample;
use crate::data_input::tensile_parser::parse_tensile_file;
use crate::error::{Result, TensileError};
use crate::types::StressCurve;

/// Everything derived from a single tensile test file.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub sample_name: String,
    pub source: PathBuf,
    pub sample: TestSample,
    pub stress: StressCurve,
    pub ultimate_tensile_stress_mpa: f64,
    pub fracture_strain: f64,
    pub linear_fit: LinearFitResult,
    pub yield_result: YieldResult,
    pub yield_stress_mpa: f64,
    pub metadata_mismatches: Vec<String>, // Reported maxima that disagree with the recorded data.
}

impl AnalysisReport {
    pub fn elastic_modulus_gpa(&self) -> f64 {
        self.linear_fit.elastic_modulus_gpa()
    }

    pub fn fracture_strain_percent(&self) -> f64 {
        self.fracture_strain * 100.0
    }
}

/// `<data_root>/<material>/<sample>.csv`
pub fn sample_path(data_root: &Path, material: &str, sample: &str) -> PathBuf {
    data_root.join(material).join(format!("{}.csv", sample))
}

/// Runs the full analysis for a sample inside a material folder.
pub fn analyze_sample(data_root: &Path, material: &str, sample: &str) -> Result<AnalysisReport> {
    let path = sample_path(data_root, material, sample);
    analyze_file(&path, sample)
}

/// Runs the full analysis for a single export file.
pub fn analyze_file(path: &Path, sample_name: &str) -> Result<AnalysisReport> {
    let sample = parse_tensile_file(path)?;

    let stress = calculate_stress(&sample.force_kn, sample.gage_diameter_mm())?;
    let (ultimate_tensile_stress_mpa, fracture_strain) =
        calculate_max_strength_strain(&sample.strain, &stress)?;
    let metadata_mismatches = check_reported_maxima(&sample)?;

    let linear_fit = calculate_elastic_modulus(&sample.strain, &stress)?;
    let yield_result = calculate_percent_offset(linear_fit.slope, &sample.strain, &stress)?;
    let yield_stress_mpa = yield_result.yield_stress(&stress).ok_or_else(|| {
        TensileError::invalid("offset yield index lies outside the stress curve")
    })?;

    info!(
        "Analyzed '{}': {} samples, linear region ends at index {}, yield at index {}",
        sample_name,
        sample.len(),
        linear_fit.linear_index,
        yield_result.intercept_index
    );

    Ok(AnalysisReport {
        sample_name: sample_name.to_string(),
        source: path.to_path_buf(),
        sample,
        stress,
        ultimate_tensile_stress_mpa,
        fracture_strain,
        linear_fit,
        yield_result,
        yield_stress_mpa,
        metadata_mismatches,
    })
}

/// Warns when the instrument-reported maxima disagree with the recorded columns.
/// Returns one message per mismatch; a mismatch does not stop the analysis.
fn check_reported_maxima(sample: &TestSample) -> Result<Vec<String>> {
    let mut mismatches = Vec::new();
    if let Some(reported) = sample.metadata.maximum_force_kn {
        let recorded = sequence_max(&sample.force_kn, "force")?;
        if !within_tolerance(reported, recorded) {
            mismatches.push(format!(
                "Reported maximum force {} kN differs from recorded maximum {} kN",
                reported, recorded
            ));
        }
    }
    if let Some(reported) = sample.metadata.maximum_strain {
        let recorded = sequence_max(&sample.strain, "strain")?;
        if !within_tolerance(reported, recorded) {
            mismatches.push(format!(
                "Reported maximum strain {} differs from recorded maximum {}",
                reported, recorded
            ));
        }
    }
    for message in &mismatches {
        warn!("{}", message);
    }
    Ok(mismatches)
}

fn within_tolerance(reported: f64, recorded: f64) -> bool {
    let scale = reported.abs().max(recorded.abs());
    scale == 0.0 || (reported - recorded).abs() / scale <= REPORTED_MAXIMUM_TOLERANCE
}


// src/pipeline.rs

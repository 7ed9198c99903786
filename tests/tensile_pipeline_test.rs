// tests/tensile_pipeline_test.rs

use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use ndarray::Array1;
use proptest::prelude::*;
use tempfile::TempDir;

use tensile_csv_render::data_analysis::stress::calculate_stress;
use tensile_csv_render::data_analysis::summary::calculate_max_strength_strain;
use tensile_csv_render::data_input::tensile_parser::parse_tensile_file;
use tensile_csv_render::{analyze_file, analyze_sample, TensileError};

fn write_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Elastic up to strain 0.0025 (E = 200 GPa), then linear hardening at 2 GPa.
fn elastic_plastic_export(diameter_mm: f64) -> String {
    let area = PI * (diameter_mm / 2.0).powi(2);
    let mut text = format!(
        "Gage Diameter,\"mm\",\"{}\"\nMaximum Force,\"kN\",\"{}\"\nMaximum Strain,\"mm/mm\",\"0.02\"\n\n",
        diameter_mm,
        535.0 * area / 1000.0
    );
    text.push_str("\"Time\",\"Displacement\",\"Force\",\"Strain\"\n");
    text.push_str("\"(s)\",\"mm\",\"kN\",\"mm/mm\"\n");
    for i in 0..=80 {
        let strain = i as f64 * 0.00025;
        let stress = if i <= 10 {
            50.0 * i as f64
        } else {
            495.0 + 0.5 * i as f64
        };
        let force = stress * area / 1000.0;
        text.push_str(&format!(
            "\"{}\",\"{}\",\"{}\",\"{}\"\n",
            i as f64 * 0.1,
            i as f64 * 0.005,
            force,
            strain
        ));
    }
    text
}

#[test]
fn test_four_row_file_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "sample.csv",
        "Gage Diameter,\"mm\",\"10\"\n\"(s)\",\"mm\",\"kN\",\"%\"\n\
         0,0,1,0.001\n1,0.1,2,0.002\n2,0.2,3,0.003\n3,0.3,4,0.004\n",
    );

    let sample = parse_tensile_file(&path).unwrap();
    assert_eq!(sample.len(), 4);
    assert_eq!(sample.time_s.len(), sample.strain.len());
    assert_eq!(sample.displacement_mm.len(), sample.force_kn.len());

    let stress = calculate_stress(&sample.force_kn, sample.gage_diameter_mm()).unwrap();
    assert_eq!(stress.len(), 4);

    let (uts, fracture) = calculate_max_strength_strain(&sample.strain, &stress).unwrap();
    let expected_uts = 4.0 / (PI * 25.0) * 1000.0;
    assert!((uts - expected_uts).abs() < 1e-9, "uts {uts} vs {expected_uts}");
    assert_eq!(fracture, 0.004);
}

#[test]
fn test_full_analysis_of_elastic_plastic_curve() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "1045CR/C01_1.csv", &elastic_plastic_export(10.0));

    let report = analyze_sample(dir.path(), "1045CR", "C01_1").unwrap();
    assert_eq!(report.sample_name, "C01_1");
    assert_eq!(report.stress.len(), 81);
    assert!((report.ultimate_tensile_stress_mpa - 535.0).abs() < 1e-6);
    assert!((report.fracture_strain - 0.02).abs() < 1e-12);
    assert!((report.fracture_strain_percent() - 2.0).abs() < 1e-9);

    // 40% of 535 MPa is 214 MPa, nearest recorded stress is 200 MPa at index 4
    assert_eq!(report.linear_fit.linear_index, 4);
    assert!((report.linear_fit.slope - 200_000.0).abs() / 200_000.0 < 1e-6);
    assert!(report.linear_fit.intercept.abs() < 1e-3);
    assert!((report.elastic_modulus_gpa() - 200.0).abs() < 1e-3);

    // offset line 50 i - 400 meets 495 + 0.5 i between i = 18 and 19
    assert_eq!(report.yield_result.intercept_index, 18);
    assert!((report.yield_stress_mpa - 504.0).abs() < 1e-6);
    assert_eq!(report.yield_result.offset_line.len(), 81);
    assert!(report.metadata_mismatches.is_empty());
}

#[test]
fn test_reported_force_mismatch_still_analyzes() {
    let dir = TempDir::new().unwrap();
    let export = elastic_plastic_export(10.0).replacen(
        "Maximum Force,\"kN\",\"",
        "Maximum Force,\"kN\",\"9",
        1,
    );
    let path = write_file(dir.path(), "mismatch.csv", &export);
    let report = analyze_file(&path, "mismatch").unwrap();
    assert_eq!(report.metadata_mismatches.len(), 1);
    assert!(report.metadata_mismatches[0].contains("force"));
    assert_eq!(report.yield_result.intercept_index, 18);
}

#[test]
fn test_analyze_file_uses_given_name() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "direct.csv", &elastic_plastic_export(6.0));
    let report = analyze_file(&path, "direct").unwrap();
    assert_eq!(report.sample_name, "direct");
    assert_eq!(report.source, path);
    assert_eq!(report.yield_result.intercept_index, 18);
}

#[test]
fn test_missing_sample_is_file_not_found() {
    let dir = TempDir::new().unwrap();
    let err = analyze_sample(dir.path(), "missing", "nothing").unwrap_err();
    match err {
        TensileError::FileNotFound(path) => assert!(path.ends_with("missing/nothing.csv")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_malformed_metadata_fails_before_data() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "bad.csv",
        "Gage Diameter,\"mm\"\n\"(s)\",\"mm\",\"kN\",\"%\"\n0,0,1,0.001\n",
    );
    let err = analyze_file(&path, "bad").unwrap_err();
    assert!(matches!(err, TensileError::Parse { line: 1, .. }), "{err:?}");
}

#[test]
fn test_short_curve_has_degenerate_linear_region() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "short.csv",
        "Gage Diameter,mm,10\n(s),mm,kN,%\n0,0,1,0.001\n1,0.1,2,0.002\n2,0.2,3,0.003\n3,0.3,4,0.004\n",
    );
    let err = analyze_file(&path, "short").unwrap_err();
    assert!(matches!(err, TensileError::InvalidInput(_)), "{err:?}");
}

proptest! {
    #[test]
    fn prop_stress_is_linear_in_force(
        forces in prop::collection::vec(-50.0f64..50.0, 1..64),
        diameter in 0.5f64..50.0,
    ) {
        let force = Array1::from(forces);
        let doubled = force.mapv(|f| 2.0 * f);
        let stress = calculate_stress(&force, diameter).unwrap();
        let stress_doubled = calculate_stress(&doubled, diameter).unwrap();
        prop_assert_eq!(stress.len(), stress_doubled.len());
        for (s, s2) in stress.iter().zip(stress_doubled.iter()) {
            prop_assert!((s2 - 2.0 * s).abs() <= 1e-9 * s.abs().max(1.0));
        }
    }

    #[test]
    fn prop_maxima_dominate_inputs(
        pairs in prop::collection::vec((0.0f64..1.0, 0.0f64..2000.0), 1..64),
    ) {
        let strain: Array1<f64> = pairs.iter().map(|p| p.0).collect();
        let stress: Array1<f64> = pairs.iter().map(|p| p.1).collect();
        let (uts, fracture) = calculate_max_strength_strain(&strain, &stress).unwrap();
        prop_assert!(stress.iter().all(|&s| uts >= s));
        prop_assert!(strain.iter().all(|&e| fracture >= e));
        prop_assert!(stress.iter().any(|&s| s == uts));
    }
}

// tests/tensile_pipeline_test.rs

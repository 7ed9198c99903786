// src/data_analysis/least_squares.rs

use ndarray::ArrayView1;

use crate::error::{Result, TensileError};

/// First-degree least-squares fit `y = slope * x + intercept`.
///
/// Uses centered sums so that large offsets in x do not cost precision.
pub fn fit_line(x: ArrayView1<f64>, y: ArrayView1<f64>) -> Result<(f64, f64)> {
    if x.len() != y.len() {
        return Err(TensileError::invalid(format!(
            "cannot fit line to sequences of different length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(TensileError::invalid(format!(
            "at least 2 points are needed to fit a line, got {}",
            x.len()
        )));
    }

    let n = x.len() as f64;
    let x_mean = x.sum() / n;
    let y_mean = y.sum() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }

    if !sxx.is_finite() || sxx == 0.0 {
        return Err(TensileError::invalid(
            "x values have no spread, line fit is undefined",
        ));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    Ok((slope, intercept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_exact_line() {
        let x = array![0.0, 1.0, 2.0, 3.0];
        let y = array![1.0, 3.0, 5.0, 7.0];
        let (slope, intercept) = fit_line(x.view(), y.view()).unwrap();
        assert!((slope - 2.0).abs() < 1e-12);
        assert!((intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_noisy_line_matches_normal_equations() {
        let x = array![0.0, 1.0, 2.0];
        let y = array![0.0, 2.0, 1.0];
        // x_mean = 1, y_mean = 1, sxy = 1, sxx = 2
        let (slope, intercept) = fit_line(x.view(), y.view()).unwrap();
        assert!((slope - 0.5).abs() < 1e-12);
        assert!((intercept - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        let one = array![1.0];
        assert!(fit_line(one.view(), one.view()).is_err());
        let x = array![2.0, 2.0, 2.0];
        let y = array![1.0, 2.0, 3.0];
        assert!(fit_line(x.view(), y.view()).is_err());
        let short = array![1.0, 2.0];
        assert!(fit_line(x.view(), short.view()).is_err());
    }
}

// src/data_analysis/least_squares.rs

//! Simple ordinary least squares regression.
//!
//! One independent variable is all CAPM needs:
//! `asset_return = alpha + beta * benchmark_return + ε`.

use crate::error::CapmError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Result of a simple linear regression `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
    /// Standard error of the slope; `None` when `n <= 2` (no residual
    /// degree of freedom).
    pub stderr: Option<f64>,
    /// Squared Pearson correlation, in `[0, 1]`.
    pub r_squared: f64,
}

/// Fit `y = intercept + slope * x` by ordinary least squares.
///
/// `x` is the independent variable.
///
/// # Errors
/// * [`CapmError::DegenerateMarket`] when `x` has zero variance (the slope
///   is a division by zero)
/// * [`CapmError::InsufficientData`] when fewer than two observations are
///   supplied
pub fn linear_regression(
    x: &Array1<f64>,
    y: &Array1<f64>,
) -> Result<RegressionResult, CapmError> {
    if x.len() != y.len() {
        return Err(CapmError::LengthMismatch {
            independent: x.len(),
            dependent: y.len(),
        });
    }

    let n = x.len();
    if n < 2 {
        return Err(CapmError::InsufficientData {
            required: 2,
            actual: n,
        });
    }

    let nf = n as f64;
    let mean_x = x.sum() / nf;
    let mean_y = y.sum() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    if !sxx.is_finite() || sxx <= 0.0 {
        return Err(CapmError::DegenerateMarket);
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    // R² = r² with r = Sxy / sqrt(Sxx · Syy). A constant dependent series
    // has no correlation to measure, so R² is 0 there.
    let r_squared = if syy > 0.0 {
        let r = sxy / (sxx * syy).sqrt();
        (r * r).min(1.0)
    } else {
        0.0
    };

    // Residual sum of squares can dip below zero by rounding on an exact fit.
    let stderr = if n > 2 {
        let sse = (syy - slope * sxy).max(0.0);
        Some((sse / ((nf - 2.0) * sxx)).sqrt())
    } else {
        None
    };

    Ok(RegressionResult {
        slope,
        intercept,
        stderr,
        r_squared,
    })
}

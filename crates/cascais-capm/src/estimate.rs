//! The CAPM estimator.
//!
//! Turns two price histories into beta, alpha, and an annualized required
//! rate of return:
//!
//! `E(R_i) = R_f + β · (E(R_m) − R_f)`
//!
//! The estimator is pure apart from reading its inputs: no I/O, no
//! printing, no shared state. Running it concurrently for many symbol
//! pairs needs no locking.

use crate::annualize::{AnnualizationMethod, annualize_market_return};
use crate::error::{CapmError, EstimateWarning};
use crate::regression::linear_regression;
use crate::returns::{PairedReturns, ReturnKind};
use crate::series::{PriceSeries, align};
use serde::{Deserialize, Serialize};

/// Configuration for CAPM estimation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapmConfig {
    /// Periods per year used for annualization (default: 252 trading days)
    pub annualization_periods: usize,
    /// Return computation convention (default: simple percentage returns)
    pub return_kind: ReturnKind,
    /// Market-return annualization convention (default: arithmetic)
    pub annualization_method: AnnualizationMethod,
}

impl Default for CapmConfig {
    fn default() -> Self {
        Self {
            annualization_periods: 252,
            return_kind: ReturnKind::Simple,
            annualization_method: AnnualizationMethod::Arithmetic,
        }
    }
}

/// A fully populated CAPM estimate.
///
/// Every numeric field is present on success; failure is always
/// [`CapmError`], never a partially filled record or a sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapmEstimate {
    /// Annualized required rate of return (cost of equity).
    pub expected_return: f64,
    /// Regression slope: sensitivity of asset returns to market returns.
    pub beta: f64,
    /// Regression intercept: per-period return unexplained by the market.
    pub alpha: f64,
    /// Standard error of beta; absent when only two observations were
    /// available.
    pub beta_stderr: Option<f64>,
    /// Fraction of asset return variance explained by the market, in
    /// `[0, 1]`.
    pub r_squared: f64,
    /// Annualized benchmark return.
    pub market_annual_return: f64,
    /// Annualized benchmark return in excess of the risk-free rate.
    pub market_risk_premium: f64,
    /// Number of paired return observations behind the regression.
    pub n_obs: usize,
    /// Non-fatal conditions encountered while interpreting the inputs.
    pub warnings: Vec<EstimateWarning>,
}

/// CAPM estimator.
#[derive(Debug, Clone, Default)]
pub struct CapmEstimator {
    config: CapmConfig,
    warnings: Vec<EstimateWarning>,
}

impl CapmEstimator {
    /// Create an estimator from a typed configuration.
    pub const fn new(config: CapmConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    /// Create an estimator from raw caller arguments.
    ///
    /// `method` is matched leniently: an unrecognized name falls back to
    /// arithmetic annualization and is reported through
    /// [`CapmEstimate::warnings`] rather than failing the estimate.
    pub fn from_args(annualization_periods: usize, use_log_returns: bool, method: &str) -> Self {
        let (annualization_method, warning) = AnnualizationMethod::from_str_lenient(method);
        Self {
            config: CapmConfig {
                annualization_periods,
                return_kind: ReturnKind::from_log_flag(use_log_returns),
                annualization_method,
            },
            warnings: warning.into_iter().collect(),
        }
    }

    /// The estimator's configuration.
    pub const fn config(&self) -> &CapmConfig {
        &self.config
    }

    /// Warnings accumulated while interpreting raw arguments.
    pub fn warnings(&self) -> &[EstimateWarning] {
        &self.warnings
    }

    /// Estimate CAPM parameters for an asset against a market benchmark.
    ///
    /// `risk_free_rate` is an annual decimal rate (0.04 for 4%). The two
    /// series need not arrive pre-aligned; they are intersected by date
    /// first.
    ///
    /// # Errors
    /// * [`CapmError::InsufficientData`] when fewer than two usable paired
    ///   observations remain at any stage
    /// * [`CapmError::DegenerateMarket`] when benchmark returns have zero
    ///   variance
    pub fn estimate(
        &self,
        asset: &PriceSeries,
        benchmark: &PriceSeries,
        risk_free_rate: f64,
    ) -> Result<CapmEstimate, CapmError> {
        let aligned = align(asset, benchmark);
        if aligned.len() < 2 {
            return Err(CapmError::InsufficientData {
                required: 2,
                actual: aligned.len(),
            });
        }

        let returns = PairedReturns::compute(&aligned, self.config.return_kind);
        let n_obs = returns.len();
        if n_obs < 2 {
            return Err(CapmError::InsufficientData {
                required: 2,
                actual: n_obs,
            });
        }

        // Benchmark is the independent variable.
        let fit = linear_regression(&returns.benchmark, &returns.asset)?;

        let mean_market = returns.benchmark.mean().unwrap_or(0.0);
        let market_annual_return = annualize_market_return(
            mean_market,
            self.config.annualization_periods,
            self.config.return_kind,
            self.config.annualization_method,
        );

        let market_risk_premium = market_annual_return - risk_free_rate;
        let expected_return = risk_free_rate + fit.slope * market_risk_premium;

        Ok(CapmEstimate {
            expected_return,
            beta: fit.slope,
            alpha: fit.intercept,
            beta_stderr: fit.stderr,
            r_squared: fit.r_squared,
            market_annual_return,
            market_risk_premium,
            n_obs,
            warnings: self.warnings.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn series(symbol: &str, prices: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = (0..prices.len())
            .map(|i| start + chrono::Days::new(i as u64))
            .collect();
        PriceSeries::from_parts(symbol, dates, prices.to_vec())
    }

    #[test]
    fn test_estimate_happy_path() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0, 105.0, 104.0]);
        let benchmark = series("^GSPC", &[4000.0, 4040.0, 4020.0, 4100.0, 4090.0]);

        let estimator = CapmEstimator::new(CapmConfig::default());
        let estimate = estimator.estimate(&asset, &benchmark, 0.04).unwrap();

        assert_eq!(estimate.n_obs, 4);
        assert!(estimate.r_squared >= 0.0 && estimate.r_squared <= 1.0);
        assert!(estimate.beta_stderr.is_some());
        assert!(estimate.warnings.is_empty());
    }

    #[test]
    fn test_expected_return_identity() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0, 105.0, 104.0]);
        let benchmark = series("^GSPC", &[4000.0, 4040.0, 4020.0, 4100.0, 4090.0]);

        let estimator = CapmEstimator::new(CapmConfig::default());
        let estimate = estimator.estimate(&asset, &benchmark, 0.04).unwrap();

        assert_eq!(
            estimate.expected_return,
            0.04 + estimate.beta * estimate.market_risk_premium
        );
        assert_eq!(
            estimate.market_risk_premium,
            estimate.market_annual_return - 0.04
        );
    }

    #[test]
    fn test_constant_benchmark_is_degenerate() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0, 105.0]);
        let benchmark = series("FLAT", &[4000.0, 4000.0, 4000.0, 4000.0]);

        let estimator = CapmEstimator::new(CapmConfig::default());
        assert!(matches!(
            estimator.estimate(&asset, &benchmark, 0.04),
            Err(CapmError::DegenerateMarket)
        ));
    }

    #[test]
    fn test_single_shared_date_is_insufficient() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let asset = PriceSeries::from_parts("MSFT", vec![d1, d2], vec![100.0, 101.0]);
        let benchmark = PriceSeries::from_parts("^GSPC", vec![d2, d3], vec![4000.0, 4010.0]);

        let estimator = CapmEstimator::new(CapmConfig::default());
        assert!(matches!(
            estimator.estimate(&asset, &benchmark, 0.04),
            Err(CapmError::InsufficientData {
                required: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_two_observations_have_no_stderr() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0]);
        let benchmark = series("^GSPC", &[4000.0, 4040.0, 4020.0]);

        let estimator = CapmEstimator::new(CapmConfig::default());
        let estimate = estimator.estimate(&asset, &benchmark, 0.04).unwrap();

        assert_eq!(estimate.n_obs, 2);
        assert!(estimate.beta_stderr.is_none());
    }

    #[test]
    fn test_from_args_unknown_method_warns_but_estimates() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0, 105.0]);
        let benchmark = series("^GSPC", &[4000.0, 4040.0, 4020.0, 4100.0]);

        let lenient = CapmEstimator::from_args(252, false, "blah");
        let strict = CapmEstimator::new(CapmConfig::default());

        let with_warning = lenient.estimate(&asset, &benchmark, 0.04).unwrap();
        let baseline = strict.estimate(&asset, &benchmark, 0.04).unwrap();

        assert_eq!(with_warning.expected_return, baseline.expected_return);
        assert_eq!(with_warning.market_annual_return, baseline.market_annual_return);
        assert_eq!(
            with_warning.warnings,
            vec![EstimateWarning::UnrecognizedMethod {
                given: "blah".to_string()
            }]
        );
        assert!(baseline.warnings.is_empty());
    }

    #[test]
    fn test_geometric_log_configuration() {
        let asset = series("MSFT", &[100.0, 102.0, 101.0, 105.0]);
        let benchmark = series("^GSPC", &[4000.0, 4040.0, 4020.0, 4100.0]);

        let estimator = CapmEstimator::from_args(252, true, "geometric");
        let estimate = estimator.estimate(&asset, &benchmark, 0.04).unwrap();

        let mean_log = (4100.0_f64 / 4000.0).ln() / 3.0;
        assert_relative_eq!(
            estimate.market_annual_return,
            (mean_log * 252.0).exp() - 1.0,
            epsilon = 1e-12
        );
    }
}

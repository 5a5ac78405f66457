//! One-call CAPM analysis: fetch both price series, run the estimator.
//!
//! Composition only. Nothing here prints; callers decide whether to hand
//! the estimate to `cascais-output`.

use cascais_capm::{CapmError, CapmEstimate, CapmEstimator};
use cascais_data::{DataError, YahooHistoryProvider};
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Errors from a full fetch-and-estimate run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// One or both price series could not be acquired.
    #[error("market data unavailable: {0}")]
    DataUnavailable(#[from] DataError),

    /// The estimate itself failed.
    #[error(transparent)]
    Estimate(#[from] CapmError),
}

/// What to analyze: a symbol pair, a price window, and a risk-free rate.
#[derive(Debug, Clone)]
pub struct CapmRequest {
    /// Asset symbol.
    pub asset: String,

    /// Benchmark symbol.
    pub benchmark: String,

    /// Start of the price window.
    pub start: DateTime<Utc>,

    /// End of the price window.
    pub end: DateTime<Utc>,

    /// Annual risk-free rate as a decimal.
    pub risk_free_rate: f64,
}

impl CapmRequest {
    /// Request with stock defaults: a two-year window ending now and a 4%
    /// risk-free rate.
    pub fn new(asset: impl Into<String>, benchmark: impl Into<String>) -> Self {
        let end = Utc::now();
        Self {
            asset: asset.into(),
            benchmark: benchmark.into(),
            start: end - Duration::days(2 * 365),
            end,
            risk_free_rate: 0.04,
        }
    }

    /// Set the window to the given number of years ending at the current
    /// `end`.
    pub fn with_years(mut self, years: u32) -> Self {
        self.start = self.end - Duration::days(i64::from(years) * 365);
        self
    }

    /// Set an explicit price window.
    pub const fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Set the annual risk-free rate.
    pub const fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }
}

/// Fetch both price series and run the estimator.
///
/// Any acquisition failure surfaces as
/// [`AnalysisError::DataUnavailable`]; estimation failures pass through
/// unchanged. On success the estimate is fully populated.
pub async fn run_capm(
    provider: &YahooHistoryProvider,
    estimator: &CapmEstimator,
    request: &CapmRequest,
) -> Result<CapmEstimate, AnalysisError> {
    let (asset, benchmark) = provider
        .fetch_pair(&request.asset, &request.benchmark, request.start, request.end)
        .await?;

    Ok(estimator.estimate(&asset, &benchmark, request.risk_free_rate)?)
}

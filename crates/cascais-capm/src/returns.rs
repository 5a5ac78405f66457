//! Per-period return computation.
//!
//! Returns are always computed jointly for the asset/benchmark pair: a
//! period whose return is unusable on either side (a zero previous price,
//! a non-finite ratio) is dropped from both sides, so the regression only
//! ever sees complete pairs.

use crate::series::AlignedPrices;
use chrono::NaiveDate;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// How per-period returns are derived from consecutive prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    /// Simple percentage returns: `p_t / p_{t-1} - 1`.
    Simple,
    /// Natural-log returns: `ln(p_t / p_{t-1})`.
    Log,
}

impl ReturnKind {
    /// Map the classic `use_log_returns` flag onto a kind.
    pub const fn from_log_flag(use_log_returns: bool) -> Self {
        if use_log_returns { Self::Log } else { Self::Simple }
    }

    fn compute(self, prev: f64, curr: f64) -> f64 {
        match self {
            Self::Simple => curr / prev - 1.0,
            Self::Log => (curr / prev).ln(),
        }
    }
}

/// Jointly computed asset and benchmark return series.
///
/// Length is at most one less than the aligned price series that produced
/// it. Every stored value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedReturns {
    /// Date of each return observation (the later date of the price pair).
    pub dates: Vec<NaiveDate>,
    /// Asset returns.
    pub asset: Array1<f64>,
    /// Benchmark returns.
    pub benchmark: Array1<f64>,
}

impl PairedReturns {
    /// Compute paired returns from aligned prices.
    pub fn compute(aligned: &AlignedPrices, kind: ReturnKind) -> Self {
        let mut dates = Vec::new();
        let mut asset = Vec::new();
        let mut benchmark = Vec::new();

        for t in 1..aligned.len() {
            let r_asset = kind.compute(aligned.asset[t - 1], aligned.asset[t]);
            let r_benchmark = kind.compute(aligned.benchmark[t - 1], aligned.benchmark[t]);

            if r_asset.is_finite() && r_benchmark.is_finite() {
                dates.push(aligned.dates[t]);
                asset.push(r_asset);
                benchmark.push(r_benchmark);
            }
        }

        Self {
            dates,
            asset: Array1::from_vec(asset),
            benchmark: Array1::from_vec(benchmark),
        }
    }

    /// Number of paired observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether no usable pair survived.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

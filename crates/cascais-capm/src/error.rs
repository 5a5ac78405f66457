//! Error and warning types for CAPM estimation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while estimating a CAPM model.
///
/// These are hard failures: the caller gets no estimate at all, never a
/// partially filled or sentinel-valued one.
#[derive(Debug, Error)]
pub enum CapmError {
    /// Fewer usable observations than the estimate needs
    #[error("insufficient data: need at least {required} paired observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations required
        required: usize,
        /// Observations actually available
        actual: usize,
    },

    /// Benchmark returns have zero variance, so the regression slope is undefined
    #[error("degenerate market: benchmark return variance is zero")]
    DegenerateMarket,

    /// Paired series lengths diverged (internal invariant)
    #[error("length mismatch: {independent} benchmark vs {dependent} asset observations")]
    LengthMismatch {
        /// Benchmark (independent) observation count
        independent: usize,
        /// Asset (dependent) observation count
        dependent: usize,
    },
}

/// Non-fatal conditions surfaced alongside a successful estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateWarning {
    /// An unrecognized annualization method name was coerced to arithmetic.
    UnrecognizedMethod {
        /// The method name as supplied by the caller.
        given: String,
    },
}

impl fmt::Display for EstimateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedMethod { given } => {
                write!(
                    f,
                    "unrecognized annualization method '{}', using 'arithmetic'",
                    given
                )
            }
        }
    }
}

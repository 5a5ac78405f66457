//! Annualization of per-period market returns.

use crate::error::EstimateWarning;
use crate::returns::ReturnKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Convention for scaling a mean per-period return to a yearly figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnualizationMethod {
    /// Additive scale-up of the mean per-period return.
    Arithmetic,
    /// Compounding of the mean per-period return.
    Geometric,
}

impl AnnualizationMethod {
    /// Parse a method name, falling back to [`Self::Arithmetic`] with a
    /// warning when the name is not recognized.
    ///
    /// An unrecognized method is never a hard failure; the warning travels
    /// with the estimate instead.
    pub fn from_str_lenient(s: &str) -> (Self, Option<EstimateWarning>) {
        match s {
            "arithmetic" => (Self::Arithmetic, None),
            "geometric" => (Self::Geometric, None),
            other => (
                Self::Arithmetic,
                Some(EstimateWarning::UnrecognizedMethod {
                    given: other.to_string(),
                }),
            ),
        }
    }

    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arithmetic => "arithmetic",
            Self::Geometric => "geometric",
        }
    }
}

impl fmt::Display for AnnualizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale a mean per-period return to an annual figure.
///
/// The four cases from crossing return kind with method:
///
/// | kind   | arithmetic               | geometric                  |
/// |--------|--------------------------|----------------------------|
/// | simple | `mean · k`               | `(1 + mean)^k − 1`         |
/// | log    | `(e^mean − 1) · k`       | `e^(mean · k) − 1`         |
///
/// where `k` is `periods`. The log/arithmetic case converts the mean log
/// return to an equivalent simple per-period return before the additive
/// scale-up; that mixes a compounding-style conversion with additive
/// scaling and understates true compounding. Kept as-is.
pub fn annualize_market_return(
    mean_return: f64,
    periods: usize,
    kind: ReturnKind,
    method: AnnualizationMethod,
) -> f64 {
    let k = periods as f64;
    match (method, kind) {
        (AnnualizationMethod::Arithmetic, ReturnKind::Simple) => mean_return * k,
        (AnnualizationMethod::Arithmetic, ReturnKind::Log) => (mean_return.exp() - 1.0) * k,
        (AnnualizationMethod::Geometric, ReturnKind::Simple) => (1.0 + mean_return).powf(k) - 1.0,
        (AnnualizationMethod::Geometric, ReturnKind::Log) => (mean_return * k).exp() - 1.0,
    }
}

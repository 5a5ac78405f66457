//! CAPM report rendering.
//!
//! The report consumes a finished [`CapmEstimate`]; the field set of the
//! estimate is the whole contract between the estimator and this crate.

use cascais_capm::CapmEstimate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A CAPM analysis ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapmReport {
    /// Asset symbol.
    pub symbol: String,

    /// Benchmark symbol.
    pub benchmark: String,

    /// Start date of the analysis period.
    pub period_start: NaiveDate,

    /// End date of the analysis period.
    pub period_end: NaiveDate,

    /// Annual risk-free rate used, as a decimal.
    pub risk_free_rate: f64,

    /// The estimate being reported.
    pub estimate: CapmEstimate,
}

impl CapmReport {
    /// Create a new report.
    pub const fn new(
        symbol: String,
        benchmark: String,
        period_start: NaiveDate,
        period_end: NaiveDate,
        risk_free_rate: f64,
        estimate: CapmEstimate,
    ) -> Self {
        Self {
            symbol,
            benchmark,
            period_start,
            period_end,
            risk_free_rate,
            estimate,
        }
    }

    /// Human label for the beta regime.
    pub fn beta_profile(&self) -> &'static str {
        let beta = self.estimate.beta;
        if beta < 0.0 {
            "moves inversely to the market"
        } else if beta > 1.0 {
            "more volatile than the market"
        } else if beta < 1.0 {
            "less volatile than the market"
        } else {
            "moves with the market"
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let e = &self.estimate;
        let mut output = String::new();

        output.push_str(&format!(
            "\nCAPM Analysis: {} vs {}\n",
            self.symbol, self.benchmark
        ));
        output.push_str(&format!(
            "Period: {} to {}\n",
            self.period_start, self.period_end
        ));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        output.push_str("\nModel Inputs:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  Risk-Free Rate (Rf):      {:.2}%\n",
            self.risk_free_rate * 100.0
        ));
        output.push_str(&format!("  Observations:             {}\n", e.n_obs));

        output.push_str("\nMarket:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  Annualized Return (E(Rm)): {:.2}%\n",
            e.market_annual_return * 100.0
        ));
        output.push_str(&format!(
            "  Risk Premium (MRP):        {:.2}%\n",
            e.market_risk_premium * 100.0
        ));

        output.push_str("\nRegression:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  Beta (β):                 {:.4} ({})\n",
            e.beta,
            self.beta_profile()
        ));
        output.push_str(&format!("  Alpha (α):                {:.6}\n", e.alpha));
        if let Some(stderr) = e.beta_stderr {
            output.push_str(&format!("  Beta Std Error:           {:.6}\n", stderr));
        }
        output.push_str(&format!("  R-squared:                {:.4}\n", e.r_squared));

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "  Required Return (Cost of Equity): {:.2}%\n",
            e.expected_return * 100.0
        ));

        if !e.warnings.is_empty() {
            output.push_str("\nWarnings:\n");
            for warning in &e.warnings {
                output.push_str(&format!("  - {}\n", warning));
            }
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');

        output
    }

    /// Format as Markdown for documentation.
    pub fn to_markdown(&self) -> String {
        let e = &self.estimate;
        let mut output = String::new();

        output.push_str(&format!(
            "# CAPM Analysis: {} vs {}\n\n",
            self.symbol, self.benchmark
        ));
        output.push_str(&format!(
            "**Period:** {} to {}\n\n",
            self.period_start, self.period_end
        ));

        output.push_str("## Estimates\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!(
            "| Risk-Free Rate (Rf) | {:.2}% |\n",
            self.risk_free_rate * 100.0
        ));
        output.push_str(&format!(
            "| Annualized Market Return (E(Rm)) | {:.2}% |\n",
            e.market_annual_return * 100.0
        ));
        output.push_str(&format!(
            "| Market Risk Premium (MRP) | {:.2}% |\n",
            e.market_risk_premium * 100.0
        ));
        output.push_str(&format!("| Beta (β) | {:.4} |\n", e.beta));
        output.push_str(&format!("| Alpha (α) | {:.6} |\n", e.alpha));
        if let Some(stderr) = e.beta_stderr {
            output.push_str(&format!("| Beta Std Error | {:.6} |\n", stderr));
        }
        output.push_str(&format!("| R-squared | {:.4} |\n", e.r_squared));
        output.push_str(&format!("| Observations | {} |\n", e.n_obs));
        output.push_str(&format!(
            "| Required Return (Cost of Equity) | {:.2}% |\n",
            e.expected_return * 100.0
        ));

        output.push_str(&format!("\nThe asset {}.\n", self.beta_profile()));

        if !e.warnings.is_empty() {
            output.push_str("\n## Warnings\n\n");
            for warning in &e.warnings {
                output.push_str(&format!("- {}\n", warning));
            }
        }

        output
    }
}

impl fmt::Display for CapmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.estimate;
        writeln!(
            f,
            "CAPM: {} vs {} ({} to {})",
            self.symbol, self.benchmark, self.period_start, self.period_end
        )?;
        writeln!(f, "  Beta: {:.4}", e.beta)?;
        writeln!(f, "  Alpha: {:.6}", e.alpha)?;
        writeln!(f, "  R-squared: {:.4}", e.r_squared)?;
        writeln!(f, "  Expected Return: {:.2}%", e.expected_return * 100.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(beta: f64) -> CapmEstimate {
        CapmEstimate {
            expected_return: 0.04 + beta * 0.07,
            beta,
            alpha: 0.0001,
            beta_stderr: Some(0.05),
            r_squared: 0.72,
            market_annual_return: 0.11,
            market_risk_premium: 0.07,
            n_obs: 503,
            warnings: Vec::new(),
        }
    }

    fn report(beta: f64) -> CapmReport {
        CapmReport::new(
            "MSFT".to_string(),
            "^GSPC".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            0.04,
            estimate(beta),
        )
    }

    #[test]
    fn test_report_creation() {
        let report = report(1.2);
        assert_eq!(report.symbol, "MSFT");
        assert_eq!(report.benchmark, "^GSPC");
        assert_eq!(report.estimate.n_obs, 503);
    }

    #[test]
    fn test_beta_profile() {
        assert_eq!(report(1.2).beta_profile(), "more volatile than the market");
        assert_eq!(report(0.6).beta_profile(), "less volatile than the market");
        assert_eq!(report(1.0).beta_profile(), "moves with the market");
        assert_eq!(report(-0.3).beta_profile(), "moves inversely to the market");
    }

    #[test]
    fn test_ascii_table() {
        let table = report(1.2).to_ascii_table();
        assert!(table.contains("MSFT"));
        assert!(table.contains("^GSPC"));
        assert!(table.contains("Beta"));
        assert!(table.contains("Cost of Equity"));
        assert!(table.contains("more volatile than the market"));
    }

    #[test]
    fn test_markdown() {
        let md = report(0.9).to_markdown();
        assert!(md.contains("# CAPM Analysis"));
        assert!(md.contains("| Beta (β) | 0.9000 |"));
        assert!(md.contains("| Observations | 503 |"));
    }

    #[test]
    fn test_json_round_trip() {
        let report = report(1.2);
        let json = report.to_json().unwrap();
        let parsed: CapmReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.symbol, "MSFT");
        assert_eq!(parsed.estimate.beta, report.estimate.beta);
    }

    #[test]
    fn test_stderr_line_absent_when_missing() {
        let mut r = report(1.2);
        r.estimate.beta_stderr = None;
        let table = r.to_ascii_table();
        assert!(!table.contains("Beta Std Error"));
    }
}

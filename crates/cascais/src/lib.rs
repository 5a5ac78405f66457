#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cascais/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;

// Re-export main types from sub-crates
pub use cascais_capm as capm;
pub use cascais_data as data;
pub use cascais_output as output;

// Re-export the one-call analysis entry point
pub use analyze::{AnalysisError, CapmRequest, run_capm};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

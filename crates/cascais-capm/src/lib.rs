#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/cascais/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod annualize;
pub mod error;
pub mod estimate;
pub mod regression;
pub mod returns;
pub mod series;

// Re-export main types
pub use annualize::{AnnualizationMethod, annualize_market_return};
pub use error::{CapmError, EstimateWarning};
pub use estimate::{CapmConfig, CapmEstimate, CapmEstimator};
pub use regression::{RegressionResult, linear_regression};
pub use returns::{PairedReturns, ReturnKind};
pub use series::{AlignedPrices, PricePoint, PriceSeries, align};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

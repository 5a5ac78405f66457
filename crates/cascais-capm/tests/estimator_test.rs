//! Integration tests for the CAPM estimation pipeline.

use approx::assert_relative_eq;
use cascais_capm::{
    AnnualizationMethod, CapmConfig, CapmError, CapmEstimator, PriceSeries, ReturnKind,
    annualize_market_return,
};
use chrono::NaiveDate;

fn series_from_returns(symbol: &str, start_price: f64, returns: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut prices = vec![start_price];
    for r in returns {
        prices.push(prices.last().unwrap() * (1.0 + r));
    }
    let dates = (0..prices.len())
        .map(|i| start + chrono::Days::new(i as u64))
        .collect();
    PriceSeries::from_parts(symbol, dates, prices)
}

#[test]
fn noiseless_linear_relation_recovers_beta_and_alpha() {
    // asset_return = 2.0 * benchmark_return + 0.01, exactly, n = 10.
    let market_returns = [
        0.010, -0.020, 0.015, 0.005, -0.010, 0.030, -0.005, 0.012, 0.002, -0.015,
    ];
    let asset_returns: Vec<f64> = market_returns.iter().map(|r| 2.0 * r + 0.01).collect();

    let asset = series_from_returns("SYN", 100.0, &asset_returns);
    let benchmark = series_from_returns("MKT", 4000.0, &market_returns);

    let estimator = CapmEstimator::new(CapmConfig::default());
    let estimate = estimator.estimate(&asset, &benchmark, 0.04).unwrap();

    assert_eq!(estimate.n_obs, 10);
    assert_relative_eq!(estimate.beta, 2.0, epsilon = 1e-9);
    assert_relative_eq!(estimate.alpha, 0.01, epsilon = 1e-9);
    assert_relative_eq!(estimate.r_squared, 1.0, epsilon = 1e-9);
}

#[test]
fn r_squared_stays_in_unit_interval_and_n_obs_matches() {
    // A deliberately noisy pair; nothing about it should push R² outside
    // [0, 1] or lose observations.
    let market_returns = [0.01, -0.02, 0.03, -0.01, 0.02, 0.005, -0.015];
    let asset_returns = [0.02, 0.01, -0.03, 0.015, -0.02, 0.01, 0.005];

    let asset = series_from_returns("NOISY", 50.0, &asset_returns);
    let benchmark = series_from_returns("MKT", 4000.0, &market_returns);

    let estimate = CapmEstimator::new(CapmConfig::default())
        .estimate(&asset, &benchmark, 0.04)
        .unwrap();

    assert_eq!(estimate.n_obs, 7);
    assert!(estimate.r_squared >= 0.0);
    assert!(estimate.r_squared <= 1.0);
}

#[test]
fn zero_variance_benchmark_fails_regardless_of_asset() {
    let asset = series_from_returns("VOL", 100.0, &[0.05, -0.03, 0.02, 0.04]);
    let benchmark = series_from_returns("FLAT", 4000.0, &[0.0, 0.0, 0.0, 0.0]);

    let result = CapmEstimator::new(CapmConfig::default()).estimate(&asset, &benchmark, 0.04);
    assert!(matches!(result, Err(CapmError::DegenerateMarket)));
}

#[test]
fn annualization_round_trip_constant_daily_return() {
    let d = 0.0005;
    let k = 252;

    let arithmetic =
        annualize_market_return(d, k, ReturnKind::Simple, AnnualizationMethod::Arithmetic);
    assert_relative_eq!(arithmetic, d * k as f64, epsilon = 1e-15);

    let geometric =
        annualize_market_return(d, k, ReturnKind::Simple, AnnualizationMethod::Geometric);
    assert_relative_eq!(geometric, (1.0 + d).powf(k as f64) - 1.0, epsilon = 1e-15);
}

#[test]
fn unknown_method_matches_arithmetic_and_warns() {
    let market_returns = [0.01, -0.02, 0.015, 0.005, -0.01];
    let asset_returns: Vec<f64> = market_returns.iter().map(|r| 1.3 * r - 0.002).collect();

    let asset = series_from_returns("SYN", 100.0, &asset_returns);
    let benchmark = series_from_returns("MKT", 4000.0, &market_returns);

    let coerced = CapmEstimator::from_args(252, false, "blah")
        .estimate(&asset, &benchmark, 0.04)
        .unwrap();
    let arithmetic = CapmEstimator::from_args(252, false, "arithmetic")
        .estimate(&asset, &benchmark, 0.04)
        .unwrap();

    assert_eq!(coerced.expected_return, arithmetic.expected_return);
    assert_eq!(coerced.beta, arithmetic.beta);
    assert_eq!(coerced.warnings.len(), 1);
    assert!(arithmetic.warnings.is_empty());
}

#[test]
fn expected_return_identity_holds_across_configurations() {
    let market_returns = [0.012, -0.008, 0.02, 0.001, -0.014, 0.006];
    let asset_returns: Vec<f64> = market_returns.iter().map(|r| 0.8 * r + 0.001).collect();

    let asset = series_from_returns("SYN", 100.0, &asset_returns);
    let benchmark = series_from_returns("MKT", 4000.0, &market_returns);

    for use_log in [false, true] {
        for method in ["arithmetic", "geometric"] {
            let estimate = CapmEstimator::from_args(252, use_log, method)
                .estimate(&asset, &benchmark, 0.035)
                .unwrap();

            assert_eq!(
                estimate.expected_return,
                0.035 + estimate.beta * estimate.market_risk_premium
            );
        }
    }
}

//! Renders a CAPM report in every supported format from synthetic data.

use cascais_capm::{CapmEstimator, PriceSeries};
use cascais_output::CapmReport;
use chrono::NaiveDate;

fn main() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();

    let mut market_prices = vec![4000.0];
    let mut asset_prices = vec![100.0];
    for t in 0..126 {
        let t_f = t as f64;
        let market_return = 0.0003 + 0.01 * (t_f * 0.2).sin();
        let asset_return = 1.15 * market_return + 0.0002;
        market_prices.push(market_prices.last().unwrap() * (1.0 + market_return));
        asset_prices.push(asset_prices.last().unwrap() * (1.0 + asset_return));
    }

    let dates: Vec<NaiveDate> = (0..market_prices.len())
        .map(|i| start + chrono::Days::new(i as u64))
        .collect();
    let benchmark = PriceSeries::from_parts("^GSPC", dates.clone(), market_prices);
    let asset = PriceSeries::from_parts("DEMO", dates.clone(), asset_prices);

    let estimator = CapmEstimator::from_args(252, false, "geometric");
    let estimate = estimator
        .estimate(&asset, &benchmark, 0.04)
        .expect("synthetic data is well-formed");

    let report = CapmReport::new(
        "DEMO".to_string(),
        "^GSPC".to_string(),
        *dates.first().unwrap(),
        *dates.last().unwrap(),
        0.04,
        estimate,
    );

    println!("{}", report.to_ascii_table());
    println!("{}", report.to_markdown());
    println!("{}", report.to_json().expect("report serializes"));
}

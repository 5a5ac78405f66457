//! Price series primitives and date alignment.
//!
//! A [`PriceSeries`] is the unit of input to the estimator: one symbol's
//! daily price history, sorted by date with no duplicate dates. Two series
//! are intersected by [`align`] before any return is computed, so the
//! estimator only ever sees same-date observations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single (date, price) observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Price at that date (adjusted close for equity data).
    pub price: f64,
}

/// Daily price history for one symbol, ordered by date.
///
/// The constructor normalizes its input: points are sorted by date and
/// duplicate dates are collapsed, keeping the last observation for a date
/// (vendor corrections arrive later in a feed). After construction dates
/// are strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a normalized price series from raw observations.
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        // dedup_by_key keeps the first of each run; reverse so the last
        // observation for a date survives.
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();

        Self {
            symbol: symbol.into(),
            points,
        }
    }

    /// Create a series from parallel date and price vectors.
    ///
    /// Extra entries in the longer vector are ignored.
    pub fn from_parts(symbol: impl Into<String>, dates: Vec<NaiveDate>, prices: Vec<f64>) -> Self {
        let points = dates
            .into_iter()
            .zip(prices)
            .map(|(date, price)| PricePoint { date, price })
            .collect();
        Self::new(symbol, points)
    }

    /// The symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The observations, sorted by date.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Two price series intersected onto their common dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedPrices {
    /// Common observation dates.
    pub dates: Vec<NaiveDate>,
    /// Asset prices on those dates.
    pub asset: Vec<f64>,
    /// Benchmark prices on those dates.
    pub benchmark: Vec<f64>,
}

impl AlignedPrices {
    /// Number of aligned rows.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether no rows survived the intersection.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Intersect two price series by date.
///
/// Dates present in only one series are dropped, as are rows where either
/// price is non-finite (the vendor's way of marking a missing value). Both
/// inputs are already sorted, so this is a single merge pass.
pub fn align(asset: &PriceSeries, benchmark: &PriceSeries) -> AlignedPrices {
    let a = asset.points();
    let b = benchmark.points();

    let mut dates = Vec::new();
    let mut asset_prices = Vec::new();
    let mut benchmark_prices = Vec::new();

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].date.cmp(&b[j].date) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if a[i].price.is_finite() && b[j].price.is_finite() {
                    dates.push(a[i].date);
                    asset_prices.push(a[i].price);
                    benchmark_prices.push(b[j].price);
                }
                i += 1;
                j += 1;
            }
        }
    }

    AlignedPrices {
        dates,
        asset: asset_prices,
        benchmark: benchmark_prices,
    }
}

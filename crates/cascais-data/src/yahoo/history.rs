//! Price history fetching from Yahoo Finance.

use crate::error::{DataError, Result};
use cascais_capm::{PricePoint, PriceSeries};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::time::sleep;
use yahoo_finance_api as yahoo;

/// Yahoo Finance price history provider with rate limiting.
pub struct YahooHistoryProvider {
    provider: yahoo::YahooConnector,
    rate_limit_delay: Duration,
}

impl std::fmt::Debug for YahooHistoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooHistoryProvider")
            .field("rate_limit_delay", &self.rate_limit_delay)
            .finish_non_exhaustive()
    }
}

impl YahooHistoryProvider {
    /// Create a new Yahoo Finance history provider with default rate limiting (1 req/sec).
    pub fn new() -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay: Duration::from_millis(1000),
        }
    }

    /// Create a new Yahoo Finance history provider with custom rate limiting.
    pub fn with_rate_limit(rate_limit_delay: Duration) -> Self {
        Self {
            provider: yahoo::YahooConnector::new().expect("Failed to create Yahoo connector"),
            rate_limit_delay,
        }
    }

    /// Fetch the daily adjusted-close price history for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - The ticker symbol (e.g., "MSFT")
    /// * `start` - Start date for the history
    /// * `end` - End date for the history
    ///
    /// # Returns
    /// A `PriceSeries` of daily adjusted closes, sorted by date. Quotes the
    /// vendor could not price (zero or non-finite adjusted close) are
    /// dropped here; downstream alignment never sees them.
    pub async fn fetch_price_series(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        // Validate date range
        if start > end {
            return Err(DataError::InvalidDateRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        // Validate symbol
        if symbol.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol".to_string()));
        }

        // Convert chrono DateTime to time::OffsetDateTime
        let start_time = time::OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;
        let end_time = time::OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| DataError::TimeConversion(e.to_string()))?;

        // Fetch data from Yahoo Finance
        let response = self
            .provider
            .get_quote_history(symbol, start_time, end_time)
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::YahooApi(e.to_string()))?;

        if quotes.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No data returned from Yahoo Finance".to_string(),
            });
        }

        let points: Vec<PricePoint> = quotes
            .iter()
            .filter(|q| q.adjclose.is_finite() && q.adjclose > 0.0)
            .filter_map(|q| {
                DateTime::from_timestamp(q.timestamp, 0).map(|ts| PricePoint {
                    date: ts.date_naive(),
                    price: q.adjclose,
                })
            })
            .collect();

        if points.is_empty() {
            return Err(DataError::MissingData {
                symbol: symbol.to_string(),
                reason: "No usable adjusted closes in response".to_string(),
            });
        }

        let series = PriceSeries::new(symbol, points);

        // Apply rate limiting
        sleep(self.rate_limit_delay).await;

        Ok(series)
    }

    /// Fetch the two inputs of one CAPM run: asset first, then benchmark.
    ///
    /// Fetches are sequential so the provider's rate limiting applies
    /// between them. Either failure aborts the pair.
    pub async fn fetch_pair(
        &self,
        asset: &str,
        benchmark: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(PriceSeries, PriceSeries)> {
        let asset_series = self.fetch_price_series(asset, start, end).await?;
        let benchmark_series = self.fetch_price_series(benchmark, start, end).await?;

        Ok((asset_series, benchmark_series))
    }
}

impl Default for YahooHistoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

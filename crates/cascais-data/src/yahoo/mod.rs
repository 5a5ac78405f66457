//! Yahoo Finance data providers.

pub mod history;

pub use history::YahooHistoryProvider;

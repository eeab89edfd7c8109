//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! This struct is the standard output for all
//! [`MarketDataProvider`](crate::providers::MarketDataProvider) implementations,
//! regardless of asset class (stocks, crypto, etc.).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time-series bar (OHLCV) for a given timestamp.
///
/// This struct is vendor-agnostic; values are carried through from the
/// upstream feed without unit conversion or ordering checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// The timestamp for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the bar interval. Fractional for crypto feeds.
    pub volume: f64,

    /// Number of trades aggregated into the bar.
    pub trade_count: u64,

    /// Volume-weighted average price.
    pub vwap: f64,
}

/// One page of historical bars for a single symbol.
///
/// The pagination token is decoded and surfaced here, but the adapter never
/// follows it; paging is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPage {
    /// Bars in the order the upstream feed returned them.
    pub bars: Vec<Bar>,

    /// Token for the next page, when the upstream reports one.
    pub next_page_token: Option<String>,
}

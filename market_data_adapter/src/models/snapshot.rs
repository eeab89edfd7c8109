//! Composite point-in-time view of a symbol.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{bar::Bar, quote::Quote};

/// A single executed trade, as embedded in a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade price.
    pub price: f64,

    /// Trade size. Fractional for crypto feeds.
    pub size: f64,

    /// Trade timestamp (UTC).
    pub timestamp: DateTime<Utc>,
}

/// Latest trade, latest quote, and several bar granularities for one symbol.
///
/// Snapshots are not incrementally updated; each one is built fresh from a
/// single upstream response. Every sub-object is optional: the upstream feed
/// omits granularities it has no data for (a newly listed instrument has no
/// previous daily bar, a quiet symbol may have no minute bar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The symbol this snapshot describes.
    pub symbol: String,

    /// Most recent trade.
    pub latest_trade: Option<Trade>,

    /// Most recent quote.
    pub latest_quote: Option<Quote>,

    /// Current minute bar.
    pub minute_bar: Option<Bar>,

    /// Current daily bar.
    pub daily_bar: Option<Bar>,

    /// Previous trading day's bar.
    pub prev_daily_bar: Option<Bar>,
}

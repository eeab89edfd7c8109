//! Canonical best bid/ask quote for a symbol at a point in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best bid and ask for a symbol.
///
/// The upstream feed identifies these fields by abbreviated keys; the raw
/// quote carries no symbol of its own, so the symbol is attached from the
/// request context when the quote is mapped. No bid <= ask invariant is
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The symbol this quote belongs to.
    pub symbol: String,

    /// Best bid price.
    pub bid_price: f64,

    /// Size available at the best bid. Fractional for crypto feeds.
    pub bid_size: f64,

    /// Best ask price.
    pub ask_price: f64,

    /// Size available at the best ask. Fractional for crypto feeds.
    pub ask_size: f64,

    /// Quote timestamp (UTC).
    pub timestamp: DateTime<Utc>,
}

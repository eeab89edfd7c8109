//! Raw wire types for the Alpaca data API, and their canonical mappings.
//!
//! The upstream abbreviates field names (`t`/`o`/`h`/`l`/`c`/`v`/`n`/`vw`
//! for bars, `ap`/`as`/`bp`/`bs` for quotes) and keys snapshot sub-objects
//! in camelCase. Everything here is a plain rename; values pass through
//! verbatim.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::models::{
    bar::Bar,
    quote::Quote,
    snapshot::{Snapshot, Trade},
};

#[derive(Deserialize, Debug)]
pub struct AlpacaBar {
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "n")]
    pub trade_count: u64,
    #[serde(rename = "vw")]
    pub vwap: f64,
}

/// A raw quote. Carries no symbol; the caller supplies it when mapping.
#[derive(Deserialize, Debug)]
pub struct AlpacaQuote {
    #[serde(rename = "ap")]
    pub ask_price: f64,
    #[serde(rename = "as")]
    pub ask_size: f64,
    #[serde(rename = "bp")]
    pub bid_price: f64,
    #[serde(rename = "bs")]
    pub bid_size: f64,
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize, Debug)]
pub struct AlpacaTrade {
    #[serde(rename = "p")]
    pub price: f64,
    #[serde(rename = "s")]
    pub size: f64,
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
}

/// A raw snapshot body. Sub-objects the upstream has no data for are
/// simply absent.
#[derive(Deserialize, Debug)]
pub struct AlpacaSnapshot {
    #[serde(rename = "latestTrade")]
    pub latest_trade: Option<AlpacaTrade>,
    #[serde(rename = "latestQuote")]
    pub latest_quote: Option<AlpacaQuote>,
    #[serde(rename = "minuteBar")]
    pub minute_bar: Option<AlpacaBar>,
    #[serde(rename = "dailyBar")]
    pub daily_bar: Option<AlpacaBar>,
    #[serde(rename = "prevDailyBar")]
    pub prev_daily_bar: Option<AlpacaBar>,
}

/// The `bars` field of a historical-bars response.
///
/// The upstream sends either a bare array or a map keyed by symbol; the
/// untagged enum tries both, which is the whole shape decision for this
/// endpoint.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum BarsPayload {
    Flat(Vec<AlpacaBar>),
    Keyed(IndexMap<String, Vec<AlpacaBar>>),
}

#[derive(Deserialize, Debug)]
pub struct BarsResponse {
    /// Missing or null when the upstream has no data for the range.
    #[serde(default)]
    pub bars: Option<BarsPayload>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LatestBarsResponse {
    #[serde(default)]
    pub bars: IndexMap<String, AlpacaBar>,
}

#[derive(Deserialize, Debug)]
pub struct LatestQuotesResponse {
    #[serde(default)]
    pub quotes: IndexMap<String, AlpacaQuote>,
}

/// The crypto snapshots endpoint wraps its per-symbol map one level down,
/// unlike the equities endpoints.
#[derive(Deserialize, Debug)]
pub struct CryptoSnapshotsResponse {
    #[serde(default)]
    pub snapshots: IndexMap<String, AlpacaSnapshot>,
}

impl From<AlpacaBar> for Bar {
    fn from(raw: AlpacaBar) -> Self {
        Bar {
            timestamp: raw.timestamp,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume: raw.volume,
            trade_count: raw.trade_count,
            vwap: raw.vwap,
        }
    }
}

impl From<AlpacaTrade> for Trade {
    fn from(raw: AlpacaTrade) -> Self {
        Trade {
            price: raw.price,
            size: raw.size,
            timestamp: raw.timestamp,
        }
    }
}

/// Attaches the request symbol to a raw quote.
pub fn map_quote(symbol: &str, raw: AlpacaQuote) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        bid_price: raw.bid_price,
        bid_size: raw.bid_size,
        ask_price: raw.ask_price,
        ask_size: raw.ask_size,
        timestamp: raw.timestamp,
    }
}

/// Composes the trade, quote and bar mappers over one raw snapshot.
pub fn map_snapshot(symbol: &str, raw: AlpacaSnapshot) -> Snapshot {
    Snapshot {
        symbol: symbol.to_string(),
        latest_trade: raw.latest_trade.map(Trade::from),
        latest_quote: raw.latest_quote.map(|quote| map_quote(symbol, quote)),
        minute_bar: raw.minute_bar.map(Bar::from),
        daily_bar: raw.daily_bar.map(Bar::from),
        prev_daily_bar: raw.prev_daily_bar.map(Bar::from),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bar_mapping_preserves_every_field() {
        let raw: AlpacaBar = serde_json::from_value(json!({
            "t": "2024-01-02T05:00:00Z",
            "o": 187.15,
            "h": 188.44,
            "l": 183.89,
            "c": 185.64,
            "v": 82488700.0,
            "n": 1009074,
            "vw": 185.937347
        }))
        .unwrap();

        let bar = Bar::from(raw);
        assert_eq!(bar.timestamp.to_rfc3339(), "2024-01-02T05:00:00+00:00");
        assert_eq!(bar.open, 187.15);
        assert_eq!(bar.high, 188.44);
        assert_eq!(bar.low, 183.89);
        assert_eq!(bar.close, 185.64);
        assert_eq!(bar.volume, 82488700.0);
        assert_eq!(bar.trade_count, 1009074);
        assert_eq!(bar.vwap, 185.937347);
    }

    #[test]
    fn quote_mapping_renames_abbreviated_fields() {
        let raw: AlpacaQuote = serde_json::from_value(json!({
            "ap": 150.2, "as": 1, "bp": 150.1, "bs": 2, "t": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let quote = map_quote("AAPL", raw);
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.bid_price, 150.1);
        assert_eq!(quote.bid_size, 2.0);
        assert_eq!(quote.ask_price, 150.2);
        assert_eq!(quote.ask_size, 1.0);
    }

    #[test]
    fn bars_payload_decodes_both_shapes() {
        let flat: BarsPayload = serde_json::from_value(json!([
            {"t": "2024-01-02T05:00:00Z", "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5, "v": 10.0, "n": 3, "vw": 1.2}
        ]))
        .unwrap();
        assert!(matches!(flat, BarsPayload::Flat(ref bars) if bars.len() == 1));

        let keyed: BarsPayload = serde_json::from_value(json!({
            "TSLA": [
                {"t": "2024-01-02T05:00:00Z", "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5, "v": 10.0, "n": 3, "vw": 1.2}
            ]
        }))
        .unwrap();
        assert!(matches!(keyed, BarsPayload::Keyed(ref by_symbol) if by_symbol.contains_key("TSLA")));
    }

    #[test]
    fn bars_response_tolerates_null_and_missing_bars() {
        let null_bars: BarsResponse = serde_json::from_value(json!({"bars": null})).unwrap();
        assert!(null_bars.bars.is_none());

        let missing: BarsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(missing.bars.is_none());
        assert!(missing.next_page_token.is_none());
    }

    #[test]
    fn snapshot_sub_objects_are_optional() {
        let raw: AlpacaSnapshot = serde_json::from_value(json!({
            "latestTrade": {"p": 100.0, "s": 5, "t": "2024-01-01T00:00:00Z"}
        }))
        .unwrap();

        let snapshot = map_snapshot("NEWLY", raw);
        assert_eq!(snapshot.symbol, "NEWLY");
        assert!(snapshot.latest_trade.is_some());
        assert!(snapshot.latest_quote.is_none());
        assert!(snapshot.prev_daily_bar.is_none());
    }

    #[test]
    fn crypto_sizes_may_be_fractional() {
        let raw: AlpacaTrade = serde_json::from_value(json!({
            "p": 64123.5, "s": 0.0009, "t": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(Trade::from(raw).size, 0.0009);
    }
}

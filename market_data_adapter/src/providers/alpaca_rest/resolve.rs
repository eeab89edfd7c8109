//! Per-endpoint response shape resolution.
//!
//! The upstream varies its envelope silently: historical bars arrive as a
//! bare array or a per-symbol map, equities snapshots as a bare object or a
//! keyed map, crypto snapshots wrapped one level down. Each endpoint class
//! gets exactly one resolver here, so no call site ever inspects raw JSON.
//! "No data" is an empty collection for ranges and bulk lookups, but an
//! error for single-symbol lookups.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::OptionExt;
use tracing::debug;

use crate::providers::{DecodeSnafu, NotFoundSnafu, ProviderError, SnapshotMissingSnafu};

use super::response::{
    AlpacaBar, AlpacaQuote, AlpacaSnapshot, BarsPayload, BarsResponse, CryptoSnapshotsResponse,
    LatestBarsResponse, LatestQuotesResponse,
};

fn decode<T: DeserializeOwned>(endpoint: &'static str, value: Value) -> Result<T, ProviderError> {
    serde_json::from_value(value).map_err(|e| {
        DecodeSnafu {
            endpoint,
            message: e.to_string(),
        }
        .build()
    })
}

/// Historical bars: `{bars: [..]}` or `{bars: {SYM: [..]}}`.
///
/// A missing, null or empty `bars` field means "no data", never an error.
/// In the keyed form, only the requested symbol's entry is taken.
pub fn bars(
    value: Value,
    symbol: &str,
) -> Result<(Vec<AlpacaBar>, Option<String>), ProviderError> {
    let response: BarsResponse = decode("historical bars", value)?;
    let bars = match response.bars {
        None => Vec::new(),
        Some(BarsPayload::Flat(bars)) => bars,
        Some(BarsPayload::Keyed(mut by_symbol)) => {
            by_symbol.swap_remove(symbol).unwrap_or_default()
        }
    };
    Ok((bars, response.next_page_token))
}

/// Latest bar for one symbol: `{bars: {SYM: bar}}`, absent key is an error.
pub fn latest_bar(value: Value, symbol: &str) -> Result<AlpacaBar, ProviderError> {
    let mut response: LatestBarsResponse = decode("latest bar", value)?;
    response.bars.swap_remove(symbol).context(NotFoundSnafu { symbol })
}

/// Latest bars for several symbols; absent symbols are simply not present.
pub fn latest_bars(value: Value) -> Result<IndexMap<String, AlpacaBar>, ProviderError> {
    let response: LatestBarsResponse = decode("latest bars", value)?;
    Ok(response.bars)
}

/// Latest quote for one symbol: `{quotes: {SYM: quote}}`, absent key is an
/// error.
pub fn latest_quote(value: Value, symbol: &str) -> Result<AlpacaQuote, ProviderError> {
    let mut response: LatestQuotesResponse = decode("latest quote", value)?;
    response
        .quotes
        .swap_remove(symbol)
        .context(NotFoundSnafu { symbol })
}

/// Latest quotes for several symbols; absent symbols are simply not present.
pub fn latest_quotes(value: Value) -> Result<IndexMap<String, AlpacaQuote>, ProviderError> {
    let response: LatestQuotesResponse = decode("latest quotes", value)?;
    Ok(response.quotes)
}

/// Equities snapshot: a bare snapshot body or `{SYM: snapshot}`.
///
/// The payload carries no type discriminant, so the bare form is detected
/// structurally by the `latestTrade` key; anything else is read as a keyed
/// map. When neither interpretation yields the symbol, the lookup fails
/// with the market-may-be-closed hint.
pub fn snapshot(value: Value, symbol: &str) -> Result<AlpacaSnapshot, ProviderError> {
    if value.get("latestTrade").is_some() {
        return decode("snapshot", value);
    }

    debug!(symbol, "snapshot response is not a bare body; trying keyed map");
    let keyed: Option<IndexMap<String, AlpacaSnapshot>> = serde_json::from_value(value).ok();
    keyed
        .and_then(|mut by_symbol| by_symbol.swap_remove(symbol))
        .context(SnapshotMissingSnafu { symbol })
}

/// Crypto snapshot: always wrapped under a `snapshots` map, never read from
/// the top level.
pub fn crypto_snapshot(value: Value, symbol: &str) -> Result<AlpacaSnapshot, ProviderError> {
    let mut response: CryptoSnapshotsResponse = decode("crypto snapshot", value)?;
    response
        .snapshots
        .swap_remove(symbol)
        .context(NotFoundSnafu { symbol })
}

/// Bulk equities snapshots: a top-level map keyed by symbol.
pub fn snapshots(value: Value) -> Result<IndexMap<String, AlpacaSnapshot>, ProviderError> {
    decode("snapshots", value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn one_bar() -> Value {
        json!({"t": "2024-01-02T05:00:00Z", "o": 1.0, "h": 2.0, "l": 0.5, "c": 1.5, "v": 10.0, "n": 3, "vw": 1.2})
    }

    fn one_snapshot() -> Value {
        json!({
            "latestTrade": {"p": 100.0, "s": 5, "t": "2024-01-01T00:00:00Z"},
            "dailyBar": one_bar()
        })
    }

    #[test]
    fn bars_extracts_only_the_requested_symbol_from_keyed_maps() {
        let value = json!({"bars": {"TSLA": [one_bar()], "AAPL": [one_bar(), one_bar()]}});
        let (bars, _) = bars(value, "TSLA").unwrap();
        assert_eq!(bars.len(), 1);
    }

    #[test]
    fn bars_treats_null_missing_and_empty_as_no_data() {
        for value in [
            json!({"bars": null}),
            json!({}),
            json!({"bars": []}),
            json!({"bars": {}}),
        ] {
            let (bars, token) = bars(value, "TSLA").unwrap();
            assert!(bars.is_empty());
            assert!(token.is_none());
        }
    }

    #[test]
    fn bars_surfaces_the_page_token() {
        let value = json!({"bars": [one_bar()], "next_page_token": "abc123"});
        let (_, token) = bars(value, "TSLA").unwrap();
        assert_eq!(token.as_deref(), Some("abc123"));
    }

    #[test]
    fn latest_bar_fails_for_absent_key_even_with_other_symbols_present() {
        let value = json!({"bars": {"MSFT": one_bar()}});
        let err = latest_bar(value, "AAPL").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { ref symbol, .. } if symbol == "AAPL"));
        assert!(err.to_string().contains("AAPL"));
    }

    #[test]
    fn snapshot_accepts_a_bare_body() {
        let resolved = snapshot(one_snapshot(), "AAPL").unwrap();
        assert!(resolved.latest_trade.is_some());
        assert!(resolved.daily_bar.is_some());
    }

    #[test]
    fn snapshot_falls_back_to_a_keyed_map() {
        let resolved = snapshot(json!({"AAPL": one_snapshot()}), "AAPL").unwrap();
        assert!(resolved.latest_trade.is_some());
    }

    #[test]
    fn snapshot_failure_notes_the_market_may_be_closed() {
        let err = snapshot(json!({}), "AAPL").unwrap_err();
        assert!(matches!(err, ProviderError::SnapshotMissing { .. }));
        let message = err.to_string();
        assert!(message.contains("AAPL"));
        assert!(message.contains("market may be closed"));
    }

    #[test]
    fn crypto_snapshot_reads_only_the_nested_map() {
        // A snapshot-shaped body at the top level must not satisfy the
        // crypto path; the data lives under "snapshots".
        let err = crypto_snapshot(one_snapshot(), "BTC/USD").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound { .. }));

        let value = json!({"snapshots": {"BTC/USD": one_snapshot()}});
        let resolved = crypto_snapshot(value, "BTC/USD").unwrap();
        assert!(resolved.latest_trade.is_some());
    }

    #[test]
    fn bulk_resolvers_keep_only_what_the_upstream_returned() {
        let value = json!({"bars": {"AAPL": one_bar()}});
        let bars = latest_bars(value).unwrap();
        assert_eq!(bars.len(), 1);
        assert!(bars.contains_key("AAPL"));

        let quotes = latest_quotes(json!({})).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn decode_failures_name_the_endpoint() {
        let err = bars(json!({"bars": 42}), "TSLA").unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
        assert!(err.to_string().contains("historical bars"));
    }
}

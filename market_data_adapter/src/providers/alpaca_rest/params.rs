//! Query-string construction for the Alpaca data endpoints.
//!
//! Unset optional parameters are never pushed, so nothing undefined reaches
//! the transport. Symbol lists are joined with commas; symbols that land in
//! a path segment are percent-encoded by the caller.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{request_params::BarsParams, timeframe::TimeFrame};

fn rfc3339(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Builds the query for a historical bars request.
pub fn bars_query(timeframe: &TimeFrame, params: &BarsParams) -> Vec<(String, String)> {
    let mut query = vec![("timeframe".to_string(), timeframe.to_string())];

    if let Some(start) = &params.start {
        query.push(("start".to_string(), rfc3339(start)));
    }
    if let Some(end) = &params.end {
        query.push(("end".to_string(), rfc3339(end)));
    }
    if let Some(limit) = params.limit {
        query.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(adjustment) = &params.adjustment {
        query.push(("adjustment".to_string(), adjustment.as_str().to_string()));
    }
    if let Some(feed) = &params.feed {
        query.push(("feed".to_string(), feed.as_str().to_string()));
    }

    query
}

/// Builds the `symbols=a,b,c` query for bulk endpoints.
pub fn symbols_query(symbols: &[String]) -> Vec<(String, String)> {
    vec![("symbols".to_string(), symbols.join(","))]
}

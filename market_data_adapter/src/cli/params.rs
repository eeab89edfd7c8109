use chrono::{DateTime, Utc};

use crate::errors::Error;
use crate::models::request_params::{Adjustment, Feed};

pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidArgument(format!("Invalid ISO8601 datetime: {s}")))
}

pub fn parse_adjustment(s: &str) -> Result<Adjustment, Error> {
    match s.trim().to_lowercase().as_str() {
        "raw" => Ok(Adjustment::Raw),
        "split" => Ok(Adjustment::Split),
        "dividend" => Ok(Adjustment::Dividend),
        "all" => Ok(Adjustment::All),
        other => Err(Error::InvalidArgument(format!(
            "Invalid adjustment: {other}"
        ))),
    }
}

pub fn parse_feed(s: &str) -> Result<Feed, Error> {
    match s.trim().to_lowercase().as_str() {
        "sip" => Ok(Feed::Sip),
        "iex" => Ok(Feed::Iex),
        "otc" => Ok(Feed::Otc),
        other => Err(Error::InvalidArgument(format!("Invalid feed: {other}"))),
    }
}

pub fn split_symbols(s: &str) -> Vec<String> {
    s.split(',')
        .map(|symbol| symbol.trim().to_string())
        .filter(|symbol| !symbol.is_empty())
        .collect()
}

//! Provider abstraction for market data sources.
//!
//! This module defines the [`MarketDataProvider`] trait, the capability
//! surface a trading agent consumes: one method per market-data query, each
//! returning canonical values regardless of the upstream wire shape.
//!
//! Concrete adapters (such as
//! [`AlpacaMarketData`](alpaca_rest::provider::AlpacaMarketData)) implement
//! the trait over a [`Transport`](crate::transport::Transport), so an
//! alternate upstream can be substituted by composition rather than
//! inheritance. The trait supports dynamic dispatch
//! (`dyn MarketDataProvider`) for runtime selection.

pub mod alpaca_rest;

use async_trait::async_trait;
use indexmap::IndexMap;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

use crate::models::{
    bar::{Bar, BarPage},
    quote::Quote,
    request_params::BarsParams,
    snapshot::Snapshot,
    timeframe::TimeFrame,
};
use crate::transport::TransportError;

/// Capability contract for market-data queries.
///
/// Single-symbol "latest" lookups fail with [`ProviderError::NotFound`] when
/// the symbol is absent from an otherwise successful response. Bulk lookups
/// never fail for individually missing symbols; the returned map's key set
/// is a subset of the requested symbols. Historical bars report "no data"
/// as an empty page, not an error.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches historical bars for one symbol, in upstream order.
    ///
    /// The page may be empty. A pagination token, when present upstream, is
    /// surfaced on the page but never followed.
    async fn get_bars(
        &self,
        symbol: &str,
        timeframe: &TimeFrame,
        params: &BarsParams,
    ) -> Result<BarPage, ProviderError>;

    /// Fetches the most recent bar for one symbol.
    async fn get_latest_bar(&self, symbol: &str) -> Result<Bar, ProviderError>;

    /// Fetches the most recent bar for several symbols at once.
    async fn get_latest_bars(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Bar>, ProviderError>;

    /// Fetches the latest quote for one symbol.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, ProviderError>;

    /// Fetches the latest quote for several symbols at once.
    async fn get_quotes(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Quote>, ProviderError>;

    /// Fetches the equities snapshot for one symbol.
    async fn get_snapshot(&self, symbol: &str) -> Result<Snapshot, ProviderError>;

    /// Fetches the crypto snapshot for one symbol.
    async fn get_crypto_snapshot(&self, symbol: &str) -> Result<Snapshot, ProviderError>;

    /// Fetches equities snapshots for several symbols at once.
    async fn get_snapshots(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Snapshot>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// missed environment variable.
    #[snafu(display("Missing environment variable: {source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// API key contains invalid characters.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a [`MarketDataProvider`] implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// A failure from the transport collaborator, propagated unchanged.
    #[snafu(display("API request failed: {source}"))]
    Transport {
        #[snafu(backtrace)]
        source: TransportError,
    },

    /// A single-symbol lookup whose symbol the upstream has no entry for.
    #[snafu(display("no data found for symbol {symbol}"))]
    NotFound {
        symbol: String,
        backtrace: Backtrace,
    },

    /// An equities snapshot lookup that yielded no data. Absence here
    /// commonly correlates with non-trading hours.
    #[snafu(display("no snapshot for symbol {symbol}: market may be closed"))]
    SnapshotMissing {
        symbol: String,
        backtrace: Backtrace,
    },

    /// A successful response whose payload matches no known shape for the
    /// endpoint.
    #[snafu(display("unexpected {endpoint} response shape: {message}"))]
    Decode {
        endpoint: &'static str,
        message: String,
        backtrace: Backtrace,
    },
}

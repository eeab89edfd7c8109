use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::Method;
use serde_json::Value;
use snafu::ResultExt;

use crate::models::{
    bar::{Bar, BarPage},
    quote::Quote,
    request_params::BarsParams,
    snapshot::Snapshot,
    timeframe::TimeFrame,
};
use crate::providers::{MarketDataProvider, ProviderError, ProviderInitError, TransportSnafu};
use crate::transport::{HttpTransport, Transport};

use super::params::{bars_query, symbols_query};
use super::resolve;
use super::response::{map_quote, map_snapshot};

/// Alpaca-backed [`MarketDataProvider`].
///
/// Stateless apart from the transport it owns: every operation issues
/// exactly one request, resolves the response shape, and maps the raw
/// entities to canonical models. Concurrent calls are fully independent.
pub struct AlpacaMarketData<T = HttpTransport> {
    transport: T,
}

impl AlpacaMarketData<HttpTransport> {
    /// Creates a provider whose transport authenticates from the
    /// `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY` environment variables.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        Ok(Self::new(HttpTransport::from_env()?))
    }
}

impl<T: Transport> AlpacaMarketData<T> {
    /// Creates a provider over an existing transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The injected transport collaborator.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn issue(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Value, ProviderError> {
        self.transport
            .issue(Method::GET, path, &query)
            .await
            .context(TransportSnafu)
    }
}

#[async_trait]
impl<T: Transport> MarketDataProvider for AlpacaMarketData<T> {
    async fn get_bars(
        &self,
        symbol: &str,
        timeframe: &TimeFrame,
        params: &BarsParams,
    ) -> Result<BarPage, ProviderError> {
        let path = format!("/v2/stocks/{}/bars", urlencoding::encode(symbol));
        let value = self.issue(&path, bars_query(timeframe, params)).await?;

        let (raw_bars, next_page_token) = resolve::bars(value, symbol)?;
        Ok(BarPage {
            bars: raw_bars.into_iter().map(Bar::from).collect(),
            next_page_token,
        })
    }

    async fn get_latest_bar(&self, symbol: &str) -> Result<Bar, ProviderError> {
        let path = format!("/v2/stocks/{}/bars/latest", urlencoding::encode(symbol));
        let value = self.issue(&path, Vec::new()).await?;
        resolve::latest_bar(value, symbol).map(Bar::from)
    }

    async fn get_latest_bars(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Bar>, ProviderError> {
        let value = self
            .issue("/v2/stocks/bars/latest", symbols_query(symbols))
            .await?;

        Ok(resolve::latest_bars(value)?
            .into_iter()
            .map(|(symbol, raw)| (symbol, Bar::from(raw)))
            .collect())
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, ProviderError> {
        let path = format!("/v2/stocks/{}/quotes/latest", urlencoding::encode(symbol));
        let value = self.issue(&path, Vec::new()).await?;
        resolve::latest_quote(value, symbol).map(|raw| map_quote(symbol, raw))
    }

    async fn get_quotes(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Quote>, ProviderError> {
        let value = self
            .issue("/v2/stocks/quotes/latest", symbols_query(symbols))
            .await?;

        Ok(resolve::latest_quotes(value)?
            .into_iter()
            .map(|(symbol, raw)| {
                let quote = map_quote(&symbol, raw);
                (symbol, quote)
            })
            .collect())
    }

    async fn get_snapshot(&self, symbol: &str) -> Result<Snapshot, ProviderError> {
        let path = format!("/v2/stocks/{}/snapshot", urlencoding::encode(symbol));
        let value = self.issue(&path, Vec::new()).await?;
        resolve::snapshot(value, symbol).map(|raw| map_snapshot(symbol, raw))
    }

    async fn get_crypto_snapshot(&self, symbol: &str) -> Result<Snapshot, ProviderError> {
        let value = self
            .issue(
                "/v1beta3/crypto/us/snapshots",
                vec![("symbols".to_string(), symbol.to_string())],
            )
            .await?;

        resolve::crypto_snapshot(value, symbol).map(|raw| map_snapshot(symbol, raw))
    }

    async fn get_snapshots(
        &self,
        symbols: &[String],
    ) -> Result<IndexMap<String, Snapshot>, ProviderError> {
        let value = self
            .issue("/v2/stocks/snapshots", symbols_query(symbols))
            .await?;

        Ok(resolve::snapshots(value)?
            .into_iter()
            .map(|(symbol, raw)| {
                let snapshot = map_snapshot(&symbol, raw);
                (symbol, snapshot)
            })
            .collect())
    }
}

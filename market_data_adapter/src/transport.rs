//! HTTP transport boundary.
//!
//! The facade issues every upstream request through the [`Transport`] trait,
//! so tests and alternate backends can substitute the network layer by
//! composition. [`HttpTransport`] is the production implementation: a
//! reqwest client carrying the upstream auth headers.
//!
//! This layer does no retries and sets no timeouts of its own; failures are
//! surfaced as [`TransportError`] and propagate to the caller unmodified.

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::debug;

use shared_utils::env::{get_env_var, get_env_var_or};

use crate::providers::{
    ClientBuildSnafu, InvalidApiKeySnafu, MissingEnvVarSnafu, ProviderInitError,
};

const DEFAULT_BASE_URL: &str = "https://data.alpaca.markets";

/// Errors that can occur while issuing a request.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TransportError {
    /// The request could not be sent or the connection failed mid-flight.
    #[snafu(display("request to {path} failed: {source}"))]
    Request {
        path: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The upstream returned a non-success status.
    #[snafu(display("upstream returned {status} for {path}: {body}"))]
    Status {
        path: String,
        status: StatusCode,
        body: String,
        backtrace: Backtrace,
    },

    /// The response body was not valid JSON.
    #[snafu(display("response body for {path} is not valid JSON: {source}"))]
    Body {
        path: String,
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Issues one HTTP request and returns the parsed JSON body.
///
/// Callers hand over only query parameters that are actually set, so unset
/// optionals never reach serialization.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, TransportError>;
}

/// reqwest-backed [`Transport`] with upstream auth headers installed.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Creates a transport authenticating with the given key pair.
    pub fn new(api_key: &SecretString, secret_key: &SecretString) -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(api_key.expose_secret()).context(InvalidApiKeySnafu)?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(secret_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Creates a transport from the environment.
    ///
    /// Reads API keys from the `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`
    /// environment variables; `APCA_API_DATA_URL` overrides the base URL.
    pub fn from_env() -> Result<Self, ProviderInitError> {
        let api_key =
            SecretString::new(get_env_var("APCA_API_KEY_ID").context(MissingEnvVarSnafu)?.into());
        let secret_key = SecretString::new(
            get_env_var("APCA_API_SECRET_KEY")
                .context(MissingEnvVarSnafu)?
                .into(),
        );

        let transport = Self::new(&api_key, &secret_key)?;
        Ok(transport.with_base_url(get_env_var_or("APCA_API_DATA_URL", DEFAULT_BASE_URL)))
    }

    /// Replaces the base URL, e.g. to point at a sandbox host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn issue(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "issuing market data request");

        let response = self
            .client
            .request(method, &url)
            .query(query)
            .send()
            .await
            .context(RequestSnafu { path })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return StatusSnafu { path, status, body }.fail();
        }

        response.json::<Value>().await.context(BodySnafu { path })
    }
}

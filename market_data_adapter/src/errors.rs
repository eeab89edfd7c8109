use thiserror::Error;

use crate::models::timeframe::TimeFrameError;
use crate::providers::{ProviderError, ProviderInitError};

/// The unified error type for the `market_data_adapter` crate.
///
/// Library consumers usually match on the specific error types; this enum
/// exists for binary and tool-layer consumers that need one error to bubble
/// up.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from a market data provider (transport, missing data, or an
    /// unrecognized response shape).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An error while constructing a provider instance.
    #[error("Provider initialization error: {0}")]
    Init(#[from] ProviderInitError),

    /// An invalid bar interval.
    #[error("Timeframe error: {0}")]
    Timeframe(#[from] TimeFrameError),

    /// A malformed command-line or tool argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A canonical value failed to serialize for output.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

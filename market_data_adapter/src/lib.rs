//! Market-data normalization adapter.
//!
//! Converts the Alpaca data API's inconsistent response shapes (per-symbol
//! maps, bare arrays, wrapped and unwrapped single objects) into one
//! canonical model of bars, quotes and snapshots. The public surface is the
//! [`MarketDataProvider`](providers::MarketDataProvider) trait; the Alpaca
//! implementation lives in [`providers::alpaca_rest`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
pub mod models;
pub mod providers;
pub mod transport;

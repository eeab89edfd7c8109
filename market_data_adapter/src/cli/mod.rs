//! Command-line front end over the provider facade.
//!
//! Each subcommand maps to one [`MarketDataProvider`] operation and prints
//! the canonical result as JSON.

pub mod commands;
pub mod params;

use serde_json::Value;

use crate::errors::Error;
use crate::models::{request_params::BarsParams, timeframe::TimeFrame};
use crate::providers::{MarketDataProvider, alpaca_rest::provider::AlpacaMarketData};

use commands::{Cli, Commands};
use params::{parse_adjustment, parse_datetime, parse_feed, split_symbols};

pub async fn run(cli: Cli) -> Result<(), Error> {
    let provider = AlpacaMarketData::from_env()?;
    let output = dispatch(&provider, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn dispatch(
    provider: &dyn MarketDataProvider,
    command: Commands,
) -> Result<Value, Error> {
    let value = match command {
        Commands::Bars {
            symbol,
            timeframe,
            start,
            end,
            limit,
            adjustment,
            feed,
        } => {
            let timeframe: TimeFrame = timeframe.parse()?;
            let params = BarsParams {
                start: start.as_deref().map(parse_datetime).transpose()?,
                end: end.as_deref().map(parse_datetime).transpose()?,
                limit,
                adjustment: adjustment.as_deref().map(parse_adjustment).transpose()?,
                feed: feed.as_deref().map(parse_feed).transpose()?,
            };
            serde_json::to_value(provider.get_bars(&symbol, &timeframe, &params).await?)?
        }
        Commands::LatestBar { symbol } => {
            serde_json::to_value(provider.get_latest_bar(&symbol).await?)?
        }
        Commands::LatestBars { symbols } => {
            serde_json::to_value(provider.get_latest_bars(&split_symbols(&symbols)).await?)?
        }
        Commands::Quote { symbol } => serde_json::to_value(provider.get_quote(&symbol).await?)?,
        Commands::Quotes { symbols } => {
            serde_json::to_value(provider.get_quotes(&split_symbols(&symbols)).await?)?
        }
        Commands::Snapshot { symbol } => {
            serde_json::to_value(provider.get_snapshot(&symbol).await?)?
        }
        Commands::CryptoSnapshot { symbol } => {
            serde_json::to_value(provider.get_crypto_snapshot(&symbol).await?)?
        }
        Commands::Snapshots { symbols } => {
            serde_json::to_value(provider.get_snapshots(&split_symbols(&symbols)).await?)?
        }
    };

    Ok(value)
}

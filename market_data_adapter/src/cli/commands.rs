use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch historical bars for a single symbol
    Bars {
        /// Symbol to query (e.g. "AAPL")
        #[arg(long)]
        symbol: String,

        /// Bar interval (e.g. "1Day", "5Min")
        #[arg(long, default_value = "1Day")]
        timeframe: String,

        /// Range start in ISO8601 format (e.g. "2025-01-01T09:30:00Z")
        #[arg(long)]
        start: Option<String>,

        /// Range end in ISO8601 format (e.g. "2025-01-30T16:00:00Z")
        #[arg(long)]
        end: Option<String>,

        /// Maximum number of bars
        #[arg(long)]
        limit: Option<u32>,

        /// Corporate action adjustment: raw, split, dividend, all
        #[arg(long)]
        adjustment: Option<String>,

        /// Source feed: sip, iex, otc
        #[arg(long)]
        feed: Option<String>,
    },

    /// Fetch the most recent bar for a single symbol
    LatestBar {
        #[arg(long)]
        symbol: String,
    },

    /// Fetch the most recent bar for several symbols
    LatestBars {
        /// Comma-separated list of symbols (e.g. "AAPL,MSFT")
        #[arg(long)]
        symbols: String,
    },

    /// Fetch the latest quote for a single symbol
    Quote {
        #[arg(long)]
        symbol: String,
    },

    /// Fetch the latest quote for several symbols
    Quotes {
        /// Comma-separated list of symbols (e.g. "AAPL,MSFT")
        #[arg(long)]
        symbols: String,
    },

    /// Fetch the equities snapshot for a single symbol
    Snapshot {
        #[arg(long)]
        symbol: String,
    },

    /// Fetch the crypto snapshot for a single symbol
    CryptoSnapshot {
        /// Crypto pair (e.g. "BTC/USD")
        #[arg(long)]
        symbol: String,
    },

    /// Fetch equities snapshots for several symbols
    Snapshots {
        /// Comma-separated list of symbols (e.g. "AAPL,MSFT")
        #[arg(long)]
        symbols: String,
    },
}

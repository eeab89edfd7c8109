use clap::Parser;

use market_data_adapter::cli::{self, commands::Cli};
use market_data_adapter::errors::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli::run(cli).await
}

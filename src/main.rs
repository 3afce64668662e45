#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tempfeel::Config;
use tempfeel::cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose > 0 {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {e}"))?;

    let config = Config::load_or_init()?;
    tempfeel::app::dispatch(cli, config).await
}

//! Binary entry point: parse the configuration, connect, run the greeting
//! loop, decide how to terminate.

use clap::Parser;
use greeter_client::{connect, run, ClientError, Config};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// How long the loop sleeps after each greeting, the final one included.
const PAUSE: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if let Err(err) = greet(&config).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn greet(config: &Config) -> Result<(), ClientError> {
    let channel = connect(config).await?;
    run(channel, config.name(), config.repeat, PAUSE).await?;
    Ok(())
}

mod app;
mod catalog;
mod cli;
mod config;
mod dashboard;
mod errors;
mod gateway;
mod identity;
mod models;
mod state;
mod submission;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;

    // Logs go to stderr so rendered views on stdout stay clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Hibret careers portal v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config)?;
    let output = cli::run(cli, state).await?;
    print!("{output}");

    Ok(())
}

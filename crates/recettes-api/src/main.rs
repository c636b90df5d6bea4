//! Recettes server
//!
//! Serves the recipe form and returns scaled ingredient bundles.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use recettes_api::cli::Args;
use recettes_api::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.resolve()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        documents_dir = %config.documents_dir.display(),
        "starting recettes"
    );

    Server::new(config).run().await?;
    Ok(())
}

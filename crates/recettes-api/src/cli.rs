//! Command-line arguments and their merge into [`ServerConfig`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::ServerConfig;
use crate::Result;

/// Recettes - scale a recipe by headcount and download it as a bundle
#[derive(Parser, Debug, Default)]
#[command(name = "recettes")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "RECETTES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "RECETTES_HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory of recipe documents
    #[arg(short, long, env = "RECETTES_DOCUMENTS_DIR")]
    pub documents_dir: Option<PathBuf>,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Load the configuration file (if any) and apply flag overrides.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let config = ServerConfig::load(self.config.as_deref())?;
        Ok(self.apply(config))
    }

    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.documents_dir {
            config.documents_dir = dir.clone();
        }
        config
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

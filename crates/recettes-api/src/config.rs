//! Server configuration.
//!
//! Values are resolved in three layers, later ones winning:
//! 1. Built-in defaults ([`ServerConfig::default`])
//! 2. An optional TOML file
//! 3. Command-line flags and environment variables (see [`crate::cli`])
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 5000
//! documents_dir = "recettes"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default directory of recipe documents, relative to the working directory.
pub const DEFAULT_DOCUMENTS_DIR: &str = "recettes";

/// Settings read once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding `<normalized recipe name>.pdf` documents.
    pub documents_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            documents_dir: PathBuf::from(DEFAULT_DOCUMENTS_DIR),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Load from a TOML file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| Error::config(format!("Invalid listen address {addr}: {e}")))
    }
}

//! HTTP server configuration object and settings.

use std::path::PathBuf;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use backend::domain::ports::SessionCatalog;
use backend::domain::{CatalogError, StaticCatalog};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Configuration values controlling the badge service at startup.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BADGE")]
pub struct Settings {
    /// Interface the HTTP server binds to.
    pub host: Option<String>,
    /// Port the HTTP server binds to.
    pub port: Option<u16>,
    /// Optional path to a JSON catalog document replacing the builtin
    /// program.
    pub catalog_path: Option<PathBuf>,
}

impl Settings {
    /// Return the configured bind host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured bind port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Assemble the session catalog: the injected document when a path is
    /// configured, the builtin program otherwise.
    pub fn catalog(&self) -> Result<StaticCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => StaticCatalog::from_json_file(path),
            None => Ok(StaticCatalog::builtin()),
        }
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) catalog: Arc<dyn SessionCatalog>,
}

impl ServerConfig {
    /// Construct a server configuration from application settings.
    pub fn new(host: impl Into<String>, port: u16, catalog: Arc<dyn SessionCatalog>) -> Self {
        Self {
            host: host.into(),
            port,
            catalog,
        }
    }

    /// Return the address pair the server will bind to.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

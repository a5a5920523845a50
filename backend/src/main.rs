//! Backend entry-point: wires the badge validation REST endpoints and
//! OpenAPI docs.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use server::{ServerConfig, Settings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = Settings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;
    let catalog = settings
        .catalog()
        .map_err(|err| std::io::Error::other(format!("failed to load session catalog: {err}")))?;

    let config = ServerConfig::new(settings.host(), settings.port(), Arc::new(catalog));
    server::run(config)?.await
}

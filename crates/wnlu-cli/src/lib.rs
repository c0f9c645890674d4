//! wnlu-cli — Shared start-up for the `wnlu-score` and `wnlu-translate` binaries.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wnlu_common::config::LoggingConfig;
use wnlu_common::RunConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured
/// filter. Everything goes to stderr; stdout is reserved for output.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("wnlu=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the run configuration and bring up logging.
pub fn start() -> Result<RunConfig> {
    let path = RunConfig::resolved_path();
    let config = RunConfig::load().with_context(|| match &path {
        Some(p) => format!("Failed to load configuration from {}", p.display()),
        None => "Failed to load configuration".to_string(),
    })?;
    init_logging(&config.logging);

    match path {
        Some(p) => info!(config = %p.display(), "Configuration loaded"),
        None => info!("Using default configuration"),
    }
    Ok(config)
}

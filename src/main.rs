//! slirc-filter - line-oriented driver for the client message filter.
//!
//! Reads `<nick> <body>` lines from stdin, runs them through the ignore
//! list and relaybot unwrapping, and prints what the UI would display.

use std::io;
use std::path::Path;

use slirc_filter::config::{self, Config};
use slirc_filter::{Registry, driver};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let explicit_path = std::env::args().nth(1);
    let config = match explicit_path.as_deref() {
        Some(path) => Config::load(path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH)
            .map_err(|e| {
                error!(path = %DEFAULT_CONFIG_PATH, error = %e, "Failed to load config");
                e
            })?,
        None => {
            info!("No config file, using defaults");
            Config::default()
        }
    };

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        return Err(anyhow::anyhow!(
            "Refusing to start with {} configuration error(s)",
            errors.len()
        ));
    }

    let mut registry = Registry::with_limits(config.limits);
    registry.seed(&config.filter);
    info!(
        ignored = registry.ignored().count(),
        relaybots = registry.relaybots().count(),
        "Filter ready"
    );

    driver::run(&registry, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}

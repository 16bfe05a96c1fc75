// 🪵 Logging - tracing subscriber for the CLI
//
// Logs go to stderr so stdout carries only the demo output.
// Level defaults to `warn`; override with RUST_LOG (e.g. RUST_LOG=demo_analytics=debug).

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

pub fn env_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Failed to create env filter")
}

/// Install the global subscriber. Call once, at startup.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");
    Ok(())
}

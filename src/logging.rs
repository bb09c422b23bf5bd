//! Tracing setup for embedders and tests.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
/// Fails if a global subscriber is already set.
pub fn init() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .map_err(|error| anyhow!("failed to install tracing subscriber: {error}"))
}

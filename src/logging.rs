//! Tracing subscriber setup for binaries and demos

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to `default_directive`
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_error() {
        let _ = init_tracing("info");
        assert!(init_tracing("info").is_err());
    }
}

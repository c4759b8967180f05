//! Subcommand implementations.

pub mod check;
pub mod describe;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;
use devports_core::{ConfigStore, DiscoveryConfig, PortDiscoveryService, SystemCommandRunner};

/// Build a host discovery service from the given or default config file.
pub async fn service(config_path: Option<PathBuf>) -> Result<PortDiscoveryService<SystemCommandRunner>> {
    let store = match config_path {
        Some(path) => ConfigStore::with_path(path),
        None => match ConfigStore::new() {
            Ok(store) => store,
            Err(e) => {
                tracing::debug!(error = %e, "No config location, using defaults");
                return Ok(PortDiscoveryService::system(DiscoveryConfig::default()));
            }
        },
    };

    let config = store.load().await?;
    tracing::debug!(path = %store.path().display(), ?config, "Loaded config");
    Ok(PortDiscoveryService::system(config))
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

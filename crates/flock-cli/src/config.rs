//! Analysis configuration schema and loading.
//!
//! Configured via a TOML file (see `paths::get_config_path`). Every section is
//! optional; a missing file means defaults throughout.

use std::path::Path;

use anyhow::{Context, Result};
use flock_graph::{GraphConfig, RankingConfig};
use serde::Deserialize;
use tracing::debug;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlockConfig {
    /// Follows-graph construction.
    pub graph: GraphConfig,

    /// Influencer ranking.
    pub ranking: RankingConfig,
}

impl FlockConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

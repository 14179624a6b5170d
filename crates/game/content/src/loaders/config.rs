//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const SHIPPED_CONFIG: &str = include_str!("../../data/config.toml");

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.tick_interval_ms == 0 {
            anyhow::bail!("tick_interval_ms must be positive");
        }

        Ok(config)
    }
}

/// The configuration compiled into the binary.
pub fn default_config() -> LoadResult<GameConfig> {
    ConfigLoader::from_str(SHIPPED_CONFIG)
}

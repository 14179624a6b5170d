//! Content factory for building the catalog and config from a data directory.

use std::path::{Path, PathBuf};

use game_core::{Catalog, GameConfig};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, default_catalog, default_config};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── catalog.ron
/// ```
///
/// Files that are absent fall back to the shipped content.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CATALOG_FILE: &'static str = "catalog.ron";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            default_config()
        }
    }

    /// Load the tier and upgrade catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if path.exists() {
            CatalogLoader::load(&path)
        } else {
            default_catalog()
        }
    }
}

//! Content loaders for reading game data from files.
//!
//! Loaders turn RON/TOML text into validated `game-core` values. Parsing
//! failures and catalog validation failures both surface as [`LoadResult`]
//! errors with the offending file named in the message.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CatalogData, CatalogLoader, default_catalog};
pub use config::{ConfigLoader, default_config};
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

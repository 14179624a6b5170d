//! Content loading and runtime construction.
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::{CatalogLoader, ConfigLoader, default_catalog, default_config};
use game_core::{Catalog, CatalogOracle, GameConfig};
use runtime::{GeminiHeadlineProvider, Runtime, RuntimeConfig};

use crate::config::ClientConfig;

/// Everything the frontend needs once the runtime is up.
pub struct RuntimeSetup {
    pub runtime: Runtime,
    pub catalog: Arc<Catalog>,
}

/// Resolves the catalog and game config from configured paths or the
/// shipped content.
pub fn load_content(config: &ClientConfig) -> Result<(Catalog, GameConfig)> {
    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path)?,
        None => default_catalog().context("shipped catalog is invalid")?,
    };

    let game_config = match &config.game_config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => default_config().context("shipped config is invalid")?,
    };

    Ok((catalog, game_config))
}

/// Builds and starts the runtime. Must be called inside a tokio runtime.
pub fn start_runtime(config: &ClientConfig) -> Result<RuntimeSetup> {
    let (catalog, game_config) = load_content(config)?;
    let catalog = Arc::new(catalog);

    // Environment overrides win over the config file.
    let runtime_config = RuntimeConfig {
        game_config,
        ..config.runtime.clone()
    }
    .with_env();

    tracing::info!(
        tiers = catalog.tier_count(),
        upgrades = catalog.upgrades().len(),
        tick_ms = runtime_config.game_config.tick_interval_ms,
        headlines_online = config.api_key.is_some(),
        "Starting runtime"
    );

    let runtime = Runtime::builder()
        .config(runtime_config)
        .shared_catalog(catalog.clone())
        .headline_provider(GeminiHeadlineProvider::new(config.api_key.clone()))
        .build()?;

    Ok(RuntimeSetup { runtime, catalog })
}

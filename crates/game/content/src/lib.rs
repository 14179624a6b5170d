//! Data-driven content definitions and loaders.
//!
//! This crate ships the ranch catalog and provides loaders for RON/TOML data files:
//! - Tier and upgrade catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! The shipped catalog is embedded in the binary so a client works without any
//! data directory. Content is consumed through [`game_core::CatalogOracle`] and
//! never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogData, CatalogLoader, ConfigLoader, ContentFactory, LoadResult, default_catalog,
    default_config,
};

//! Read-only environment handed to every transition.
//!
//! [`GameEnv`] bundles the catalog oracle and the economic configuration so
//! the engine can reach everything it needs without coupling to concrete
//! implementations.
use crate::catalog::CatalogOracle;
use crate::config::GameConfig;
use crate::state::GameState;
use crate::stats::DerivedStats;

#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    catalog: &'a dyn CatalogOracle,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(catalog: &'a dyn CatalogOracle, config: &'a GameConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &'a dyn CatalogOracle {
        self.catalog
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Fresh derived stats for `state`.
    pub fn stats(&self, state: &GameState) -> DerivedStats {
        DerivedStats::compute(state, self.catalog, self.config)
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("tiers", &self.catalog.tier_count())
            .field("upgrades", &self.catalog.upgrades().len())
            .field("config", self.config)
            .finish()
    }
}

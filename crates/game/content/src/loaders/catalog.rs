//! Tier and upgrade catalog loader.

use std::path::Path;

use game_core::{Catalog, TierDefinition, UpgradeDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const SHIPPED_CATALOG: &str = include_str!("../../data/catalog.ron");

/// Catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub tiers: Vec<TierDefinition>,
    pub upgrades: Vec<UpgradeDefinition>,
}

impl CatalogData {
    /// Validates the raw data into a [`Catalog`].
    pub fn into_catalog(self) -> LoadResult<Catalog> {
        Catalog::new(self.tiers, self.upgrades)
            .map_err(|e| anyhow::anyhow!("Invalid catalog: {}", e))
    }
}

/// Loader for tier and upgrade catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing [`CatalogData`]
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate a catalog from RON text.
    pub fn from_str(content: &str) -> LoadResult<Catalog> {
        let data: CatalogData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        data.into_catalog()
    }
}

/// The catalog compiled into the binary.
pub fn default_catalog() -> LoadResult<Catalog> {
    CatalogLoader::from_str(SHIPPED_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{CatalogOracle, EffectTarget, UpgradeCategory};

    #[test]
    fn shipped_catalog_is_valid() {
        let catalog = default_catalog().unwrap();

        let tiers: Vec<_> = catalog.tiers().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            tiers,
            ["holstein", "black_angus", "hereford", "wagyu", "kobe"]
        );
        assert_eq!(catalog.tiers()[0].unlock_cost, 0.0);
        assert_eq!(catalog.upgrades().len(), 9);
    }

    #[test]
    fn shipped_tiers_are_increasingly_valuable() {
        let catalog = default_catalog().unwrap();

        for pair in catalog.tiers().windows(2) {
            assert!(pair[1].value_multiplier > pair[0].value_multiplier);
            assert!(pair[1].unlock_cost > pair[0].unlock_cost);
        }
    }

    #[test]
    fn shop_lists_habitat_by_price() {
        let catalog = default_catalog().unwrap();

        let ids: Vec<_> = catalog
            .upgrades_in(UpgradeCategory::Habitat)
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, ["small_barn", "feedlot", "mega_ranch"]);
    }

    #[test]
    fn optional_fields_default() {
        let catalog = CatalogLoader::from_str(
            r#"(
                tiers: [(id: "calf", name: "Calf", value_multiplier: 1.0, unlock_cost: 0.0)],
                upgrades: [(
                    id: "trough",
                    name: "Trough",
                    base_cost: 10.0,
                    cost_multiplier: 1.1,
                    effect_value: 1.0,
                    effect_type: Add,
                    target: Housing,
                    category: Habitat,
                )],
            )"#,
        )
        .unwrap();

        let trough = catalog.upgrade("trough").unwrap();
        assert_eq!(trough.max_level, None);
        assert_eq!(trough.description, "");
        assert_eq!(trough.target, EffectTarget::Housing);
    }

    #[test]
    fn rejects_flat_cost_curve() {
        let err = CatalogLoader::from_str(
            r#"(
                tiers: [(id: "calf", name: "Calf", value_multiplier: 1.0, unlock_cost: 0.0)],
                upgrades: [(
                    id: "trough",
                    name: "Trough",
                    base_cost: 10.0,
                    cost_multiplier: 1.0,
                    effect_value: 1.0,
                    effect_type: Add,
                    target: Housing,
                    category: Habitat,
                )],
            )"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Invalid catalog"));
    }
}

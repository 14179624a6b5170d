//! Static tier and upgrade definitions.
//!
//! The catalog is read-only input to both the cost model and the stats
//! aggregator. The engine only sees it through [`CatalogOracle`], so content
//! loaders and tests can supply their own implementations.
mod error;
mod tier;
mod upgrade;

use std::collections::{HashMap, HashSet};

pub use error::CatalogError;
pub use tier::TierDefinition;
pub use upgrade::{EffectTarget, EffectType, UpgradeCategory, UpgradeDefinition};

/// Read-only access to tier and upgrade definitions.
pub trait CatalogOracle: Send + Sync {
    /// Tiers in prestige order; index 0 is the starting tier.
    fn tiers(&self) -> &[TierDefinition];

    /// Upgrades in declaration order.
    fn upgrades(&self) -> &[UpgradeDefinition];

    /// Looks up an upgrade by its unique id.
    fn upgrade(&self, id: &str) -> Option<&UpgradeDefinition>;

    fn tier(&self, index: usize) -> Option<&TierDefinition> {
        self.tiers().get(index)
    }

    fn tier_count(&self) -> usize {
        self.tiers().len()
    }

    /// The tier reached by the next prestige, if any.
    fn next_tier(&self, current: usize) -> Option<&TierDefinition> {
        self.tier(current + 1)
    }

    /// Upgrades of one category, cheapest first.
    fn upgrades_in(&self, category: UpgradeCategory) -> Vec<&UpgradeDefinition> {
        let mut listed: Vec<_> = self
            .upgrades()
            .iter()
            .filter(|upgrade| upgrade.category == category)
            .collect();
        listed.sort_by(|a, b| a.base_cost.total_cmp(&b.base_cost));
        listed
    }
}

/// Validated catalog with id-keyed upgrade lookup.
#[derive(Clone, Debug)]
pub struct Catalog {
    tiers: Vec<TierDefinition>,
    upgrades: Vec<UpgradeDefinition>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting definitions the economy cannot run on.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when there are no tiers, an id repeats, a cost
    /// curve does not grow, or a magnitude is negative or non-finite.
    pub fn new(
        tiers: Vec<TierDefinition>,
        upgrades: Vec<UpgradeDefinition>,
    ) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::NoTiers);
        }

        let mut tier_ids = HashSet::with_capacity(tiers.len());
        for tier in &tiers {
            if !tier_ids.insert(tier.id.as_str()) {
                return Err(CatalogError::DuplicateTier(tier.id.clone()));
            }
            validate_tier(tier)?;
        }

        let mut index = HashMap::with_capacity(upgrades.len());
        for (position, upgrade) in upgrades.iter().enumerate() {
            validate_upgrade(upgrade)?;
            if index.insert(upgrade.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateUpgrade(upgrade.id.clone()));
            }
        }

        Ok(Self {
            tiers,
            upgrades,
            index,
        })
    }
}

impl CatalogOracle for Catalog {
    fn tiers(&self) -> &[TierDefinition] {
        &self.tiers
    }

    fn upgrades(&self) -> &[UpgradeDefinition] {
        &self.upgrades
    }

    fn upgrade(&self, id: &str) -> Option<&UpgradeDefinition> {
        self.index.get(id).map(|&position| &self.upgrades[position])
    }
}

fn validate_tier(tier: &TierDefinition) -> Result<(), CatalogError> {
    if !tier.value_multiplier.is_finite() || tier.value_multiplier <= 0.0 {
        return Err(CatalogError::InvalidTierValue {
            id: tier.id.clone(),
            field: "value_multiplier",
            value: tier.value_multiplier,
        });
    }
    if !tier.unlock_cost.is_finite() || tier.unlock_cost < 0.0 {
        return Err(CatalogError::InvalidTierValue {
            id: tier.id.clone(),
            field: "unlock_cost",
            value: tier.unlock_cost,
        });
    }
    Ok(())
}

fn validate_upgrade(upgrade: &UpgradeDefinition) -> Result<(), CatalogError> {
    if !(upgrade.cost_multiplier.is_finite() && upgrade.cost_multiplier > 1.0) {
        return Err(CatalogError::NonIncreasingCost {
            id: upgrade.id.clone(),
            multiplier: upgrade.cost_multiplier,
        });
    }
    for (field, value) in [
        ("base_cost", upgrade.base_cost),
        ("effect_value", upgrade.effect_value),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidUpgradeValue {
                id: upgrade.id.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barn(id: &str, base_cost: f64) -> UpgradeDefinition {
        UpgradeDefinition::new(
            id,
            UpgradeCategory::Habitat,
            EffectTarget::Housing,
            EffectType::Add,
            5.0,
            base_cost,
            1.15,
        )
    }

    fn start_tier() -> Vec<TierDefinition> {
        vec![TierDefinition::new("holstein", 1.0, 0.0)]
    }

    #[test]
    fn looks_up_upgrades_by_id() {
        let catalog = Catalog::new(start_tier(), vec![barn("a", 10.0), barn("b", 20.0)]).unwrap();

        assert_eq!(catalog.upgrade("b").map(|u| u.base_cost), Some(20.0));
        assert!(catalog.upgrade("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_upgrade_ids() {
        let result = Catalog::new(start_tier(), vec![barn("a", 10.0), barn("a", 20.0)]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateUpgrade("a".into()));
    }

    #[test]
    fn rejects_flat_cost_curve() {
        let mut flat = barn("flat", 10.0);
        flat.cost_multiplier = 1.0;
        let result = Catalog::new(start_tier(), vec![flat]);
        assert!(matches!(result, Err(CatalogError::NonIncreasingCost { .. })));
    }

    #[test]
    fn rejects_empty_tiers() {
        assert_eq!(Catalog::new(vec![], vec![]).unwrap_err(), CatalogError::NoTiers);
    }

    #[test]
    fn lists_category_cheapest_first() {
        let mut truck = barn("truck", 1.0);
        truck.category = UpgradeCategory::Transport;
        let catalog = Catalog::new(
            start_tier(),
            vec![barn("big", 500.0), truck, barn("small", 15.0)],
        )
        .unwrap();

        let ids: Vec<_> = catalog
            .upgrades_in(UpgradeCategory::Habitat)
            .into_iter()
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(ids, ["small", "big"]);
    }

    #[test]
    fn next_tier_stops_at_the_last_tier() {
        let catalog = Catalog::new(
            vec![
                TierDefinition::new("holstein", 1.0, 0.0),
                TierDefinition::new("angus", 3.0, 1_000.0),
            ],
            vec![],
        )
        .unwrap();

        assert_eq!(catalog.next_tier(0).map(|t| t.id.as_str()), Some("angus"));
        assert!(catalog.next_tier(1).is_none());
    }
}

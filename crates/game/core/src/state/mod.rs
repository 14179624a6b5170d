//! Authoritative game state representation.
//!
//! Runtime layers clone or query this state but mutate it exclusively through
//! the engine. Derived values (capacities, income) are never stored here; see
//! [`crate::stats::DerivedStats`].
mod delta;

use std::collections::BTreeMap;

pub use delta::{StateDelta, StateFields};

use crate::action::PurchaseError;
use crate::catalog::CatalogOracle;

/// Owned upgrade levels keyed by upgrade id. Absent ids are level 0.
pub type UpgradeLevels = BTreeMap<String, u32>;

/// Canonical snapshot of the simulation state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Spendable balance.
    pub currency: f64,
    /// Units currently housed. Never exceeds housing capacity.
    pub unit_count: f64,
    /// Index into the catalog's tier list.
    pub current_tier_index: usize,
    /// Total currency ever accrued. Survives prestige and never decreases.
    pub lifetime_earnings: f64,
    /// Session start in milliseconds since the Unix epoch, supplied by the host.
    pub start_time: u64,
    /// Upgrade levels owned in the current tier.
    pub purchased_upgrades: UpgradeLevels,
}

impl GameState {
    /// The fixed snapshot every session (and every prestige) starts from.
    pub fn initial(start_time: u64) -> Self {
        Self {
            currency: 0.0,
            unit_count: 0.0,
            current_tier_index: 0,
            lifetime_earnings: 0.0,
            start_time,
            purchased_upgrades: UpgradeLevels::new(),
        }
    }

    /// Owned level of an upgrade, 0 when never purchased.
    pub fn upgrade_level(&self, id: &str) -> u32 {
        self.purchased_upgrades.get(id).copied().unwrap_or(0)
    }

    /// Price of the next level of `id` at the level owned right now.
    ///
    /// Returns `None` for ids the catalog does not define.
    pub fn next_upgrade_cost(&self, catalog: &dyn CatalogOracle, id: &str) -> Option<f64> {
        catalog
            .upgrade(id)
            .map(|upgrade| upgrade.cost_at(self.upgrade_level(id)))
    }

    /// Quotes the next level of `id` for a shop purchase.
    ///
    /// Unlike the purchase transition, which only checks funds, the shop
    /// refuses ids the catalog does not define and upgrades at their cap.
    ///
    /// # Errors
    ///
    /// [`PurchaseError::UnknownUpgrade`] or [`PurchaseError::MaxLevelReached`].
    pub fn quote_upgrade(
        &self,
        catalog: &dyn CatalogOracle,
        id: &str,
    ) -> Result<f64, PurchaseError> {
        let upgrade = catalog
            .upgrade(id)
            .ok_or_else(|| PurchaseError::UnknownUpgrade(id.to_string()))?;

        let level = self.upgrade_level(id);
        match upgrade.max_level {
            Some(max_level) if level >= max_level => Err(PurchaseError::MaxLevelReached {
                id: id.to_string(),
                max_level,
            }),
            _ => Ok(upgrade.cost_at(level)),
        }
    }

    /// Whether the player can pay for the next prestige right now.
    pub fn can_afford_next_tier(&self, catalog: &dyn CatalogOracle) -> bool {
        catalog
            .next_tier(self.current_tier_index)
            .is_some_and(|next| self.currency >= next.unlock_cost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Catalog, EffectTarget, EffectType, TierDefinition, UpgradeCategory, UpgradeDefinition,
    };

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                TierDefinition::new("holstein", 1.0, 0.0),
                TierDefinition::new("angus", 3.0, 10_000.0),
            ],
            vec![
                UpgradeDefinition::new(
                    "barn",
                    UpgradeCategory::Habitat,
                    EffectTarget::Housing,
                    EffectType::Add,
                    5.0,
                    15.0,
                    2.0,
                ),
                UpgradeDefinition::new(
                    "patent",
                    UpgradeCategory::Research,
                    EffectTarget::Value,
                    EffectType::Multiply,
                    0.5,
                    10.0,
                    2.0,
                )
                .with_max_level(1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn quote_prices_next_level() {
        let catalog = catalog();
        let mut state = GameState::initial(0);
        state.purchased_upgrades.insert("barn".into(), 2);

        assert_eq!(state.quote_upgrade(&catalog, "barn"), Ok(60.0));
    }

    #[test]
    fn quote_refuses_unknown_and_capped_upgrades() {
        let catalog = catalog();
        let mut state = GameState::initial(0);
        state.purchased_upgrades.insert("patent".into(), 1);

        assert_eq!(
            state.quote_upgrade(&catalog, "moon_base"),
            Err(PurchaseError::UnknownUpgrade("moon_base".into()))
        );
        assert_eq!(
            state.quote_upgrade(&catalog, "patent"),
            Err(PurchaseError::MaxLevelReached {
                id: "patent".into(),
                max_level: 1,
            })
        );
    }

    #[test]
    fn next_tier_affordability() {
        let catalog = catalog();
        let mut state = GameState::initial(0);
        state.currency = 9_999.0;
        assert!(!state.can_afford_next_tier(&catalog));

        state.currency = 10_000.0;
        assert!(state.can_afford_next_tier(&catalog));

        state.current_tier_index = 1;
        assert!(!state.can_afford_next_tier(&catalog));
    }
}

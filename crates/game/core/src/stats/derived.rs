//! Derived stats - economic values computed from state and catalog.
//!
//! These are NOT stored - always recomputed from the current [`GameState`]
//! when needed. A snapshot computed for one state must never be applied to
//! another.

use crate::catalog::{CatalogOracle, EffectTarget, EffectType};
use crate::config::GameConfig;
use crate::state::GameState;

/// Snapshot of capacities, multipliers and rates for one state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Realised income after the shipping clamp.
    pub income_per_second: f64,
    /// Value of one shipped unit.
    pub unit_value: f64,
    /// Maximum number of units that can be housed.
    pub housing_capacity: f64,
    /// Maximum units shipped per second.
    pub shipping_capacity: f64,
    /// Output per unit per second.
    pub unit_production_rate: f64,
    /// Bonus units granted by each manual production.
    pub auto_production_rate: f64,
}

/// Per-target sums folded from owned upgrade levels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct UpgradeEffects {
    housing_add: f64,
    shipping_add: f64,
    value_mult: f64,
    auto_add: f64,
}

impl UpgradeEffects {
    fn fold(state: &GameState, catalog: &dyn CatalogOracle) -> Self {
        let mut effects = Self {
            housing_add: 0.0,
            shipping_add: 0.0,
            value_mult: 1.0,
            auto_add: 0.0,
        };

        for (id, &level) in &state.purchased_upgrades {
            if level == 0 {
                continue;
            }
            // Stale ids contribute nothing
            let Some(upgrade) = catalog.upgrade(id) else {
                continue;
            };

            let total_effect = upgrade.effect_value * f64::from(level);
            match (upgrade.target, upgrade.effect_type) {
                (EffectTarget::Housing, _) => effects.housing_add += total_effect,
                (EffectTarget::Shipping, _) => effects.shipping_add += total_effect,
                // Linear in level, not compounded per level.
                (EffectTarget::Value, EffectType::Multiply) => {
                    effects.value_mult *= 1.0 + total_effect
                }
                // Additive value upgrades have no effect.
                (EffectTarget::Value, EffectType::Add) => {}
                (EffectTarget::HatchRate, _) => effects.auto_add += total_effect,
            }
        }

        effects
    }
}

impl DerivedStats {
    /// Folds owned upgrades and the active tier into a stats snapshot.
    ///
    /// Pure: identical inputs always produce identical output. An out-of-range
    /// tier index falls back to tier 0.
    pub fn compute(state: &GameState, catalog: &dyn CatalogOracle, config: &GameConfig) -> Self {
        let effects = UpgradeEffects::fold(state, catalog);

        let tier_multiplier = catalog
            .tier(state.current_tier_index)
            .or_else(|| catalog.tier(0))
            .map_or(1.0, |tier| tier.value_multiplier);

        let housing_capacity = config.base_housing + effects.housing_add;
        let shipping_capacity = config.base_shipping + effects.shipping_add;
        let unit_value = config.base_unit_value * tier_multiplier * effects.value_mult;
        let unit_production_rate = config.base_unit_production;

        let potential_output = state.unit_count * unit_production_rate;
        let actual_shipped = potential_output.min(shipping_capacity);
        let income_per_second = actual_shipped * unit_value;

        Self {
            income_per_second,
            unit_value,
            housing_capacity,
            shipping_capacity,
            unit_production_rate,
            auto_production_rate: effects.auto_add,
        }
    }

    pub fn is_housing_full(&self, state: &GameState) -> bool {
        state.unit_count >= self.housing_capacity
    }

    /// Income accrued over `elapsed_ms` at the current rate.
    pub fn income_over(&self, elapsed_ms: u64) -> f64 {
        self.income_per_second * (elapsed_ms as f64 / 1000.0)
    }
}

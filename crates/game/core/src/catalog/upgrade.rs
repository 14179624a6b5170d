use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::cost::upgrade_cost;

/// How an upgrade's per-level magnitude combines into its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EffectType {
    Add,
    Multiply,
}

/// Derived stat an upgrade modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectTarget {
    /// Housing capacity (unit ceiling).
    Housing,
    /// Shipping capacity (realised output ceiling).
    Shipping,
    /// Value of one shipped unit.
    Value,
    /// Bonus units granted per manual production.
    HatchRate,
}

/// Shop grouping an upgrade is listed under.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, EnumIter, EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UpgradeCategory {
    Habitat,
    Transport,
    Research,
}

/// A repeatable purchase that permanently modifies one derived stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeDefinition {
    /// Unique across the whole catalog.
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub base_cost: f64,
    /// Geometric growth factor per level, strictly above 1.
    pub cost_multiplier: f64,
    /// Magnitude contributed by each owned level.
    pub effect_value: f64,
    pub effect_type: EffectType,
    pub target: EffectTarget,
    pub category: UpgradeCategory,
    /// Purchase cap; `None` means unbounded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_level: Option<u32>,
}

impl UpgradeDefinition {
    pub fn new(
        id: impl Into<String>,
        category: UpgradeCategory,
        target: EffectTarget,
        effect_type: EffectType,
        effect_value: f64,
        base_cost: f64,
        cost_multiplier: f64,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            base_cost,
            cost_multiplier,
            effect_value,
            effect_type,
            target,
            category,
            max_level: None,
        }
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }

    /// Price of the next level given `owned` levels already purchased.
    pub fn cost_at(&self, owned: u32) -> f64 {
        upgrade_cost(self.base_cost, self.cost_multiplier, owned)
    }

    pub fn is_maxed(&self, owned: u32) -> bool {
        self.max_level.is_some_and(|max| owned >= max)
    }
}

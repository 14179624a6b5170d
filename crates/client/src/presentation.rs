//! Text rendering of snapshots, the shop, and action outcomes.
use std::fmt::Write;

use game_core::{
    AdvanceTierError, CatalogOracle, EffectTarget, EffectType, ExecuteError, ProduceError,
    PurchaseError, UpgradeCategory, UpgradeDefinition,
};
use runtime::Snapshot;
use strum::IntoEnumIterator;

use crate::format::{format_money, format_number};

pub fn render_status(snapshot: &Snapshot, catalog: &dyn CatalogOracle) -> String {
    let Snapshot { state, stats } = snapshot;
    let breed = catalog
        .tier(state.current_tier_index)
        .map_or("Unknown breed", |tier| tier.name.as_str());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{breed} ranch | {} (+{}/sec) | lifetime {}",
        format_money(state.currency),
        format_money(stats.income_per_second),
        format_money(state.lifetime_earnings),
    );
    let _ = write!(
        out,
        "Herd {}/{}{} | Shipping {}/sec | Steak {} | +{} per hatch",
        format_number(state.unit_count),
        format_number(stats.housing_capacity),
        if stats.is_housing_full(state) { " (full)" } else { "" },
        format_number(stats.shipping_capacity),
        format_money(stats.unit_value),
        1.0 + stats.auto_production_rate,
    );

    match catalog.next_tier(state.current_tier_index) {
        Some(next) => {
            let _ = write!(
                out,
                "\nNext breed: {} (x{}) for {}",
                next.name,
                next.value_multiplier,
                format_money(next.unlock_cost)
            );
            if state.can_afford_next_tier(catalog) {
                out.push_str(" (ready: type `prestige`)");
            }
        }
        None => out.push_str("\nYou raise the finest breed there is."),
    }

    out
}

/// Lists one shop category, or all of them, cheapest first.
pub fn render_shop(
    snapshot: &Snapshot,
    catalog: &dyn CatalogOracle,
    category: Option<UpgradeCategory>,
) -> String {
    let mut out = String::new();

    for current in UpgradeCategory::iter().filter(|c| category.is_none_or(|only| only == *c)) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "[{}]", current.as_ref());

        for upgrade in catalog.upgrades_in(current) {
            let level = snapshot.state.upgrade_level(&upgrade.id);
            let price = if upgrade.is_maxed(level) {
                "MAX".to_string()
            } else {
                let cost = upgrade.cost_at(level);
                let marker = if snapshot.state.currency >= cost { "*" } else { " " };
                format!("{}{}", format_money(cost), marker)
            };
            let _ = write!(
                out,
                "\n  {:<22} Lv {:<3} {:>10}  {}",
                upgrade.id,
                level,
                price,
                describe_effect(upgrade)
            );
        }
    }

    out
}

pub fn describe_effect(upgrade: &UpgradeDefinition) -> String {
    let value = upgrade.effect_value;
    match (upgrade.target, upgrade.effect_type) {
        (EffectTarget::Housing, _) => format!("+{} housing", value),
        (EffectTarget::Shipping, _) => format!("+{} shipping/sec", value),
        (EffectTarget::Value, EffectType::Multiply) => format!("+{}% steak value", value * 100.0),
        (EffectTarget::Value, EffectType::Add) => format!("+{} steak value", value),
        (EffectTarget::HatchRate, _) => format!("+{} cows per hatch", value),
    }
}

/// Player-facing explanation of a rejected action.
pub fn describe_rejection(error: &ExecuteError) -> String {
    match error {
        ExecuteError::Produce(e) => match &e.error {
            ProduceError::HousingFull { .. } => {
                "The barns are full. Buy habitat upgrades to house more cows.".to_string()
            }
            other => other.to_string(),
        },
        ExecuteError::Purchase(e) => match &e.error {
            PurchaseError::InsufficientFunds { cost, currency } => format!(
                "Not enough money: need {}, have {}.",
                format_money(*cost),
                format_money(*currency)
            ),
            PurchaseError::UnknownUpgrade(id) => {
                format!("No upgrade called '{}'. Try `shop`.", id)
            }
            PurchaseError::MaxLevelReached { id, max_level } => {
                format!("{} is already at max level {}.", id, max_level)
            }
        },
        ExecuteError::AdvanceTier(e) => match &e.error {
            AdvanceTierError::MaxTierReached { .. } => {
                "You already raise the finest breed there is.".to_string()
            }
            AdvanceTierError::InsufficientFunds { unlock_cost, .. } => format!(
                "Need {} to unlock the next breed.",
                format_money(*unlock_cost)
            ),
        },
    }
}

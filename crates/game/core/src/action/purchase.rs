//! Upgrade purchase.

use super::ActionTransition;
use super::error::PurchaseError;
use crate::env::GameEnv;
use crate::state::GameState;

/// Buys one level of an upgrade at a caller-supplied price.
///
/// The only precondition is `currency >= cost`. The price is not recomputed
/// here: callers quote it from the level owned at the moment of submission
/// (see [`GameState::quote_upgrade`]), and a stale quote charges the stale
/// amount. Catalog membership and level caps are the quoting side's concern;
/// an id the catalog does not define is still recorded and then ignored by
/// the stats aggregator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseUpgradeAction {
    pub upgrade_id: String,
    pub cost: f64,
}

/// Level reached and price paid by an accepted purchase.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseResult {
    pub level: u32,
    pub cost: f64,
}

impl PurchaseUpgradeAction {
    pub fn new(upgrade_id: impl Into<String>, cost: f64) -> Self {
        Self {
            upgrade_id: upgrade_id.into(),
            cost,
        }
    }
}

impl ActionTransition for PurchaseUpgradeAction {
    type Error = PurchaseError;
    type Result = PurchaseResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.currency < self.cost {
            return Err(PurchaseError::InsufficientFunds {
                cost: self.cost,
                currency: state.currency,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<PurchaseResult, Self::Error> {
        state.currency -= self.cost;
        let level = state
            .purchased_upgrades
            .entry(self.upgrade_id.clone())
            .or_insert(0);
        *level += 1;

        Ok(PurchaseResult {
            level: *level,
            cost: self.cost,
        })
    }
}

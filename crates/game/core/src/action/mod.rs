//! Action domain.
//!
//! Every mutation of [`GameState`] is one of four actions:
//! - `Produce`: hatch one unit (player)
//! - `PurchaseUpgrade`: buy one level of an upgrade (player)
//! - `AdvanceTier`: prestige into the next tier (player)
//! - `Accrue`: credit income for elapsed time (system, simulation clock)
//!
//! Each action implements [`ActionTransition`] and is driven through the
//! engine's pre_validate → apply → post_validate pipeline.

pub mod accrue;
pub mod advance_tier;
pub mod error;
pub mod produce;
pub mod purchase;

pub use accrue::AccrueAction;
pub use advance_tier::{AdvanceTierAction, TierAdvance};
pub use error::{AdvanceTierError, ProduceError, PurchaseError};
pub use produce::ProduceAction;
pub use purchase::{PurchaseResult, PurchaseUpgradeAction};

use strum::{AsRefStr, Display};

use crate::env::GameEnv;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
///
/// Hooks receive the state they act on, never a snapshot captured earlier,
/// and derive any stats they need from it.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// An action submitted to the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Produce(ProduceAction),
    PurchaseUpgrade(PurchaseUpgradeAction),
    AdvanceTier(AdvanceTierAction),
    Accrue(AccrueAction),
}

/// Discriminant of [`Action`], for logging and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    Produce,
    PurchaseUpgrade,
    AdvanceTier,
    Accrue,
}

impl Action {
    pub fn produce() -> Self {
        Self::Produce(ProduceAction)
    }

    pub fn purchase(upgrade_id: impl Into<String>, cost: f64) -> Self {
        Self::PurchaseUpgrade(PurchaseUpgradeAction::new(upgrade_id, cost))
    }

    pub fn advance_tier() -> Self {
        Self::AdvanceTier(AdvanceTierAction)
    }

    pub fn accrue(elapsed_ms: u64) -> Self {
        Self::Accrue(AccrueAction::new(elapsed_ms))
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Produce(_) => ActionKind::Produce,
            Self::PurchaseUpgrade(_) => ActionKind::PurchaseUpgrade,
            Self::AdvanceTier(_) => ActionKind::AdvanceTier,
            Self::Accrue(_) => ActionKind::Accrue,
        }
    }
}

/// Action-specific outcome of a successful execution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// Units added.
    Produced(f64),
    Purchased(PurchaseResult),
    TierAdvanced(TierAdvance),
    /// Income credited.
    Accrued(f64),
}

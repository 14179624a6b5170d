//! Deterministic economic simulation shared across clients.
//!
//! `game-core` defines the canonical rules of the ranch economy: the static
//! catalog of tiers and upgrades, the cost curve, the derived-stats
//! aggregator, and the action transitions that mutate [`GameState`]. It does
//! no I/O and owns no clocks; the runtime feeds it elapsed time and player
//! intent. All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod catalog;
pub mod config;
pub mod cost;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use action::{
    AccrueAction, Action, ActionKind, ActionResult, ActionTransition, AdvanceTierAction,
    AdvanceTierError, ProduceAction, ProduceError, PurchaseError, PurchaseResult,
    PurchaseUpgradeAction, TierAdvance,
};
pub use catalog::{
    Catalog, CatalogError, CatalogOracle, EffectTarget, EffectType, TierDefinition,
    UpgradeCategory, UpgradeDefinition,
};
pub use config::GameConfig;
pub use cost::upgrade_cost;
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError, reduce,
};
pub use env::GameEnv;
pub use error::{ErrorSeverity, GameError, NeverError};
pub use state::{GameState, StateDelta, StateFields, UpgradeLevels};
pub use stats::DerivedStats;

//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Player
//! actions and the clock's accrual flow through the same `execute()` path.
//! A transition runs against a working copy that is committed only when all
//! three phases pass, so observers never see a half-applied state and a
//! rejected action leaves the state exactly as it was.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{AccrueAction, Action, ActionResult};
use crate::catalog::CatalogOracle;
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{GameState, StateDelta};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Which state fields changed.
    pub delta: StateDelta,

    /// Action-specific execution result.
    pub action_result: ActionResult,
}

/// Game engine applying actions to a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action against the current state.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] when the action is rejected. The borrowed
    /// state is untouched in that case.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let mut working = self.state.clone();
        let action_result = transition::execute_transition(action, &mut working, &env)?;

        let delta = StateDelta::from_states(self.state, &working);
        *self.state = working;

        Ok(ExecutionOutcome {
            delta,
            action_result,
        })
    }

    /// Runs one clock accrual over `elapsed_ms` and returns the income
    /// credited. Infallible, unlike [`GameEngine::execute`].
    pub fn accrue(&mut self, env: GameEnv<'_>, elapsed_ms: u64) -> f64 {
        transition::execute_accrue(&AccrueAction::new(elapsed_ms), self.state, &env)
    }
}

/// Functional form of [`GameEngine::execute`]: `state → state'`.
///
/// A rejected action returns an unchanged copy of `state`.
pub fn reduce(
    state: &GameState,
    action: &Action,
    catalog: &dyn CatalogOracle,
    config: &GameConfig,
) -> GameState {
    let mut next = state.clone();
    let env = GameEnv::new(catalog, config);
    // Rejections leave `next` equal to `state`.
    let _ = GameEngine::new(&mut next).execute(env, action);
    next
}

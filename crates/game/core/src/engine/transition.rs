//! Action transition dispatch and execution logic.

use crate::action::{AccrueAction, Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Produce(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Produced)
            .map_err(ExecuteError::Produce),
        Action::PurchaseUpgrade(transition) => drive_transition(transition, state, env)
            .map(ActionResult::Purchased)
            .map_err(ExecuteError::Purchase),
        Action::AdvanceTier(transition) => drive_transition(transition, state, env)
            .map(ActionResult::TierAdvanced)
            .map_err(ExecuteError::AdvanceTier),
        Action::Accrue(transition) => {
            Ok(ActionResult::Accrued(execute_accrue(transition, state, env)))
        }
    }
}

/// Accrual has no rejection path; returns the income credited.
pub(super) fn execute_accrue(
    transition: &AccrueAction,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> f64 {
    match drive_transition(transition, state, env) {
        Ok(income) => income,
        Err(phase_error) => match phase_error.error {},
    }
}

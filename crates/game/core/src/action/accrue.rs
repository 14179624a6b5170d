//! Simulation clock accrual.

use super::ActionTransition;
use crate::env::GameEnv;
use crate::error::NeverError;
use crate::state::GameState;

/// System action applied on every clock tick.
///
/// Adds `income_per_second * elapsed_ms / 1000` to both currency and
/// lifetime earnings. No other field changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccrueAction {
    pub elapsed_ms: u64,
}

impl AccrueAction {
    pub fn new(elapsed_ms: u64) -> Self {
        Self { elapsed_ms }
    }
}

impl ActionTransition for AccrueAction {
    type Error = NeverError;
    /// Income credited by this tick.
    type Result = f64;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<f64, Self::Error> {
        let income = env.stats(state).income_over(self.elapsed_ms);
        state.currency += income;
        state.lifetime_earnings += income;
        Ok(income)
    }
}

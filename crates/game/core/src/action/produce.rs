//! Manual production (hatching one unit).

use super::ActionTransition;
use super::error::ProduceError;
use crate::env::GameEnv;
use crate::state::GameState;

/// Hatches one unit plus the current auto-production bonus, clamped to
/// housing capacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProduceAction;

impl ActionTransition for ProduceAction {
    type Error = ProduceError;
    /// Units added by this production.
    type Result = f64;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let stats = env.stats(state);
        if stats.is_housing_full(state) {
            return Err(ProduceError::HousingFull {
                unit_count: state.unit_count,
                capacity: stats.housing_capacity,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<f64, Self::Error> {
        let stats = env.stats(state);
        let before = state.unit_count;
        state.unit_count =
            (state.unit_count + 1.0 + stats.auto_production_rate).min(stats.housing_capacity);
        Ok(state.unit_count - before)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let capacity = env.stats(state).housing_capacity;
        if state.unit_count > capacity {
            return Err(ProduceError::CapacityExceeded {
                unit_count: state.unit_count,
                capacity,
            });
        }
        Ok(())
    }
}

//! Read-only projections handed to presentation layers.

use game_core::{DerivedStats, ExecuteError, GameEnv, GameState};
use serde::{Deserialize, Serialize};

/// Game state paired with the stats derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub stats: DerivedStats,
}

impl Snapshot {
    pub fn capture(state: &GameState, env: GameEnv<'_>) -> Self {
        Self {
            state: state.clone(),
            stats: env.stats(state),
        }
    }

    /// One-line description of the ranch used to prompt headline providers.
    pub fn summary(&self) -> String {
        format!(
            "Money: {}, Total Cows: {}",
            self.state.currency.floor(),
            self.state.unit_count
        )
    }
}

/// Reply to an action command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionStatus {
    Applied,
    /// The engine refused the action; state is unchanged.
    Rejected(ExecuteError),
}

impl ActionStatus {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

//! Event types for different topics.

use game_core::{ActionKind, ExecuteError, StateDelta};
use serde::{Deserialize, Serialize};

use crate::api::Snapshot;

/// Events related to game state changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// A player action was applied.
    StateChanged {
        action: ActionKind,
        delta: StateDelta,
        snapshot: Box<Snapshot>,
    },

    /// A player action was refused by the engine.
    ActionRejected {
        action: ActionKind,
        reason: ExecuteError,
    },

    /// The simulation clock advanced by one tick.
    Ticked {
        income: f64,
        snapshot: Box<Snapshot>,
    },
}

/// Cosmetic cues that carry no state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PresentationEvent {
    /// A production was requested. Fired whether or not the engine accepted
    /// it; `count` is the running number of requests this session.
    ProduceTriggered { count: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HeadlineEvent {
    HeadlineUpdated { headline: String },
}

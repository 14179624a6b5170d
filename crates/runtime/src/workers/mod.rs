//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the game state and the clock; the headline
//! worker polls a [`crate::HeadlineProvider`] on its own schedule and never
//! touches state.

mod headline;
mod simulation;

pub use headline::HeadlineWorker;
pub use simulation::{Command, SimulationWorker};

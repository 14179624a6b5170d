//! Runtime orchestration for the ranch simulation.
//!
//! This crate hosts the single authoritative [`game_core::GameState`] on a
//! tokio task, drives the simulation clock, and fans state snapshots out over
//! a topic-based event bus. Consumers embed [`Runtime`] and talk to it through
//! the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`headline`] defines the news headline providers
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod headline;
pub mod runtime;

mod workers;

pub use api::{ActionStatus, ProduceHold, Result, RuntimeError, RuntimeHandle, Snapshot};
pub use events::{Event, EventBus, GameStateEvent, HeadlineEvent, PresentationEvent, Topic};
pub use headline::{
    GeminiHeadlineProvider, HeadlineError, HeadlineProvider, StaticHeadlineProvider,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};

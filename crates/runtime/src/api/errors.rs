//! Unified error types surfaced by the runtime API.
//!
//! Rejected actions are not errors at this layer; they come back as
//! [`crate::ActionStatus::Rejected`]. `RuntimeError` covers failures of the
//! runtime itself: dead channels, worker panics, and bad construction input.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a catalog to be configured before building")]
    MissingCatalog,

    #[error("initial state references tier {index} but the catalog has {count} tiers")]
    InvalidInitialTier { index: usize, count: usize },

    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

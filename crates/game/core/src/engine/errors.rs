//! Error types for action execution pipeline.

use crate::action::{AdvanceTierError, ProduceError, PurchaseError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Why the engine rejected an action. The state is unchanged in every case.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("produce rejected: {0}")]
    Produce(TransitionPhaseError<ProduceError>),

    #[error("purchase rejected: {0}")]
    Purchase(TransitionPhaseError<PurchaseError>),

    #[error("advance tier rejected: {0}")]
    AdvanceTier(TransitionPhaseError<AdvanceTierError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            Self::Produce(e) => e.phase,
            Self::Purchase(e) => e.phase,
            Self::AdvanceTier(e) => e.phase,
        }
    }

    /// The underlying rejection reason without the phase wrapper.
    pub fn message(&self) -> String {
        match self {
            Self::Produce(e) => e.error.to_string(),
            Self::Purchase(e) => e.error.to_string(),
            Self::AdvanceTier(e) => e.error.to_string(),
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Produce(e) => e.error.severity(),
            Self::Purchase(e) => e.error.severity(),
            Self::AdvanceTier(e) => e.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Produce(e) => e.error.error_code(),
            Self::Purchase(e) => e.error.error_code(),
            Self::AdvanceTier(e) => e.error.error_code(),
        }
    }
}

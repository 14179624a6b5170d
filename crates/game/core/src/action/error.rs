//! Action rejection errors.
//!
//! A rejection leaves the state untouched. Variants carry the values the
//! precondition was checked against so logs show why an action bounced.

use crate::error::{ErrorSeverity, GameError};

// ============================================================================
// Produce
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProduceError {
    /// Housing is full; producing would exceed capacity.
    #[error("housing full: {unit_count} of {capacity}")]
    HousingFull { unit_count: f64, capacity: f64 },

    /// Post-condition: a transition left more units than housing allows.
    #[error("unit count {unit_count} exceeds housing capacity {capacity}")]
    CapacityExceeded { unit_count: f64, capacity: f64 },
}

impl GameError for ProduceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HousingFull { .. } => ErrorSeverity::Recoverable,
            Self::CapacityExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HousingFull { .. } => "PRODUCE_HOUSING_FULL",
            Self::CapacityExceeded { .. } => "PRODUCE_CAPACITY_EXCEEDED",
        }
    }
}

// ============================================================================
// Purchase
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PurchaseError {
    #[error("insufficient funds: need {cost}, have {currency}")]
    InsufficientFunds { cost: f64, currency: f64 },

    #[error("unknown upgrade '{0}'")]
    UnknownUpgrade(String),

    #[error("upgrade '{id}' already at max level {max_level}")]
    MaxLevelReached { id: String, max_level: u32 },
}

impl GameError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::UnknownUpgrade(_) | Self::MaxLevelReached { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "PURCHASE_INSUFFICIENT_FUNDS",
            Self::UnknownUpgrade(_) => "PURCHASE_UNKNOWN_UPGRADE",
            Self::MaxLevelReached { .. } => "PURCHASE_MAX_LEVEL",
        }
    }
}

// ============================================================================
// Advance tier (prestige)
// ============================================================================

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdvanceTierError {
    #[error("already at the last tier ({current})")]
    MaxTierReached { current: usize },

    #[error("insufficient funds to unlock tier {next}: need {unlock_cost}, have {currency}")]
    InsufficientFunds {
        next: usize,
        unlock_cost: f64,
        currency: f64,
    },
}

impl GameError for AdvanceTierError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MaxTierReached { .. } => ErrorSeverity::Validation,
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MaxTierReached { .. } => "ADVANCE_TIER_MAX",
            Self::InsufficientFunds { .. } => "ADVANCE_TIER_INSUFFICIENT_FUNDS",
        }
    }
}

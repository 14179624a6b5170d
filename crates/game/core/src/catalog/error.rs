//! Catalog validation errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while assembling a [`super::Catalog`].
///
/// An invalid catalog never reaches the engine, so every variant is fatal
/// for the session that tried to load it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("catalog must define at least one tier")]
    NoTiers,

    #[error("duplicate upgrade id '{0}'")]
    DuplicateUpgrade(String),

    #[error("duplicate tier id '{0}'")]
    DuplicateTier(String),

    #[error("upgrade '{id}' has cost multiplier {multiplier}, expected > 1")]
    NonIncreasingCost { id: String, multiplier: f64 },

    #[error("upgrade '{id}' has invalid {field}: {value}")]
    InvalidUpgradeValue {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("tier '{id}' has invalid {field}: {value}")]
    InvalidTierValue {
        id: String,
        field: &'static str,
        value: f64,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoTiers => "CATALOG_NO_TIERS",
            Self::DuplicateUpgrade(_) => "CATALOG_DUPLICATE_UPGRADE",
            Self::DuplicateTier(_) => "CATALOG_DUPLICATE_TIER",
            Self::NonIncreasingCost { .. } => "CATALOG_NON_INCREASING_COST",
            Self::InvalidUpgradeValue { .. } => "CATALOG_INVALID_UPGRADE",
            Self::InvalidTierValue { .. } => "CATALOG_INVALID_TIER",
        }
    }
}

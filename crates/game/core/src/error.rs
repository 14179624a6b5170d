//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `PurchaseError`, `CatalogError`) are defined
//! in their respective modules alongside the operations they validate. A
//! rejected action is not a failure of the simulation: the engine leaves the
//! state untouched and reports why.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action may succeed later without changes (e.g. once
///   more currency has accrued)
/// - **Validation**: the input itself is invalid and retrying it is pointless
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: the simulation cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: insufficient funds, housing full
    Recoverable,

    /// Examples: unknown upgrade id, already at the last tier
    Validation,

    /// Examples: unit count above housing after a transition
    Internal,

    /// Examples: catalog without a starting tier
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}

// Custom serde implementation to prevent accidental serialization
#[cfg(feature = "serde")]
impl serde::Serialize for NeverError {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NeverError {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom(
            "NeverError cannot be deserialized as it represents an impossible error",
        ))
    }
}

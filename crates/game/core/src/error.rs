//! Common error infrastructure for valor-core.
//!
//! Domain-specific errors (action validation, oracle access, turn order)
//! are defined next to the code they guard; this module provides the
//! shared severity classification used by all of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action simply did not happen; the caller may retry
///   or pick another action without losing the turn.
/// - **Validation**: invalid input that should be rejected without retry.
/// - **Internal**: unexpected state inconsistency; indicates a bug.
/// - **Fatal**: the session cannot continue (terminal win/loss aside, these
///   should never occur).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common interface implemented by all error types in valor-core.
///
/// Gives embedding layers a uniform way to classify failures and emit
/// stable codes in logs without matching on every variant.
pub trait GameError: std::error::Error {
    /// Returns the severity classification of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable machine-readable code for this error.
    fn error_code(&self) -> &'static str;
}

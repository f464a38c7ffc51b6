//! Error classification shared by every error type in combat-core.
//!
//! Each concrete error (`CombatError`, `ConstructionError`, `EffectError`)
//! lives next to the operation it guards and implements [`GameError`], so a
//! presentation layer can decide how to react without matching every variant.

use core::fmt;

/// How a caller should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The command does not fit the current situation; another one may.
    ///
    /// Wrong phase, not enough energy, nothing to target.
    Recoverable,

    /// The command carried a bad argument, such as an out-of-range hand or
    /// target index.
    Validation,

    /// Engine contract broken by the caller. Indicates a bug.
    Internal,

    /// Content is unusable and no session can be built from it.
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

    /// Rejected commands: the session is untouched and play continues.
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true for bugs and broken content.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity and a stable code for logs and tests.
pub trait GameError: fmt::Display + fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier such as `COMBAT_WRONG_PHASE`. Falls back to the type
    /// name for errors that do not override it.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

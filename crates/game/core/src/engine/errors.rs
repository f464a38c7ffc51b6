//! Rejections surfaced by the combat engine.

use crate::effect::EffectError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::CombatPhase;
use crate::template::ConstructionError;

/// Why a command was rejected.
///
/// Every variant except [`CombatError::Construction`] is raised before any
/// state is touched, so the session is unchanged after a rejection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("{command} is not accepted during {phase}")]
    WrongPhase {
        command: &'static str,
        phase: CombatPhase,
    },

    #[error("index {index} is out of bounds (len {len})")]
    InvalidIndex { index: usize, len: usize },

    #[error("not enough energy: card costs {required}, {available} available")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("no enemy part can be targeted")]
    NoValidTarget,

    #[error("{name} is already defeated")]
    AlreadyDefeated { name: String },

    #[error("no combat session has been started")]
    NoSession,

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Effect(#[from] EffectError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongPhase { .. }
            | Self::InsufficientEnergy { .. }
            | Self::NoValidTarget
            | Self::NoSession => ErrorSeverity::Recoverable,
            Self::InvalidIndex { .. } | Self::AlreadyDefeated { .. } => ErrorSeverity::Validation,
            Self::Construction(error) => error.severity(),
            Self::Effect(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "COMBAT_WRONG_PHASE",
            Self::InvalidIndex { .. } => "COMBAT_INVALID_INDEX",
            Self::InsufficientEnergy { .. } => "COMBAT_INSUFFICIENT_ENERGY",
            Self::NoValidTarget => "COMBAT_NO_VALID_TARGET",
            Self::AlreadyDefeated { .. } => "COMBAT_ALREADY_DEFEATED",
            Self::NoSession => "COMBAT_NO_SESSION",
            Self::Construction(error) => error.error_code(),
            Self::Effect(error) => error.error_code(),
        }
    }
}

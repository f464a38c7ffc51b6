/// Phase of the combat state machine.
///
/// The phase alone decides which commands are accepted; see
/// [`CombatEngine`](crate::CombatEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatPhase {
    /// Session built but the first turn has not begun. Only StartCombat leaves it.
    NotStarted,
    /// Player may play cards or end the turn.
    PlayerTurn,
    /// An attack card waits for a target part.
    SelectingTarget,
    /// Enemy parts act. Never observable between commands.
    EnemyTurn,
    /// Enemy defeated. Terminal.
    Victory,
    /// Player defeated. Terminal.
    Defeat,
    /// An external overlay blocks every command until it is closed.
    Paused { resume_to: ResumePhase },
}

impl CombatPhase {
    /// Returns true once the combat is decided.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat)
    }
}

/// Phase restored when an overlay closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ResumePhase {
    PlayerTurn,
    SelectingTarget,
}

impl From<ResumePhase> for CombatPhase {
    fn from(phase: ResumePhase) -> Self {
        match phase {
            ResumePhase::PlayerTurn => CombatPhase::PlayerTurn,
            ResumePhase::SelectingTarget => CombatPhase::SelectingTarget,
        }
    }
}

/// Turn bookkeeping: which player turn this is and the current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// 1-based player turn counter; 0 before the first turn starts.
    pub number: u32,

    pub phase: CombatPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            number: 0,
            phase: CombatPhase::NotStarted,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

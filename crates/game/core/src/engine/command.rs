use crate::event::CombatEvent;
use crate::state::CombatPhase;

/// External commands. One dispatch per input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CombatCommand {
    /// Builds a fresh session and begins the first player turn.
    StartCombat,
    /// Plays the card at this hand index.
    PlayCard(usize),
    /// Picks a slot from the target snapshot of the pending attack.
    ChooseTarget(usize),
    CancelTargetSelection,
    EndPlayerTurn,
    OpenOverlay,
    CloseOverlay,
}

impl CombatCommand {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandOutcome {
    /// Phase after the command fully resolved.
    pub phase: CombatPhase,
    /// Everything that happened, in order.
    pub events: Vec<CombatEvent>,
}

impl CommandOutcome {
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}

//! Authoritative combat state representation.
//!
//! This module owns the data structures that describe one combat: the player,
//! the enemy, turn bookkeeping, and the pending target selection. Presentation
//! layers query this state but mutate it exclusively through the engine.
mod targeting;
mod turn;

pub use targeting::TargetSelection;
pub use turn::{CombatPhase, ResumePhase, TurnState};

use crate::combatant::{Enemy, Player};
use crate::rng::RandomSource;
use crate::template::{ConstructionError, EnemyTemplate, PlayerTemplate};

/// The mutable aggregate of a single combat.
///
/// A session exclusively owns its player and enemy. It is built fresh for
/// every combat and left untouched (but still queryable) once the phase
/// becomes terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSession {
    pub(crate) player: Player,
    pub(crate) enemy: Enemy,
    pub(crate) turn: TurnState,
    pub(crate) selection: Option<TargetSelection>,
}

impl CombatSession {
    /// Builds a session from templates. The player's deck is shuffled into the
    /// draw pile; no cards are drawn until the engine begins the first turn.
    pub fn new(
        player: &PlayerTemplate,
        enemy: &EnemyTemplate,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, ConstructionError> {
        let enemy = Enemy::from_template(enemy)?;
        let player = Player::from_template(player, rng)?;

        Ok(Self {
            player,
            enemy,
            turn: TurnState::new(),
            selection: None,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn phase(&self) -> CombatPhase {
        self.turn.phase
    }

    /// 1-based number of the current player turn.
    pub fn turn_number(&self) -> u32 {
        self.turn.number
    }

    pub fn is_finished(&self) -> bool {
        self.turn.phase.is_terminal()
    }

    /// Pending attack, present only while selecting a target (or paused over it).
    pub fn target_selection(&self) -> Option<&TargetSelection> {
        self.selection.as_ref()
    }
}

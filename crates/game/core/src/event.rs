//! Events emitted while commands resolve.
//!
//! Every successful command returns its events in the order they happened.
//! Presentation layers render these instead of diffing state.

use crate::card::CardEffectKind;
use crate::combat::DamageReport;
use crate::combatant::EnemyIntent;
use crate::state::CombatPhase;

/// Who received block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockTarget {
    Player,
    Part(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    CombatStarted {
        enemy: String,
        deck_size: usize,
    },
    TurnStarted {
        turn: u32,
        energy: u32,
    },
    CardsDrawn {
        requested: usize,
        drawn: usize,
    },
    DeckRecycled {
        cards: usize,
    },
    CardPlayed {
        name: String,
        effect: CardEffectKind,
        cost: u32,
        energy_left: u32,
    },
    TargetSelectionStarted {
        card: String,
        targets: Vec<usize>,
    },
    TargetSelectionCancelled {
        card: String,
    },
    PartDamaged {
        part_index: usize,
        report: DamageReport,
    },
    PartDestroyed {
        part_index: usize,
        name: String,
    },
    /// An attack landed on a part that could not take damage.
    DamageIgnored {
        part_index: usize,
    },
    BlockGained {
        target: BlockTarget,
        amount: u32,
        total: u32,
    },
    PlayerDamaged {
        part_index: usize,
        report: DamageReport,
    },
    /// Reserved buff/debuff effect, announced without changing state.
    EffectAcknowledged {
        description: String,
    },
    IntentChosen {
        part_index: usize,
        intent: EnemyIntent,
    },
    IntentExecuted {
        part_index: usize,
        intent: EnemyIntent,
    },
    HandDiscarded {
        cards: usize,
    },
    EnemyDied {
        name: String,
        reason: String,
    },
    PhaseChanged {
        from: CombatPhase,
        to: CombatPhase,
    },
    OverlayOpened,
    OverlayClosed,
}

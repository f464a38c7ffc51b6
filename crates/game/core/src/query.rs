//! Read-only views over a [`CombatSession`].
//!
//! Queries never mutate state. They return owned summaries so a presentation
//! layer can hold them across commands.

use crate::card::CardEffectKind;
use crate::combatant::EnemyIntent;
use crate::deck::DeckCount;
use crate::state::CombatSession;

/// Player vitals plus the indexed hand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSummary {
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub cards: Vec<HandCard>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandCard {
    pub index: usize,
    pub name: String,
    pub cost: u32,
    pub description: String,
    pub effect: CardEffectKind,
    /// True if current energy covers the cost.
    pub affordable: bool,
}

/// Per-part status of the enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStatusSummary {
    pub name: String,
    pub is_dead: bool,
    pub parts: Vec<PartStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartStatus {
    pub index: usize,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub is_core: bool,
    pub destroyed: bool,
    pub intent: Option<EnemyIntent>,
}

/// A part that can currently be attacked.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetablePart {
    pub part_index: usize,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub block: u32,
    pub is_core: bool,
}

/// Sizes of the three deck partitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PileSizes {
    pub draw: usize,
    pub hand: usize,
    pub discard: usize,
}

impl PileSizes {
    pub const fn total(&self) -> usize {
        self.draw + self.hand + self.discard
    }
}

impl CombatSession {
    pub fn hand_summary(&self) -> HandSummary {
        let player = self.player();
        let cards = player
            .hand()
            .iter()
            .enumerate()
            .map(|(index, card)| HandCard {
                index,
                name: card.name.clone(),
                cost: card.cost,
                description: card.description.clone(),
                effect: card.effect,
                affordable: player.can_afford(card),
            })
            .collect();

        HandSummary {
            health: player.current_health(),
            max_health: player.max_health(),
            block: player.current_block(),
            energy: player.current_energy(),
            max_energy: player.max_energy(),
            cards,
        }
    }

    pub fn enemy_status_summary(&self) -> EnemyStatusSummary {
        let enemy = self.enemy();
        let parts = enemy
            .parts()
            .iter()
            .enumerate()
            .map(|(index, part)| PartStatus {
                index,
                name: part.name().to_owned(),
                health: part.current_health(),
                max_health: part.max_health(),
                block: part.current_block(),
                is_core: part.is_core(),
                destroyed: part.is_destroyed(),
                intent: part.current_intent().cloned(),
            })
            .collect();

        EnemyStatusSummary {
            name: enemy.name().to_owned(),
            is_dead: enemy.is_dead(),
            parts,
        }
    }

    /// Card name → count across draw pile, hand, and discard pile.
    pub fn deck_counts(&self) -> Vec<DeckCount> {
        self.player().deck().counts()
    }

    /// Undestroyed parts in part order. Empty once the enemy is dead.
    pub fn targetable_parts(&self) -> Vec<TargetablePart> {
        let enemy = self.enemy();
        enemy
            .targetable_indices()
            .into_iter()
            .filter_map(|part_index| {
                let part = enemy.part(part_index)?;
                Some(TargetablePart {
                    part_index,
                    name: part.name().to_owned(),
                    health: part.current_health(),
                    max_health: part.max_health(),
                    block: part.current_block(),
                    is_core: part.is_core(),
                })
            })
            .collect()
    }

    pub fn pile_sizes(&self) -> PileSizes {
        let deck = self.player().deck();
        PileSizes {
            draw: deck.draw_pile().len(),
            hand: deck.hand().len(),
            discard: deck.discard_pile().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::combatant::EnemyIntent;
    use crate::rng::PcgRng;
    use crate::state::CombatSession;
    use crate::template::{EnemyTemplate, PartTemplate, PlayerTemplate};

    fn session() -> CombatSession {
        let mut rng = PcgRng::new(4);
        CombatSession::new(
            &PlayerTemplate::starter(),
            &EnemyTemplate::new("Slime")
                .with_part(PartTemplate::core("Body", 20))
                .with_part(PartTemplate::limb("Arm", 10, vec![EnemyIntent::attack(5)])),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn enemy_status_lists_every_part() {
        let status = session().enemy_status_summary();

        assert_eq!(status.name, "Slime");
        assert_eq!(status.parts.len(), 2);
        assert!(status.parts[0].is_core);
        assert_eq!(status.parts[1].health, 10);
        assert!(status.parts.iter().all(|part| part.intent.is_none()));
    }

    #[test]
    fn targetable_parts_skip_destroyed() {
        let mut session = session();
        session.enemy.take_damage_to_part(1, 10);

        let targets = session.targetable_parts();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].part_index, 0);
    }

    #[test]
    fn deck_counts_cover_whole_deck() {
        let session = session();

        let counts = session.deck_counts();

        assert_eq!(counts.iter().map(|entry| entry.count).sum::<usize>(), 5);
        assert_eq!(session.pile_sizes().total(), 5);
    }
}

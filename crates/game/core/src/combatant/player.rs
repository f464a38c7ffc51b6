use crate::card::CardDefinition;
use crate::combat::{DamageReport, apply_blocked_damage};
use crate::deck::{DeckManager, DrawReport};
use crate::rng::RandomSource;
use crate::template::{ConstructionError, PlayerTemplate};

/// Player vitals plus the deck partitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    max_health: u32,
    current_health: u32,
    max_energy: u32,
    current_energy: u32,
    current_block: u32,
    deck: DeckManager,
}

impl Player {
    /// Builds a player at full health with the template deck shuffled into
    /// the draw pile. Energy starts at zero until the first turn begins.
    pub fn from_template(
        template: &PlayerTemplate,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, ConstructionError> {
        template.validate()?;

        let deck = DeckManager::shuffled(template.deck.clone(), rng);
        tracing::debug!(cards = deck.len(), "shuffled starting deck");

        Ok(Self {
            max_health: template.max_health,
            current_health: template.max_health,
            max_energy: template.max_energy,
            current_energy: 0,
            current_block: 0,
            deck,
        })
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    pub fn current_energy(&self) -> u32 {
        self.current_energy
    }

    pub fn current_block(&self) -> u32 {
        self.current_block
    }

    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    pub fn hand(&self) -> &[CardDefinition] {
        self.deck.hand()
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn can_afford(&self, card: &CardDefinition) -> bool {
        self.current_energy >= card.cost
    }

    /// Applies damage, block first.
    pub fn take_damage(&mut self, amount: u32) -> DamageReport {
        let report =
            apply_blocked_damage(&mut self.current_block, &mut self.current_health, amount);

        tracing::debug!(
            absorbed = report.absorbed,
            health_lost = report.health_lost,
            health = self.current_health,
            block = self.current_block,
            "player took damage"
        );
        if report.depleted {
            tracing::info!("player has fallen");
        }

        report
    }

    pub fn gain_block(&mut self, amount: u32) -> u32 {
        self.current_block = self.current_block.saturating_add(amount);
        self.current_block
    }

    /// Refills energy, clears block, and draws `draw_count` cards.
    pub fn start_turn(&mut self, draw_count: usize, rng: &mut dyn RandomSource) -> DrawReport {
        self.current_energy = self.max_energy;
        self.current_block = 0;
        self.draw(draw_count, rng)
    }

    /// Moves the whole hand to the discard pile.
    pub fn end_turn(&mut self) -> usize {
        self.deck.discard_hand()
    }

    pub fn draw(&mut self, count: usize, rng: &mut dyn RandomSource) -> DrawReport {
        self.deck.draw(count, rng)
    }

    /// Pays for a card and moves it from the hand to the discard pile.
    ///
    /// Returns the played card. Returns `None` without touching any state if
    /// the index is out of bounds or the card is unaffordable.
    pub fn spend_card(&mut self, hand_index: usize) -> Option<CardDefinition> {
        let cost = self.deck.hand().get(hand_index)?.cost;
        if self.current_energy < cost {
            return None;
        }

        let card = self.deck.discard_from_hand(hand_index)?.clone();
        self.current_energy -= cost;
        Some(card)
    }
}

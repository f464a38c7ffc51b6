//! Draw pile, hand, and discard pile management.
//!
//! Every card instance lives in exactly one of the three partitions. Cards are
//! only ever moved between partitions, so the total is fixed for the lifetime
//! of a [`DeckManager`].
//!
//! The top of the draw pile is the **last** element of `draw_pile`.

use crate::card::CardDefinition;
use crate::rng::RandomSource;

/// Result of a draw request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawReport {
    /// Cards asked for.
    pub requested: usize,
    /// Cards actually moved into the hand.
    pub drawn: usize,
    /// Cards moved from the discard pile back into the draw pile.
    pub recycled: usize,
}

impl DrawReport {
    /// Returns true if both piles ran dry before the request was satisfied.
    pub const fn is_partial(&self) -> bool {
        self.drawn < self.requested
    }
}

/// Aggregated count of one card name across the whole deck.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckCount {
    pub name: String,
    pub cost: u32,
    pub count: usize,
}

/// Owns the three card partitions of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckManager {
    draw_pile: Vec<CardDefinition>,
    hand: Vec<CardDefinition>,
    discard_pile: Vec<CardDefinition>,
}

impl DeckManager {
    /// Creates a deck with every card in the draw pile, in the given order.
    pub fn new(cards: Vec<CardDefinition>) -> Self {
        Self {
            draw_pile: cards,
            hand: Vec::new(),
            discard_pile: Vec::new(),
        }
    }

    /// Creates a deck with every card in the draw pile, shuffled.
    pub fn shuffled(mut cards: Vec<CardDefinition>, rng: &mut dyn RandomSource) -> Self {
        shuffle(&mut cards, rng);
        Self::new(cards)
    }

    pub fn draw_pile(&self) -> &[CardDefinition] {
        &self.draw_pile
    }

    pub fn hand(&self) -> &[CardDefinition] {
        &self.hand
    }

    pub fn discard_pile(&self) -> &[CardDefinition] {
        &self.discard_pile
    }

    /// Total number of card instances across all partitions.
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws up to `count` cards into the hand.
    ///
    /// When the draw pile runs out, the discard pile is shuffled into it. When
    /// both are empty the draw stops early; a partial draw is not an error.
    pub fn draw(&mut self, count: usize, rng: &mut dyn RandomSource) -> DrawReport {
        let mut report = DrawReport {
            requested: count,
            ..DrawReport::default()
        };

        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    tracing::debug!("draw and discard piles are both empty");
                    break;
                }
                report.recycled += self.recycle_discard_pile(rng);
            }

            let Some(card) = self.draw_pile.pop() else {
                break;
            };
            tracing::debug!(card = %card.name, "drew card");
            self.hand.push(card);
            report.drawn += 1;
        }

        report
    }

    /// Moves a single card from the hand to the discard pile.
    ///
    /// Returns the moved card, or `None` (without mutation) if the index is
    /// out of bounds.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<&CardDefinition> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard_pile.push(card);
        self.discard_pile.last()
    }

    /// Moves the whole hand to the discard pile, returning how many cards moved.
    pub fn discard_hand(&mut self) -> usize {
        let moved = self.hand.len();
        self.discard_pile.append(&mut self.hand);
        moved
    }

    /// Aggregates card name → count over every partition, sorted by name.
    pub fn counts(&self) -> Vec<DeckCount> {
        let mut counts: Vec<DeckCount> = Vec::new();
        let all = self
            .draw_pile
            .iter()
            .chain(self.hand.iter())
            .chain(self.discard_pile.iter());

        for card in all {
            match counts.iter_mut().find(|entry| entry.name == card.name) {
                Some(entry) => entry.count += 1,
                None => counts.push(DeckCount {
                    name: card.name.clone(),
                    cost: card.cost,
                    count: 1,
                }),
            }
        }

        counts.sort_by(|a, b| a.name.cmp(&b.name));
        counts
    }

    fn recycle_discard_pile(&mut self, rng: &mut dyn RandomSource) -> usize {
        let recycled = self.discard_pile.len();
        self.draw_pile.append(&mut self.discard_pile);
        shuffle(&mut self.draw_pile, rng);
        tracing::debug!(cards = recycled, "recycled discard pile into draw pile");
        recycled
    }
}

/// Fisher–Yates shuffle driven by the injected random source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

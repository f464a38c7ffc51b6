//! Card templates.
//!
//! A [`CardDefinition`] is immutable content: a deck holds many instances,
//! some with identical content, and each instance is its own list member.

/// What a card does when it resolves.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardEffectKind {
    /// Deal damage to one enemy part. Requires a target.
    Attack,
    /// Gain block.
    Defend,
    /// Reserved; acknowledged without changing state.
    Buff,
    /// Reserved; acknowledged without changing state.
    Debuff,
    /// Draw cards.
    Draw,
}

impl CardEffectKind {
    /// Returns true if the card must be aimed at an enemy part before it resolves.
    pub const fn requires_target(&self) -> bool {
        matches!(self, Self::Attack)
    }
}

/// Immutable card template.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDefinition {
    pub name: String,
    pub cost: u32,
    pub description: String,
    pub effect: CardEffectKind,
    pub magnitude: u32,
}

impl CardDefinition {
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        description: impl Into<String>,
        effect: CardEffectKind,
        magnitude: u32,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
            effect,
            magnitude,
        }
    }

    pub fn attack(name: impl Into<String>, cost: u32, damage: u32) -> Self {
        Self::new(
            name,
            cost,
            format!("Deal {damage} damage to an enemy part."),
            CardEffectKind::Attack,
            damage,
        )
    }

    pub fn defend(name: impl Into<String>, cost: u32, block: u32) -> Self {
        Self::new(
            name,
            cost,
            format!("Gain {block} block."),
            CardEffectKind::Defend,
            block,
        )
    }

    pub fn draw(name: impl Into<String>, cost: u32, cards: u32) -> Self {
        Self::new(
            name,
            cost,
            format!("Draw {cards} cards."),
            CardEffectKind::Draw,
            cards,
        )
    }
}

impl core::fmt::Display for CardDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[{}] cost {} - {} ({} {})",
            self.name, self.cost, self.description, self.effect, self.magnitude
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_attack_requires_target() {
        assert!(CardEffectKind::Attack.requires_target());
        assert!(!CardEffectKind::Defend.requires_target());
        assert!(!CardEffectKind::Draw.requires_target());
        assert!(!CardEffectKind::Buff.requires_target());
        assert!(!CardEffectKind::Debuff.requires_target());
    }

    #[test]
    fn effect_kind_parses_case_insensitively() {
        assert_eq!("ATTACK".parse::<CardEffectKind>(), Ok(CardEffectKind::Attack));
        assert_eq!("draw".parse::<CardEffectKind>(), Ok(CardEffectKind::Draw));
        assert_eq!(CardEffectKind::Debuff.to_string(), "debuff");
    }

    #[test]
    fn display_includes_cost_and_effect() {
        let card = CardDefinition::attack("Strike", 1, 6);
        assert_eq!(
            card.to_string(),
            "[Strike] cost 1 - Deal 6 damage to an enemy part. (attack 6)"
        );
    }
}

/// Kind of action an enemy part can declare.
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
pub enum IntentKind {
    /// Damage the player.
    Attack,
    /// Add block to the acting part.
    Defend,
    /// Reserved; announced but has no effect.
    Buff,
    /// Reserved; announced but has no effect.
    Debuff,
}

/// A declared enemy action for the upcoming enemy turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyIntent {
    pub kind: IntentKind,
    pub magnitude: u32,
    pub description: String,
}

impl EnemyIntent {
    pub fn new(kind: IntentKind, magnitude: u32, description: impl Into<String>) -> Self {
        Self {
            kind,
            magnitude,
            description: description.into(),
        }
    }

    pub fn attack(damage: u32) -> Self {
        Self::new(IntentKind::Attack, damage, format!("Deal {damage} damage"))
    }

    pub fn defend(block: u32) -> Self {
        Self::new(IntentKind::Defend, block, format!("Gain {block} block"))
    }
}

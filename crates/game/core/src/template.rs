//! Combatant templates and their construction-time validation.
//!
//! Templates are static configuration supplied before a session exists. They
//! can be deserialized from RON files (with the `serde` feature) and are turned
//! into [`Player`](crate::Player) and [`Enemy`](crate::Enemy) records by the
//! `from_template` factories. A template that breaks an invariant is rejected
//! here with a [`ConstructionError`], so defects never surface mid-combat.

use crate::card::CardDefinition;
use crate::combatant::EnemyIntent;
use crate::error::{ErrorSeverity, GameError};

/// Template for one enemy part.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartTemplate {
    pub name: String,
    pub max_health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_core: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub intents: Vec<EnemyIntent>,
}

impl PartTemplate {
    /// Core part: no repertoire, its destruction defeats the enemy.
    pub fn core(name: impl Into<String>, max_health: u32) -> Self {
        Self {
            name: name.into(),
            max_health,
            is_core: true,
            intents: Vec::new(),
        }
    }

    /// Non-core part acting from the given repertoire.
    pub fn limb(name: impl Into<String>, max_health: u32, intents: Vec<EnemyIntent>) -> Self {
        Self {
            name: name.into(),
            max_health,
            is_core: false,
            intents,
        }
    }
}

/// Template for an enemy: an ordered list of parts, exactly one of them core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub name: String,
    pub parts: Vec<PartTemplate>,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
        }
    }

    /// Appends a part (builder pattern).
    #[must_use]
    pub fn with_part(mut self, part: PartTemplate) -> Self {
        self.parts.push(part);
        self
    }

    /// Checks the construction invariants.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.parts.is_empty() {
            return Err(ConstructionError::NoParts {
                enemy: self.name.clone(),
            });
        }

        let mut core_index = None;
        for (index, part) in self.parts.iter().enumerate() {
            if part.max_health == 0 {
                return Err(ConstructionError::ZeroHealthPart {
                    enemy: self.name.clone(),
                    index,
                });
            }
            if part.is_core {
                if let Some(first) = core_index {
                    return Err(ConstructionError::MultipleCoreParts {
                        enemy: self.name.clone(),
                        first,
                        second: index,
                    });
                }
                core_index = Some(index);
            }
        }

        match core_index {
            Some(_) => Ok(()),
            None => Err(ConstructionError::NoCorePart {
                enemy: self.name.clone(),
            }),
        }
    }
}

/// Template for the player: vitals and the full starting deck.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerTemplate {
    pub max_health: u32,
    pub max_energy: u32,
    pub deck: Vec<CardDefinition>,
}

impl PlayerTemplate {
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_MAX_ENERGY: u32 = 3;

    pub fn new(max_health: u32, max_energy: u32, deck: Vec<CardDefinition>) -> Self {
        Self {
            max_health,
            max_energy,
            deck,
        }
    }

    /// Default vitals with three Strikes and two Defends.
    pub fn starter() -> Self {
        let mut deck = vec![CardDefinition::attack("Strike", 1, 6); 3];
        deck.extend(vec![CardDefinition::defend("Defend", 1, 5); 2]);
        Self::new(Self::DEFAULT_MAX_HEALTH, Self::DEFAULT_MAX_ENERGY, deck)
    }

    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.max_health == 0 {
            return Err(ConstructionError::ZeroHealthPlayer);
        }
        Ok(())
    }
}

/// Configuration defects that prevent a combat session from being built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionError {
    #[error("enemy '{enemy}' has no parts")]
    NoParts { enemy: String },

    #[error("enemy '{enemy}' has no core part")]
    NoCorePart { enemy: String },

    #[error("enemy '{enemy}' has more than one core part (parts {first} and {second})")]
    MultipleCoreParts {
        enemy: String,
        first: usize,
        second: usize,
    },

    #[error("enemy '{enemy}' part {index} has zero max health")]
    ZeroHealthPart { enemy: String, index: usize },

    #[error("player template has zero max health")]
    ZeroHealthPlayer,
}

impl GameError for ConstructionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoParts { .. } => "CONSTRUCTION_NO_PARTS",
            Self::NoCorePart { .. } => "CONSTRUCTION_NO_CORE_PART",
            Self::MultipleCoreParts { .. } => "CONSTRUCTION_MULTIPLE_CORE_PARTS",
            Self::ZeroHealthPart { .. } => "CONSTRUCTION_ZERO_HEALTH_PART",
            Self::ZeroHealthPlayer => "CONSTRUCTION_ZERO_HEALTH_PLAYER",
        }
    }
}

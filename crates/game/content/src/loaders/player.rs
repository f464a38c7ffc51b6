//! Player loader.
//!
//! The player file names cards by catalog id with a copy count; the loader
//! expands that into the full [`PlayerTemplate`] deck.

use std::path::Path;

use combat_core::PlayerTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{CardCatalog, CardLoader, LoadResult, read_file};

/// On-disk player description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSpec {
    #[serde(default = "default_max_health")]
    pub max_health: u32,
    #[serde(default = "default_max_energy")]
    pub max_energy: u32,
    /// `(card id, copies)` pairs, in deck order.
    pub deck: Vec<(String, usize)>,
}

fn default_max_health() -> u32 {
    PlayerTemplate::DEFAULT_MAX_HEALTH
}

fn default_max_energy() -> u32 {
    PlayerTemplate::DEFAULT_MAX_ENERGY
}

impl PlayerSpec {
    /// Expands card ids against the catalog and validates the result.
    pub fn resolve(&self, cards: &CardCatalog) -> LoadResult<PlayerTemplate> {
        let mut deck = Vec::new();
        for (card_id, copies) in &self.deck {
            let card = CardLoader::find(cards, card_id).ok_or_else(|| {
                anyhow::anyhow!("Player deck references unknown card '{}'", card_id)
            })?;
            deck.extend(std::iter::repeat_n(card.clone(), *copies));
        }

        let template = PlayerTemplate::new(self.max_health, self.max_energy, deck);
        template
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid player template: {}", e))?;
        Ok(template)
    }
}

/// Loader for the player from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load the player from a RON file, resolving deck entries against `cards`.
    pub fn load(path: &Path, cards: &CardCatalog) -> LoadResult<PlayerTemplate> {
        let content = read_file(path)?;
        let spec: PlayerSpec = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player RON: {}", e))?;

        let template = spec.resolve(cards)?;
        tracing::debug!(
            max_health = template.max_health,
            deck = template.deck.len(),
            "loaded player"
        );
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::CardDefinition;

    fn catalog() -> CardCatalog {
        vec![
            ("strike".into(), CardDefinition::attack("Strike", 1, 6)),
            ("defend".into(), CardDefinition::defend("Defend", 1, 5)),
        ]
    }

    #[test]
    fn deck_entries_expand_to_copies() {
        let spec: PlayerSpec =
            ron::from_str(r#"(max_health: 80, deck: [("strike", 3), ("defend", 2)])"#).unwrap();

        let template = spec.resolve(&catalog()).unwrap();

        assert_eq!(template.max_health, 80);
        assert_eq!(template.max_energy, PlayerTemplate::DEFAULT_MAX_ENERGY);
        assert_eq!(template.deck.len(), 5);
        assert_eq!(template.deck[0].name, "Strike");
        assert_eq!(template.deck[4].name, "Defend");
    }

    #[test]
    fn unknown_card_fails() {
        let spec = PlayerSpec {
            max_health: 10,
            max_energy: 3,
            deck: vec![("fireball".into(), 1)],
        };

        let err = spec.resolve(&catalog()).unwrap_err();

        assert!(err.to_string().contains("fireball"));
    }

    #[test]
    fn zero_health_player_fails() {
        let spec = PlayerSpec {
            max_health: 0,
            max_energy: 3,
            deck: Vec::new(),
        };

        assert!(spec.resolve(&catalog()).is_err());
    }
}

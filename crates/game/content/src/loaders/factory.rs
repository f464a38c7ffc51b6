//! Content factory for building combat setups from data files.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, CombatSetup, EnemyTemplate, PlayerTemplate};

use crate::loaders::{
    CardCatalog, CardLoader, ConfigLoader, EnemyLoader, LoadResult, PlayerLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── cards.ron
/// ├── player.ron
/// └── enemies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<CardCatalog> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load the player from `player.ron`, resolving its deck against `cards`.
    pub fn load_player(&self, cards: &CardCatalog) -> LoadResult<PlayerTemplate> {
        PlayerLoader::load(&self.data_dir.join("player.ron"), cards)
    }

    /// Load enemy catalog from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Loads everything a combat needs.
    ///
    /// `enemy_id` picks an entry of `enemies.ron`; `None` takes the first one.
    pub fn load_setup(&self, enemy_id: Option<&str>) -> LoadResult<CombatSetup> {
        let config = self.load_config()?;
        let cards = self.load_cards()?;
        let player = self.load_player(&cards)?;
        let enemies = self.load_enemies()?;

        let enemy = match enemy_id {
            Some(id) => enemies
                .into_iter()
                .find(|(enemy_id, _)| enemy_id == id)
                .map(|(_, template)| template)
                .ok_or_else(|| anyhow::anyhow!("Unknown enemy '{}'", id))?,
            None => enemies
                .into_iter()
                .next()
                .map(|(_, template)| template)
                .ok_or_else(|| anyhow::anyhow!("Enemy catalog is empty"))?,
        };

        tracing::info!(
            data_dir = %self.data_dir.display(),
            enemy = %enemy.name,
            deck = player.deck.len(),
            "loaded combat setup"
        );
        Ok(CombatSetup::new(config, player, enemy))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

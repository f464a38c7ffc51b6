//! Card catalog loader.

use std::collections::HashSet;
use std::path::Path;

use combat_core::CardDefinition;

use crate::loaders::{LoadResult, read_file};

/// Card id → definition, in file order.
pub type CardCatalog = Vec<(String, CardDefinition)>;

/// Loader for the card catalog from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load the card catalog from a RON file.
    ///
    /// RON format: `Vec<(String, CardDefinition)>`. Ids must be unique.
    pub fn load(path: &Path) -> LoadResult<CardCatalog> {
        let content = read_file(path)?;
        let catalog: CardCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        if let Some((id, _)) = catalog.iter().find(|(id, _)| !seen.insert(id.clone())) {
            anyhow::bail!("{}: duplicate card id '{}'", path.display(), id);
        }

        tracing::debug!(cards = catalog.len(), "loaded card catalog");
        Ok(catalog)
    }

    /// Looks up a card by id.
    pub fn find<'c>(catalog: &'c CardCatalog, id: &str) -> Option<&'c CardDefinition> {
        catalog
            .iter()
            .find(|(card_id, _)| card_id == id)
            .map(|(_, card)| card)
    }
}

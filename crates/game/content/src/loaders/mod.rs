//! Content loaders for reading combat data from files.
//!
//! Cards, the player, and enemies are RON catalogs; the combat config is TOML.
//! Every loader validates what it reads, so a malformed file fails here and
//! never reaches a running combat.

pub mod cards;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod player;

pub use cards::{CardCatalog, CardLoader};
pub use config::ConfigLoader;
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use player::{PlayerLoader, PlayerSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

//! Data-driven content definitions and loaders.
//!
//! This crate turns data files into the templates `combat-core` builds
//! sessions from:
//! - Card catalog (RON)
//! - Player vitals and starting deck (RON, cards referenced by id)
//! - Enemy catalog with parts and intent repertoires (RON)
//! - Combat configuration (TOML)
//!
//! Content is consumed before a session is constructed and never appears in
//! combat state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardCatalog, CardLoader, ConfigLoader, ContentFactory, EnemyLoader, PlayerLoader, PlayerSpec,
};

//! Deterministic card-combat rules shared across clients.
//!
//! `combat-core` defines one turn-based fight between a player holding a deck
//! of cards and a multi-part enemy. It exposes a single command entry point,
//! [`CombatController::dispatch`], plus pure queries over the
//! [`CombatSession`]. All state mutation flows through [`CombatEngine`], and
//! all randomness through an injected [`RandomSource`].
pub mod card;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod controller;
pub mod deck;
pub mod effect;
pub mod engine;
pub mod error;
pub mod event;
pub mod planner;
pub mod query;
pub mod rng;
pub mod state;
pub mod template;

pub use card::{CardDefinition, CardEffectKind};
pub use combat::DamageReport;
pub use combatant::{Enemy, EnemyIntent, EnemyPart, IntentKind, Player};
pub use config::CombatConfig;
pub use controller::{CombatController, CombatSetup};
pub use deck::{DeckCount, DeckManager, DrawReport};
pub use effect::{CardEffectResolver, EffectError, EffectOutcome, EffectTarget};
pub use engine::{CombatCommand, CombatEngine, CombatError, CommandOutcome};
pub use error::{ErrorSeverity, GameError};
pub use event::{BlockTarget, CombatEvent};
pub use planner::{EnemyIntentPlanner, PlannedIntent};
pub use query::{EnemyStatusSummary, HandCard, HandSummary, PartStatus, PileSizes, TargetablePart};
pub use rng::{PcgRng, RandomSource};
pub use state::{CombatPhase, CombatSession, ResumePhase, TargetSelection, TurnState};
pub use template::{ConstructionError, EnemyTemplate, PartTemplate, PlayerTemplate};

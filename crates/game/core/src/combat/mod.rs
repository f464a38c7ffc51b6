//! Damage resolution shared by the player and enemy parts.
//!
//! Both sides absorb damage with the same rule: block is consumed first and
//! only the remainder reaches health, which floors at zero.

pub mod damage;

pub use damage::{DamageReport, apply_blocked_damage, apply_damage};

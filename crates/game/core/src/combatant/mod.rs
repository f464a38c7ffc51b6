//! Player and enemy value types with their direct mutators.
//!
//! Enemy parts live in an indexed list owned by [`Enemy`]; callers refer to a
//! part by its stable index, never by reference, so targeting, damage, and
//! status queries always agree on which part "part 2" is.

mod enemy;
mod intent;
mod part;
mod player;

pub use enemy::Enemy;
pub use intent::{EnemyIntent, IntentKind};
pub use part::EnemyPart;
pub use player::Player;

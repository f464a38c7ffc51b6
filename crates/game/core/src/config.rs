/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Number of cards drawn at the start of every player turn.
    pub hand_size: usize,

    /// Seed for the random source. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HAND_SIZE: usize = 5;

    pub fn new() -> Self {
        Self {
            hand_size: Self::DEFAULT_HAND_SIZE,
            seed: None,
        }
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

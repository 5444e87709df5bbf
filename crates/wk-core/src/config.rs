//! Configuration for a game session.

/// Configuration for a [`Game`](crate::Game).
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible plays. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Fix the RNG seed so every play is reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

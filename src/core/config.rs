//! Game configuration.
//!
//! `GameConfig` collects the knobs a front-end sets before dealing: the
//! shuffle seed, whether to shuffle at all, the replay log capacity, and the
//! two player names.

use serde::{Deserialize, Serialize};

/// Default replay log capacity.
pub const DEFAULT_MOVE_LOG_CAPACITY: usize = 200;

/// Longest accepted player name.
pub const MAX_NAME_LEN: usize = 30;

/// Game setup parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the deck shuffle. Same seed, same deal.
    pub seed: u64,

    /// Shuffle the deck before dealing. When false the deck is dealt in order.
    pub shuffle_deck: bool,

    /// Maximum number of moves kept for replay.
    pub move_log_capacity: usize,

    /// Names of Player 1 (bottom) and Player 2 (top).
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            shuffle_deck: true,
            move_log_capacity: DEFAULT_MOVE_LOG_CAPACITY,
            player_names: ["PlayerOne".to_string(), "PlayerTwo".to_string()],
        }
    }
}

impl GameConfig {
    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal the deck in the given order instead of shuffling.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_deck = false;
        self
    }

    /// Set the replay log capacity.
    #[must_use]
    pub fn with_move_log_capacity(mut self, capacity: usize) -> Self {
        self.move_log_capacity = capacity;
        self
    }

    /// Set both player names.
    #[must_use]
    pub fn with_player_names(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.player_names = [one.into(), two.into()];
        self
    }
}

/// Whether `name` is an acceptable player name: 1..=30 ASCII letters.
#[must_use]
pub fn is_valid_player_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_NAME_LEN && name.chars().all(|c| c.is_ascii_alphabetic())
}

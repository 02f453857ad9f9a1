//! Winner ranking.
//!
//! A `Leaderboard` keeps the best `MAX_ENTRIES` wins, fewest turns first.
//! Storage is the caller's business; this module only parses and renders the
//! text layout:
//!
//! ```text
//! Sensei
//! 12
//! Student
//! 15
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Entries kept on the board.
pub const MAX_ENTRIES: usize = 10;

/// One win: who, and how many turns it took.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub turns: u32,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, turns: u32) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }
}

/// Leaderboard text could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("entry {name:?} has no turn count")]
    MissingTurns { name: String },
    #[error("entry {name:?} has invalid turn count {token:?}")]
    InvalidTurns { name: String, token: String },
}

/// Best wins, fewest turns first. Ties keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `name\nturns\n` layout.
    pub fn parse(text: &str) -> Result<Self, LeaderboardError> {
        let mut board = Self::new();
        let mut tokens = text.split_whitespace();
        while let Some(name) = tokens.next() {
            let token = tokens.next().ok_or_else(|| LeaderboardError::MissingTurns {
                name: name.to_string(),
            })?;
            let turns = token.parse().map_err(|_| LeaderboardError::InvalidTurns {
                name: name.to_string(),
                token: token.to_string(),
            })?;
            board.record(LeaderboardEntry::new(name, turns));
        }
        Ok(board)
    }

    /// Insert a win. Returns its 0-based rank, or `None` if it did not make
    /// the cut.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.turns <= entry.turns);
        if rank >= MAX_ENTRIES {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    /// Entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render in the `name\nturns\n` layout.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}\n{}\n", e.name, e.turns))
            .collect()
    }
}

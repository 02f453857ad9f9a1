//! Win detection.
//!
//! Checked once per completed turn, in this priority order:
//! 1. Player 1's master on Player 2's temple
//! 2. Player 2's master on Player 1's temple
//! 3. Player 1's master captured (Player 2 wins)
//! 4. Player 2's master captured (Player 1 wins)
//!
//! A position satisfying several conditions at once reports the first.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, Position};

/// Result of a win check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Player1Wins,
    Player2Wins,
    NoWinner,
}

impl GameResult {
    /// A win for `player`.
    #[must_use]
    pub const fn win_for(player: PlayerId) -> Self {
        if player.index() == 0 {
            GameResult::Player1Wins
        } else {
            GameResult::Player2Wins
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameResult::Player1Wins => Some(PlayerId::ONE),
            GameResult::Player2Wins => Some(PlayerId::TWO),
            GameResult::NoWinner => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::NoWinner)
    }
}

/// Check the board for a winner.
#[must_use]
pub fn check_winner(board: &Board) -> GameResult {
    let one = board.master_position(PlayerId::ONE);
    let two = board.master_position(PlayerId::TWO);

    if one == Some(Position::temple(PlayerId::TWO)) {
        return GameResult::Player1Wins;
    }
    if two == Some(Position::temple(PlayerId::ONE)) {
        return GameResult::Player2Wins;
    }
    match (one, two) {
        (None, _) => GameResult::Player2Wins,
        (_, None) => GameResult::Player1Wins,
        _ => GameResult::NoWinner,
    }
}

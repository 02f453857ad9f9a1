//! Board coordinates.
//!
//! Row 0 is the top (Player 2's home row), row 4 the bottom (Player 1's home
//! row). Columns run left to right. The temple of each player is the centre
//! column of their home row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::PlayerId;

/// Board edge length.
pub const BOARD_SIZE: usize = 5;

/// Column of both temples.
pub const TEMPLE_COL: u8 = (BOARD_SIZE / 2) as u8;

/// Decoded coordinates that are not on the board.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("position ({row}, {col}) is off the board")]
pub struct OffBoard {
    pub row: u8,
    pub col: u8,
}

/// A cell on the 5x5 board. Always on the board, including after decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Wire form of a `Position`, checked before use.
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = OffBoard;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::checked(i32::from(raw.row), i32::from(raw.col)).ok_or(OffBoard {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Position {
    /// Create a position. Panics if either coordinate is off the board.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE, "row off the board");
        assert!((col as usize) < BOARD_SIZE, "column off the board");
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Create a position from signed coordinates, `None` if off the board.
    #[must_use]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let range = 0..BOARD_SIZE as i32;
        if range.contains(&row) && range.contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Temple cell of `player` (centre of their home row).
    #[must_use]
    pub const fn temple(player: PlayerId) -> Self {
        Self::new(player.home_row(), TEMPLE_COL)
    }

    /// Displacement `(Δrow, Δcol)` from `self` to `to`.
    #[must_use]
    pub const fn offset_to(self, to: Position) -> (i32, i32) {
        (
            to.row as i32 - self.row as i32,
            to.col as i32 - self.col as i32,
        )
    }

    /// Row-major index in `0..25`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// All 25 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

//! Movement card definitions.
//!
//! A `Card` is a named, immutable movement pattern plus the facing colour
//! printed on it. The pattern is a 5x5 mark grid centred on the moving
//! piece, drawn from the bottom (blue) player's point of view: grid row 0 is
//! two rows "forward" for blue.
//!
//! Facing transform: a red mover negates the row displacement before lookup.
//! This is the only place the engine accounts for board orientation.

use serde::{Deserialize, Serialize};

use crate::core::Facing;

/// Rows and columns in a pattern grid.
pub const PATTERN_SIZE: usize = 5;

/// Index of the origin row and column within the pattern grid.
pub const PATTERN_CENTER: usize = PATTERN_SIZE / 2;

/// Identity of a card within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A 5x5 grid of legal relative destinations.
///
/// Never marks its own centre cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    marks: [[bool; PATTERN_SIZE]; PATTERN_SIZE],
}

impl Pattern {
    /// Build a pattern from a mark grid. Returns `None` if the centre is marked.
    #[must_use]
    pub fn from_grid(marks: [[bool; PATTERN_SIZE]; PATTERN_SIZE]) -> Option<Self> {
        if marks[PATTERN_CENTER][PATTERN_CENTER] {
            None
        } else {
            Some(Self { marks })
        }
    }

    /// Build a pattern from blue-perspective `(Δrow, Δcol)` offsets.
    ///
    /// Offsets outside the grid and the origin itself are ignored.
    ///
    /// ```
    /// use rust_onitama::cards::Pattern;
    ///
    /// let tiger = Pattern::from_offsets(&[(-2, 0), (1, 0)]);
    /// assert!(tiger.is_marked(-2, 0));
    /// assert!(!tiger.is_marked(2, 0));
    /// ```
    #[must_use]
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Self {
        let mut marks = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        for &(d_row, d_col) in offsets {
            if (d_row, d_col) == (0, 0) {
                continue;
            }
            if let Some((r, c)) = grid_index(d_row, d_col) {
                marks[r][c] = true;
            }
        }
        Self { marks }
    }

    /// Whether the blue-perspective offset is marked. Off-grid offsets are not.
    #[must_use]
    pub fn is_marked(&self, d_row: i32, d_col: i32) -> bool {
        grid_index(d_row, d_col).is_some_and(|(r, c)| self.marks[r][c])
    }

    /// Marked offsets in blue perspective, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..PATTERN_SIZE).flat_map(move |r| {
            (0..PATTERN_SIZE).filter_map(move |c| {
                self.marks[r][c].then(|| {
                    (
                        r as i32 - PATTERN_CENTER as i32,
                        c as i32 - PATTERN_CENTER as i32,
                    )
                })
            })
        })
    }

    /// Whether the pattern is symmetric about its vertical axis.
    #[must_use]
    pub fn is_mirror_symmetric(&self) -> bool {
        self.marks
            .iter()
            .all(|row| (0..PATTERN_SIZE).all(|c| row[c] == row[PATTERN_SIZE - 1 - c]))
    }

    /// Raw mark grid, row 0 first.
    #[must_use]
    pub fn grid(&self) -> &[[bool; PATTERN_SIZE]; PATTERN_SIZE] {
        &self.marks
    }
}

fn grid_index(d_row: i32, d_col: i32) -> Option<(usize, usize)> {
    let r = PATTERN_CENTER as i32 + d_row;
    let c = PATTERN_CENTER as i32 + d_col;
    let range = 0..PATTERN_SIZE as i32;
    (range.contains(&r) && range.contains(&c)).then_some((r as usize, c as usize))
}

/// Immutable movement card.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::{Card, CardId, Pattern};
/// use rust_onitama::core::Facing;
///
/// let crab = Card::new(CardId::new(0), "Crab", Facing::Blue, Pattern::from_offsets(&[(-1, 0), (0, -2), (0, 2)]));
/// assert!(crab.pattern_contains(Facing::Blue, -1, 0));
/// assert!(crab.pattern_contains(Facing::Red, 1, 0));
/// assert!(!crab.pattern_contains(Facing::Red, -1, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Colour printed on the card. The spare's colour decides who moves first.
    pub facing: Facing,
    pattern: Pattern,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, facing: Facing, pattern: Pattern) -> Self {
        Self {
            id,
            name: name.into(),
            facing,
            pattern,
        }
    }

    /// Whether a mover with `facing` may travel by `(Δrow, Δcol)` on the board.
    #[must_use]
    pub fn pattern_contains(&self, facing: Facing, d_row: i32, d_col: i32) -> bool {
        let d_row = if facing.is_mirrored() { -d_row } else { d_row };
        self.pattern.is_marked(d_row, d_col)
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Same card under a different in-game identity.
    #[must_use]
    pub fn with_id(mut self, id: CardId) -> Self {
        self.id = id;
        self
    }
}

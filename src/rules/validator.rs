//! Move legality.
//!
//! `is_legal_move` is the single source of truth for whether a piece may
//! travel between two cells with a given card. It is a pure predicate over
//! valid board coordinates and never mutates anything, so input retry loops
//! can call it freely.

use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::Card;
use crate::core::{Facing, PlayerId, Position};

/// Destinations of one piece under one card. Most cards mark four or fewer.
pub type Destinations = SmallVec<[Position; 8]>;

/// Whether `mover` may move the piece on `from` to `to` using `card`.
///
/// Rejects, in order: the null move, a source not owned by `mover`, an
/// offset the card does not mark for `facing`, and landing on one of the
/// mover's own pieces. Landing on an opposing piece is a capture and is
/// legal, including capturing the opposing master.
///
/// ## Example
///
/// ```
/// use rust_onitama::board::Board;
/// use rust_onitama::cards::{Card, CardId, Pattern};
/// use rust_onitama::core::{Facing, PlayerId, Position};
/// use rust_onitama::rules::is_legal_move;
///
/// let ox = Card::new(CardId::new(0), "Ox", Facing::Blue, Pattern::from_offsets(&[(-1, 0)]));
/// let board = Board::initial();
///
/// assert!(is_legal_move(&board, PlayerId::ONE, Position::new(4, 2), Position::new(3, 2), &ox, Facing::Blue));
/// // Red sees the pattern upside down: its forward is down the board.
/// assert!(is_legal_move(&board, PlayerId::TWO, Position::new(0, 2), Position::new(1, 2), &ox, Facing::Red));
/// ```
#[must_use]
pub fn is_legal_move(
    board: &Board,
    mover: PlayerId,
    from: Position,
    to: Position,
    card: &Card,
    facing: Facing,
) -> bool {
    if from == to {
        return false;
    }
    if !board.get(from).is_owned_by(mover) {
        return false;
    }
    let (d_row, d_col) = from.offset_to(to);
    if !card.pattern_contains(facing, d_row, d_col) {
        return false;
    }
    !board.get(to).is_owned_by(mover)
}

/// Every legal destination of the piece on `from` under `card`, row-major.
#[must_use]
pub fn legal_destinations(
    board: &Board,
    mover: PlayerId,
    from: Position,
    card: &Card,
    facing: Facing,
) -> Destinations {
    Position::all()
        .filter(|&to| is_legal_move(board, mover, from, to, card, facing))
        .collect()
}

//! Exhaustive move-availability search.
//!
//! Brute force over every owned piece, every destination and every held
//! card. The board has 25 cells and a player holds two cards, so a full scan
//! is a few hundred predicate calls.

use smallvec::SmallVec;

use super::validator::is_legal_move;
use crate::board::Board;
use crate::cards::Card;
use crate::core::{Facing, PlayerId, Position};

/// Pieces with at least one legal destination.
pub type MovablePieces = SmallVec<[Position; 5]>;

/// Whether the piece on `from` has any legal destination under `card`.
#[must_use]
pub fn has_legal_move_for_piece_and_card(
    board: &Board,
    player: PlayerId,
    from: Position,
    card: &Card,
    facing: Facing,
) -> bool {
    Position::all().any(|to| is_legal_move(board, player, from, to, card, facing))
}

/// Whether the piece on `from` can move under any of `held`.
#[must_use]
pub fn has_legal_move_for_piece(
    board: &Board,
    player: PlayerId,
    from: Position,
    held: &[&Card],
    facing: Facing,
) -> bool {
    held.iter()
        .any(|card| has_legal_move_for_piece_and_card(board, player, from, card, facing))
}

/// Whether any of `player`'s pieces can move under any of `held`.
///
/// When this is false the turn is a forced exchange.
#[must_use]
pub fn has_any_legal_move(board: &Board, player: PlayerId, held: &[&Card], facing: Facing) -> bool {
    board
        .pieces(player)
        .any(|(from, _)| has_legal_move_for_piece(board, player, from, held, facing))
}

/// `player`'s pieces that can move under any of `held`, row-major.
#[must_use]
pub fn movable_pieces(board: &Board, player: PlayerId, held: &[&Card], facing: Facing) -> MovablePieces {
    board
        .pieces(player)
        .map(|(pos, _)| pos)
        .filter(|&from| has_legal_move_for_piece(board, player, from, held, facing))
        .collect()
}

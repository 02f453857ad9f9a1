//! Board cells and the pieces that occupy them.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Kind of piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// The piece that wins by reaching the opposing temple and loses when captured.
    Master,
    Student,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
    pub kind: PieceKind,
}

impl Piece {
    #[must_use]
    pub const fn master(owner: PlayerId) -> Self {
        Self {
            owner,
            kind: PieceKind::Master,
        }
    }

    #[must_use]
    pub const fn student(owner: PlayerId) -> Self {
        Self {
            owner,
            kind: PieceKind::Student,
        }
    }

    #[must_use]
    pub const fn is_master(self) -> bool {
        matches!(self.kind, PieceKind::Master)
    }
}

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// The occupant, if any.
    #[must_use]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Whether the occupant belongs to `player`.
    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self.piece().is_some_and(|p| p.owner == player)
    }
}

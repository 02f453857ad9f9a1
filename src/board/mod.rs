//! Board model: typed cells on a fixed 5x5 grid.
//!
//! Ownership is a field of the occupant, never a display string. Colours and
//! glyphs are a presentation concern keyed by `Piece::owner`.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Piece, PieceKind};
pub use grid::{Board, PIECES_PER_PLAYER};

//! The 5x5 board.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Piece};
use crate::core::{PlayerId, Position, BOARD_SIZE, TEMPLE_COL};

/// Pieces each player starts with.
pub const PIECES_PER_PLAYER: usize = 5;

/// Fixed 5x5 grid of cells.
///
/// Row 0 is Player 2's home row, row 4 Player 1's. The occupant count never
/// grows: moves relocate a piece and captures remove one.
///
/// ```
/// use rust_onitama::board::Board;
/// use rust_onitama::core::{PlayerId, Position};
///
/// let board = Board::initial();
/// assert_eq!(board.occupant_count(), 10);
/// assert_eq!(board.master_position(PlayerId::ONE), Some(Position::new(4, 2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starting position: each home row holds four students with the master
    /// on the temple.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for player in PlayerId::all() {
            let row = player.home_row();
            for col in 0..BOARD_SIZE as u8 {
                let piece = if col == TEMPLE_COL {
                    Piece::master(player)
                } else {
                    Piece::student(player)
                };
                board.set(Position::new(row, col), Cell::Occupied(piece));
            }
        }
        board
    }

    /// Contents of a cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Overwrite a cell.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row() as usize][pos.col() as usize] = cell;
    }

    /// Place a piece (builder form, for setting up positions).
    #[must_use]
    pub fn with_piece(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, Cell::Occupied(piece));
        self
    }

    /// Move the occupant of `from` to `to`, returning any captured piece.
    ///
    /// Does nothing when `from` is empty.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        let mover = self.get(from).piece()?;
        let captured = self.get(to).piece();
        self.set(from, Cell::Empty);
        self.set(to, Cell::Occupied(mover));
        captured
    }

    /// Pieces owned by `owner`, row-major.
    pub fn pieces(&self, owner: PlayerId) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| {
            self.get(pos)
                .piece()
                .filter(|piece| piece.owner == owner)
                .map(|piece| (pos, piece))
        })
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupant_count(&self) -> usize {
        Position::all().filter(|&pos| !self.get(pos).is_empty()).count()
    }

    /// Where `owner`'s master stands, `None` once captured.
    #[must_use]
    pub fn master_position(&self, owner: PlayerId) -> Option<Position> {
        self.pieces(owner)
            .find(|(_, piece)| piece.is_master())
            .map(|(pos, _)| pos)
    }

    /// The same position seen from the other side: rows flipped and
    /// ownership swapped.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut board = Self::empty();
        for pos in Position::all() {
            if let Some(piece) = self.get(pos).piece() {
                let flipped = Position::new(BOARD_SIZE as u8 - 1 - pos.row(), pos.col());
                let swapped = Piece {
                    owner: piece.owner.opponent(),
                    kind: piece.kind,
                };
                board.set(flipped, Cell::Occupied(swapped));
            }
        }
        board
    }
}

impl std::fmt::Display for Board {
    /// Player 1 in upper case, Player 2 in lower case, `.` for empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell.piece() {
                    None => '.',
                    Some(p) => {
                        let ch = if p.is_master() { 'm' } else { 's' };
                        if p.owner == PlayerId::ONE {
                            ch.to_ascii_uppercase()
                        } else {
                            ch
                        }
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

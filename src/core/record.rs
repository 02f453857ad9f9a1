//! Move records and the replay log.
//!
//! The `MoveLog` is append-only and capped. Pushes beyond capacity are
//! dropped: replay is best-effort and never affects play. The log is an
//! `im::Vector` so cloning a `GameState` stays cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::DEFAULT_MOVE_LOG_CAPACITY;
use super::player::PlayerId;
use super::position::Position;
use crate::board::Board;

/// Exported move: `(player 1|2, from_col, from_row, to_col, to_row, card_name)`.
pub type ExportedMove = (u8, u8, u8, u8, u8, String);

/// One executed move.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: PlayerId,
    pub from: Position,
    pub to: Position,
    /// Name of the card the move was made with.
    pub card: String,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, from: Position, to: Position, card: impl Into<String>) -> Self {
        Self {
            player,
            from,
            to,
            card: card.into(),
        }
    }

    /// Export tuple, columns before rows.
    #[must_use]
    pub fn export(&self) -> ExportedMove {
        (
            self.player.number(),
            self.from.col(),
            self.from.row(),
            self.to.col(),
            self.to.row(),
            self.card.clone(),
        )
    }
}

/// Capped, append-only sequence of executed moves.
///
/// ## Example
///
/// ```
/// use rust_onitama::core::{MoveLog, MoveRecord, PlayerId, Position};
///
/// let mut log = MoveLog::with_capacity(1);
/// assert!(log.push(MoveRecord::new(PlayerId::ONE, Position::new(4, 0), Position::new(3, 0), "Ox")));
/// assert!(!log.push(MoveRecord::new(PlayerId::TWO, Position::new(0, 0), Position::new(1, 0), "Ox")));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vector<MoveRecord>,
    capacity: usize,
}

impl Default for MoveLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MOVE_LOG_CAPACITY)
    }
}

impl MoveLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vector::new(),
            capacity,
        }
    }

    /// Append a record. Returns `false` (and drops it) when the log is full.
    pub fn push(&mut self, record: MoveRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.records.push_back(record);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Get a record by execution index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// Records in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// Export tuples in execution order.
    #[must_use]
    pub fn export(&self) -> Vec<ExportedMove> {
        self.records.iter().map(MoveRecord::export).collect()
    }

    /// Boards after each recorded move, starting from the initial layout.
    ///
    /// The first item is the board after the first move.
    pub fn replay(&self) -> impl Iterator<Item = Board> + '_ {
        self.records.iter().scan(Board::initial(), |board, record| {
            board.move_piece(record.from, record.to);
            Some(board.clone())
        })
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn record(player: PlayerId, from: (u8, u8), to: (u8, u8)) -> MoveRecord {
        MoveRecord::new(
            player,
            Position::new(from.0, from.1),
            Position::new(to.0, to.1),
            "Tiger",
        )
    }

    #[test]
    fn test_export_tuple_order() {
        let r = record(PlayerId::TWO, (0, 1), (2, 1));
        assert_eq!(r.export(), (2, 1, 0, 1, 2, "Tiger".to_string()));
    }

    #[test]
    fn test_capacity_drops_silently() {
        let mut log = MoveLog::with_capacity(2);
        assert!(log.push(record(PlayerId::ONE, (4, 0), (3, 0))));
        assert!(log.push(record(PlayerId::TWO, (0, 0), (1, 0))));
        assert!(log.is_full());
        assert!(!log.push(record(PlayerId::ONE, (3, 0), (2, 0))));
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(1).unwrap().player, PlayerId::TWO);
    }

    #[test]
    fn test_default_capacity() {
        let log = MoveLog::default();
        assert_eq!(log.capacity(), DEFAULT_MOVE_LOG_CAPACITY);
        assert!(log.is_empty());
    }

    #[test]
    fn test_replay_applies_moves() {
        let mut log = MoveLog::default();
        log.push(record(PlayerId::ONE, (4, 2), (2, 2)));
        log.push(record(PlayerId::TWO, (0, 2), (1, 2)));
        log.push(record(PlayerId::ONE, (2, 2), (1, 2)));

        let boards: Vec<_> = log.replay().collect();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0].master_position(PlayerId::ONE), Some(Position::new(2, 2)));
        let last = &boards[2];
        assert_eq!(last.get(Position::new(1, 2)).piece(), Some(Piece::master(PlayerId::ONE)));
        assert_eq!(last.master_position(PlayerId::TWO), None);
        assert_eq!(last.occupant_count(), 9);
    }

    #[test]
    fn test_bincode_round_trip() {
        let mut log = MoveLog::with_capacity(5);
        log.push(record(PlayerId::ONE, (4, 1), (3, 1)));
        let bytes = log.to_bytes().unwrap();
        let decoded = MoveLog::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, log);
        assert!(MoveLog::from_bytes(&[1, 2]).is_err());
    }

    #[test]
    fn test_off_board_record_fails_to_decode() {
        let mut log = MoveLog::default();
        log.push(record(PlayerId::ONE, (4, 4), (3, 4)));
        let mut bytes = log.to_bytes().unwrap();

        // player, from.row, from.col, to.row, to.col
        let at = bytes
            .windows(5)
            .position(|w| w == [0, 4, 4, 3, 4])
            .unwrap();
        bytes[at + 1] = 9;
        assert!(MoveLog::from_bytes(&bytes).is_err());

        bytes[at + 1] = 4;
        bytes[at] = 7;
        assert!(MoveLog::from_bytes(&bytes).is_err());

        bytes[at] = 0;
        assert_eq!(MoveLog::from_bytes(&bytes).unwrap(), log);
    }
}

//! # rust-onitama
//!
//! Rules engine for a two-player strategy game on a 5x5 board with shared
//! movement cards.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Legality, availability and win detection are pure
//!    functions over a `Board`. They never mutate, so input loops can call
//!    them as often as they like.
//!
//! 2. **One Owner**: A `GameState` is owned by exactly one `TurnController`,
//!    the only code that applies moves and rotates cards.
//!
//! 3. **Typed Cells**: Ownership is a `PlayerId` on the piece. Colours and
//!    glyphs belong to whatever renders the board.
//!
//! ## Architecture
//!
//! - **One Facing Transform**: Card patterns are authored from the bottom
//!   player's side. A top-side mover negates the row displacement before the
//!   lookup, and nothing else in the engine cares about orientation.
//!
//! - **Exchange Table**: The neutral card's rotation is a single transition
//!   table keyed by acting facing and whether it is the opening turn.
//!
//! - **Persistent Log**: The replay log is an `im::Vector`, so cloning a
//!   game is cheap.
//!
//! ## Modules
//!
//! - `core`: Positions, players, state, move log, RNG, configuration
//! - `board`: Cells, pieces and the 5x5 grid
//! - `cards`: Movement patterns, card loading, registry, card pool
//! - `rules`: Move validation, availability search, win detection
//! - `turn`: Turn controller and input collaborators
//! - `leaderboard`: Winner ranking

pub mod core;
pub mod board;
pub mod cards;
pub mod rules;
pub mod turn;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::core::{
    Facing, Player, PlayerId, PlayerMap, Position,
    GameRng, GameRngState, GameConfig,
    MoveLog, MoveRecord,
    GameState, SetupError,
};

pub use crate::board::{Board, Cell, Piece, PieceKind};

pub use crate::cards::{
    Card, CardId, Pattern, CardRegistry, LoadReport,
    CardPool, HandSlot, Side, Exchange,
    CardError, DeckError, ExchangeError,
};

pub use crate::rules::{
    check_winner, has_any_legal_move, has_legal_move_for_piece_and_card, is_legal_move,
    GameResult,
};

pub use crate::turn::{
    PieceSelection, SelectionError, TurnController, TurnInput, TurnKind, TurnOptions,
    TurnPhase, TurnSummary, RandomInput,
};

pub use crate::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError};

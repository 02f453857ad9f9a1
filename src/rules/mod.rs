//! Game rules as pure functions over a board.
//!
//! - `validator`: whether one move is legal
//! - `search`: whether any legal move exists, and which
//! - `win`: whether the game is over
//!
//! None of these mutate state. Only the `TurnController` applies moves.

pub mod validator;
pub mod search;
pub mod win;

pub use validator::{is_legal_move, legal_destinations, Destinations};
pub use search::{
    has_any_legal_move, has_legal_move_for_piece, has_legal_move_for_piece_and_card,
    movable_pieces, MovablePieces,
};
pub use win::{check_winner, GameResult};

//! Turn sequencing: the controller that owns a game and the input trait
//! that feeds it choices.

pub mod controller;
pub mod input;

pub use controller::{
    PieceSelection, SelectionError, TurnController, TurnKind, TurnOptions, TurnPhase, TurnSummary,
};
pub use input::{RandomInput, TurnInput};

//! Turn sequencing.
//!
//! The `TurnController` owns the `GameState` and accepts one committed
//! choice at a time. Every rejected choice leaves the state and the phase
//! exactly as they were, so callers simply ask again.
//!
//! ## Phases
//!
//! ```text
//! SelectCard -> SelectPiece -> SelectDestination -> (move + exchange) -> next turn
//! ForcedExchange -> (exchange) -> next turn
//! ```
//!
//! A turn opens in `ForcedExchange` when the active player has no legal move
//! with either held card. It also falls into `ForcedExchange` when the chosen
//! piece cannot move with either held card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::board::Piece;
use crate::cards::{Card, CardId, Exchange, ExchangeError, HandSlot};
use crate::core::{GameState, MoveRecord, PlayerId, Position};
use crate::leaderboard::LeaderboardEntry;
use crate::rules::{
    check_winner, has_any_legal_move, has_legal_move_for_piece_and_card, is_legal_move,
    legal_destinations, movable_pieces, Destinations, GameResult, MovablePieces,
};

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Pick one of the two held cards.
    SelectCard,
    /// No legal move: pick a held card to surrender.
    ForcedExchange,
    /// Pick a piece to move with `card`.
    SelectPiece { card: HandSlot },
    /// Pick where the piece on `from` goes.
    SelectDestination { card: HandSlot, from: Position },
    /// A winner was found. No further turns.
    GameOver(PlayerId),
}

/// An illegal choice. The turn continues from the same phase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("that choice is not available during {0:?}")]
    WrongPhase(TurnPhase),
    #[error("no piece of yours on {0}")]
    NotYourPiece(Position),
    #[error("cannot move from {from} to {to} with the selected card")]
    IllegalDestination { from: Position, to: Position },
    #[error(transparent)]
    Exchange(#[from] ExchangeError),
}

/// Result of `select_piece`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceSelection {
    /// The piece can move with the selected card.
    Ready,
    /// The selected card had no destination; the other held card does.
    SwitchedCard(HandSlot),
    /// Neither held card moves the piece. The turn is now a forced exchange.
    Forced,
}

/// Legal choices for the current phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOptions {
    /// Card slots to play from.
    Cards(SmallVec<[HandSlot; 2]>),
    /// Card slots that may be surrendered.
    Surrender(SmallVec<[HandSlot; 2]>),
    /// Pieces that can move with at least one held card.
    Pieces(MovablePieces),
    /// Destinations of the selected piece with the selected card.
    Destinations(Destinations),
    /// Game over.
    None,
}

/// What a completed turn did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnKind {
    Moved {
        record: MoveRecord,
        captured: Option<Piece>,
        /// False when the replay log was already full.
        logged: bool,
    },
    ForcedExchange,
}

/// Report of one completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// Round the turn was played in.
    pub round: u32,
    pub kind: TurnKind,
    pub exchange: Exchange,
    /// Win check after the turn.
    pub outcome: GameResult,
}

impl TurnSummary {
    /// Card that left the player's hand.
    #[must_use]
    pub fn surrendered(&self) -> CardId {
        self.exchange.surrendered
    }

    /// Card that entered the player's hand.
    #[must_use]
    pub fn received(&self) -> CardId {
        self.exchange.received
    }
}

/// Drives turns over one owned `GameState`.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::{Card, CardId, Pattern};
/// use rust_onitama::core::{Facing, GameConfig, GameState, Position};
/// use rust_onitama::turn::{PieceSelection, TurnController, TurnPhase};
/// use rust_onitama::cards::HandSlot;
///
/// let deck: Vec<Card> = ["Ox", "Eel", "Crab", "Boar", "Frog"]
///     .iter()
///     .map(|name| Card::new(CardId::new(0), *name, Facing::Blue, Pattern::from_offsets(&[(-1, 0)])))
///     .collect();
/// let state = GameState::deal(&GameConfig::default().without_shuffle(), deck).unwrap();
/// let mut turn = TurnController::new(state);
///
/// assert_eq!(turn.phase(), TurnPhase::SelectCard);
/// turn.select_card(HandSlot::First).unwrap();
/// assert_eq!(turn.select_piece(Position::new(4, 2)).unwrap(), PieceSelection::Ready);
/// let summary = turn.select_destination(Position::new(3, 2)).unwrap();
/// assert_eq!(summary.round, 1);
/// assert_eq!(turn.state().round(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TurnController {
    state: GameState,
    phase: TurnPhase,
}

impl TurnController {
    /// Take ownership of a dealt game and open the first turn.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        let mut controller = Self {
            state,
            phase: TurnPhase::SelectCard,
        };
        controller.phase = controller.opening_phase();
        controller
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Hand back the game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player
    }

    /// Card in one of the active player's hand slots.
    #[must_use]
    pub fn held_card(&self, slot: HandSlot) -> &Card {
        self.state
            .card(self.state.pool.held_card(self.state.active_player, slot))
    }

    /// Win check on the current board.
    #[must_use]
    pub fn outcome(&self) -> GameResult {
        check_winner(&self.state.board)
    }

    /// Leaderboard entry for the winner, once there is one.
    #[must_use]
    pub fn winner_entry(&self) -> Option<LeaderboardEntry> {
        let winner = self.outcome().winner()?;
        let player = self.state.player(winner);
        Some(LeaderboardEntry::new(player.name.clone(), player.turns_taken))
    }

    /// Legal choices for the current phase.
    #[must_use]
    pub fn options(&self) -> TurnOptions {
        let both: SmallVec<[HandSlot; 2]> = HandSlot::both().collect();
        match self.phase {
            TurnPhase::SelectCard => TurnOptions::Cards(both),
            TurnPhase::ForcedExchange => TurnOptions::Surrender(both),
            TurnPhase::SelectPiece { .. } => {
                let player = self.state.active_player;
                TurnOptions::Pieces(movable_pieces(
                    &self.state.board,
                    player,
                    &self.state.held_cards(player),
                    player.facing(),
                ))
            }
            TurnPhase::SelectDestination { card, from } => {
                let player = self.state.active_player;
                TurnOptions::Destinations(legal_destinations(
                    &self.state.board,
                    player,
                    from,
                    self.held_card(card),
                    player.facing(),
                ))
            }
            TurnPhase::GameOver(_) => TurnOptions::None,
        }
    }

    // === Choices ===

    /// Choose the card to play.
    pub fn select_card(&mut self, slot: HandSlot) -> Result<(), SelectionError> {
        match self.phase {
            TurnPhase::SelectCard => {
                self.phase = TurnPhase::SelectPiece { card: slot };
                Ok(())
            }
            phase => Err(SelectionError::WrongPhase(phase)),
        }
    }

    /// Choose the piece to move.
    ///
    /// Falls back to the other held card when the selected one gives the
    /// piece nowhere to go, and to a forced exchange when neither does.
    pub fn select_piece(&mut self, from: Position) -> Result<PieceSelection, SelectionError> {
        let TurnPhase::SelectPiece { card } = self.phase else {
            return Err(SelectionError::WrongPhase(self.phase));
        };
        let player = self.state.active_player;
        if !self.state.board.get(from).is_owned_by(player) {
            return Err(SelectionError::NotYourPiece(from));
        }

        let can_move = |slot: HandSlot| {
            has_legal_move_for_piece_and_card(
                &self.state.board,
                player,
                from,
                self.held_card(slot),
                player.facing(),
            )
        };

        let (phase, selection) = if can_move(card) {
            (TurnPhase::SelectDestination { card, from }, PieceSelection::Ready)
        } else if can_move(card.other()) {
            (
                TurnPhase::SelectDestination {
                    card: card.other(),
                    from,
                },
                PieceSelection::SwitchedCard(card.other()),
            )
        } else {
            (TurnPhase::ForcedExchange, PieceSelection::Forced)
        };
        self.phase = phase;
        Ok(selection)
    }

    /// Choose the destination and complete the turn.
    pub fn select_destination(&mut self, to: Position) -> Result<TurnSummary, SelectionError> {
        let TurnPhase::SelectDestination { card, from } = self.phase else {
            return Err(SelectionError::WrongPhase(self.phase));
        };
        let player = self.state.active_player;
        let used = self.held_card(card);
        if !is_legal_move(&self.state.board, player, from, to, used, player.facing()) {
            return Err(SelectionError::IllegalDestination { from, to });
        }
        let record = MoveRecord::new(player, from, to, used.name.clone());

        let opening_turn = self.state.is_opening_turn();
        let exchange = self.state.pool.exchange(player, card, opening_turn)?;
        let captured = self.state.board.move_piece(from, to);
        let logged = self.state.move_log.push(record.clone());

        Ok(self.finish_turn(
            TurnKind::Moved {
                record,
                captured,
                logged,
            },
            exchange,
        ))
    }

    /// Surrender a held card for the neutral card without moving.
    pub fn surrender_card(&mut self, slot: HandSlot) -> Result<TurnSummary, SelectionError> {
        if self.phase != TurnPhase::ForcedExchange {
            return Err(SelectionError::WrongPhase(self.phase));
        }
        let player = self.state.active_player;
        let opening_turn = self.state.is_opening_turn();
        let exchange = self.state.pool.exchange(player, slot, opening_turn)?;
        Ok(self.finish_turn(TurnKind::ForcedExchange, exchange))
    }

    /// Drop a partial card/piece selection and return to card selection.
    pub fn reset_selection(&mut self) {
        if matches!(
            self.phase,
            TurnPhase::SelectPiece { .. } | TurnPhase::SelectDestination { .. }
        ) {
            self.phase = TurnPhase::SelectCard;
        }
    }

    // === Internals ===

    fn finish_turn(&mut self, kind: TurnKind, exchange: Exchange) -> TurnSummary {
        let player = self.state.active_player;
        let round = self.state.round;

        self.state.players[player].turns_taken += 1;
        self.state.round += 1;
        self.state.active_player = player.opponent();
        self.phase = self.opening_phase();

        TurnSummary {
            player,
            round,
            kind,
            exchange,
            outcome: self.outcome(),
        }
    }

    fn opening_phase(&self) -> TurnPhase {
        if let Some(winner) = self.outcome().winner() {
            return TurnPhase::GameOver(winner);
        }
        let player = self.state.active_player;
        if has_any_legal_move(
            &self.state.board,
            player,
            &self.state.held_cards(player),
            player.facing(),
        ) {
            TurnPhase::SelectCard
        } else {
            TurnPhase::ForcedExchange
        }
    }
}

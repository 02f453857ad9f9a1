//! Input collaborators.
//!
//! A `TurnInput` answers one question at a time. `play_turn` asks until a
//! turn completes, re-asking the same question after every rejected answer.
//! Returning `None` from a piece or destination question backs out to card
//! selection.

use super::controller::{SelectionError, TurnController, TurnOptions, TurnPhase, TurnSummary};
use crate::cards::{Card, HandSlot};
use crate::core::{GameRng, GameState, Position};

/// Source of turn choices: a keyboard loop, a script, a bot.
pub trait TurnInput {
    /// Pick the card to play.
    fn choose_card(&mut self, state: &GameState, options: &[HandSlot]) -> HandSlot;

    /// Pick a piece to move with `card`, or `None` to pick another card.
    fn choose_piece(&mut self, state: &GameState, card: &Card, options: &[Position])
        -> Option<Position>;

    /// Pick where the piece on `from` goes, or `None` to start over.
    fn choose_destination(
        &mut self,
        state: &GameState,
        card: &Card,
        from: Position,
        options: &[Position],
    ) -> Option<Position>;

    /// No legal move: pick the card to surrender.
    fn choose_surrender(&mut self, state: &GameState, options: &[HandSlot]) -> HandSlot;

    /// Told when an answer was rejected.
    fn rejected(&mut self, _error: &SelectionError) {}
}

impl TurnController {
    /// Play one whole turn against `input`.
    ///
    /// Only errors that asking again cannot fix are returned: the game is
    /// already over, or the card pool is inconsistent.
    pub fn play_turn(&mut self, input: &mut impl TurnInput) -> Result<TurnSummary, SelectionError> {
        loop {
            match (self.phase(), self.options()) {
                (TurnPhase::ForcedExchange, TurnOptions::Surrender(slots)) => {
                    let slot = input.choose_surrender(self.state(), &slots);
                    return self.surrender_card(slot);
                }
                (TurnPhase::SelectCard, TurnOptions::Cards(slots)) => {
                    let slot = input.choose_card(self.state(), &slots);
                    self.select_card(slot)?;
                }
                (TurnPhase::SelectPiece { card }, TurnOptions::Pieces(pieces)) => {
                    let choice = input.choose_piece(self.state(), self.held_card(card), &pieces);
                    match choice {
                        None => self.reset_selection(),
                        Some(from) => {
                            if let Err(err) = self.select_piece(from) {
                                input.rejected(&err);
                            }
                        }
                    }
                }
                (TurnPhase::SelectDestination { card, from }, TurnOptions::Destinations(dests)) => {
                    let choice =
                        input.choose_destination(self.state(), self.held_card(card), from, &dests);
                    match choice {
                        None => self.reset_selection(),
                        Some(to) => match self.select_destination(to) {
                            Ok(summary) => return Ok(summary),
                            Err(err @ SelectionError::IllegalDestination { .. }) => {
                                input.rejected(&err);
                            }
                            Err(err) => return Err(err),
                        },
                    }
                }
                (phase, _) => return Err(SelectionError::WrongPhase(phase)),
            }
        }
    }
}

/// Picks uniformly among the offered options. Never backs out.
///
/// ```
/// use rust_onitama::cards::{Card, CardId, Pattern};
/// use rust_onitama::core::{Facing, GameConfig, GameState};
/// use rust_onitama::turn::{RandomInput, TurnController};
///
/// let deck: Vec<Card> = ["Ox", "Eel", "Crab", "Boar", "Frog"]
///     .iter()
///     .map(|name| Card::new(CardId::new(0), *name, Facing::Blue, Pattern::from_offsets(&[(-1, 0), (1, 1)])))
///     .collect();
/// let mut turn = TurnController::new(GameState::deal(&GameConfig::default(), deck).unwrap());
/// let mut input = RandomInput::new(7);
///
/// let summary = turn.play_turn(&mut input).unwrap();
/// assert_eq!(summary.round, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RandomInput {
    rng: GameRng,
}

impl RandomInput {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    fn pick<T: Copy>(&mut self, options: &[T], fallback: T) -> T {
        self.rng.choose(options).copied().unwrap_or(fallback)
    }
}

impl TurnInput for RandomInput {
    fn choose_card(&mut self, _state: &GameState, options: &[HandSlot]) -> HandSlot {
        self.pick(options, HandSlot::First)
    }

    fn choose_piece(
        &mut self,
        _state: &GameState,
        _card: &Card,
        options: &[Position],
    ) -> Option<Position> {
        self.rng.choose(options).copied()
    }

    fn choose_destination(
        &mut self,
        _state: &GameState,
        _card: &Card,
        _from: Position,
        options: &[Position],
    ) -> Option<Position> {
        self.rng.choose(options).copied()
    }

    fn choose_surrender(&mut self, _state: &GameState, options: &[HandSlot]) -> HandSlot {
        self.pick(options, HandSlot::First)
    }
}

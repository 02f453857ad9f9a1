//! Game state for one game.
//!
//! ## GameState
//!
//! Everything one game needs:
//! - Board and both players
//! - The five cards in play and the `CardPool` tracking who holds them
//! - Active player and round number (starts at 1)
//! - Replay log
//!
//! A `GameState` is built by dealing a deck and is then handed to the
//! `TurnController`, which is the only code that mutates it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::{is_valid_player_name, GameConfig};
use super::player::{Facing, Player, PlayerId, PlayerMap};
use super::record::MoveLog;
use super::rng::GameRng;
use crate::board::Board;
use crate::cards::{Card, CardId, CardPool, CardRegistry, CARDS_IN_PLAY};

/// A game could not be set up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("a game needs {} cards, the deck has {found}", CARDS_IN_PLAY)]
    NotEnoughCards { found: usize },
    #[error("invalid player name {0:?}: use 1 to 30 letters")]
    InvalidName(String),
    #[error("card {0:?} is not in the registry")]
    UnknownCard(String),
    #[error("card {0:?} was dealt twice")]
    DuplicateCard(String),
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    /// Cards in play, indexed by `CardId`.
    pub(crate) cards: [Card; CARDS_IN_PLAY],
    pub(crate) pool: CardPool,
    pub(crate) active_player: PlayerId,
    pub(crate) round: u32,
    pub(crate) move_log: MoveLog,
}

impl GameState {
    /// Shuffle `deck` (unless disabled), deal the first five cards and pick
    /// the first player.
    ///
    /// Player 1 gets `deck[0..2]`, Player 2 `deck[2..4]`, and `deck[4]` is the
    /// spare on the right. The player whose colour matches the spare moves
    /// first.
    pub fn deal(config: &GameConfig, mut deck: Vec<Card>) -> Result<Self, SetupError> {
        for name in &config.player_names {
            if !is_valid_player_name(name) {
                return Err(SetupError::InvalidName(name.clone()));
            }
        }
        if deck.len() < CARDS_IN_PLAY {
            return Err(SetupError::NotEnoughCards { found: deck.len() });
        }
        if config.shuffle_deck {
            GameRng::new(config.seed).shuffle(&mut deck);
        }
        deck.truncate(CARDS_IN_PLAY);

        for (i, card) in deck.iter().enumerate() {
            if deck[..i].iter().any(|c| c.name == card.name) {
                return Err(SetupError::DuplicateCard(card.name.clone()));
            }
        }

        let dealt: Vec<Card> = deck
            .into_iter()
            .enumerate()
            .map(|(i, card)| card.with_id(CardId::new(i as u32)))
            .collect();
        let cards: [Card; CARDS_IN_PLAY] = dealt
            .try_into()
            .map_err(|v: Vec<Card>| SetupError::NotEnoughCards { found: v.len() })?;

        let active_player = cards[CARDS_IN_PLAY - 1].facing.player();
        let [one, two] = &config.player_names;

        Ok(Self {
            board: Board::initial(),
            players: PlayerMap::from_pair(
                Player::new(PlayerId::ONE, one.clone()),
                Player::new(PlayerId::TWO, two.clone()),
            ),
            cards,
            pool: CardPool::deal([0, 1, 2, 3, 4].map(CardId::new)),
            active_player,
            round: 1,
            move_log: MoveLog::with_capacity(config.move_log_capacity),
        })
    }

    /// Deal the named registry cards in exactly this order, without shuffling.
    pub fn deal_named(
        config: &GameConfig,
        registry: &CardRegistry,
        names: [&str; CARDS_IN_PLAY],
    ) -> Result<Self, SetupError> {
        let deck = names
            .iter()
            .map(|&name| {
                registry
                    .by_name(name)
                    .cloned()
                    .ok_or_else(|| SetupError::UnknownCard(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::deal(&config.clone().without_shuffle(), deck)
    }

    // === Builders for custom positions ===

    /// Replace the board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Override who moves next.
    #[must_use]
    pub fn with_active_player(mut self, player: PlayerId) -> Self {
        self.active_player = player;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// Facing of the active player.
    #[must_use]
    pub fn active_facing(&self) -> Facing {
        self.active_player.facing()
    }

    /// Round number, starting at 1 and incremented by every completed turn.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether this is the opening turn of the game.
    #[must_use]
    pub fn is_opening_turn(&self) -> bool {
        self.round == 1
    }

    #[must_use]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    /// The five cards in play, ordered by `CardId`.
    #[must_use]
    pub fn cards(&self) -> &[Card; CARDS_IN_PLAY] {
        &self.cards
    }

    /// A card in play.
    ///
    /// Panics if `id` did not come from this game's `CardPool`.
    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.cards[id.raw() as usize]
    }

    /// Both cards held by `player`.
    #[must_use]
    pub fn held_cards(&self, player: PlayerId) -> [&Card; 2] {
        self.pool.held(player).map(|id| self.card(id))
    }

    /// The neutral card.
    #[must_use]
    pub fn neutral_card(&self) -> &Card {
        self.card(self.pool.neutral())
    }
}

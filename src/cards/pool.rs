//! The five cards in play and how they rotate between hands.
//!
//! Two cards per player plus one neutral card. The neutral card sits on the
//! `Left` or `Right` side of the board; the other side is empty. No card is
//! ever created or destroyed, only relabelled.
//!
//! ## Exchange transition table
//!
//! | acting facing | opening turn | take neutral from | deposit used card to |
//! |---------------|--------------|-------------------|----------------------|
//! | Blue (bottom) | any          | Right             | Left                 |
//! | Red (top)     | yes          | Right             | Right                |
//! | Red (top)     | no           | Left              | Right                |
//!
//! The deal always puts the spare on the right, so a red player acting on
//! the opening turn of the game exchanges right-for-right.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::CardId;
use crate::core::{Facing, PlayerId, PlayerMap};

/// Number of cards in play.
pub const CARDS_IN_PLAY: usize = 5;

/// One of the two cards a player holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSlot {
    First,
    Second,
}

impl HandSlot {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            HandSlot::First => 0,
            HandSlot::Second => 1,
        }
    }

    /// The other slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            HandSlot::First => HandSlot::Second,
            HandSlot::Second => HandSlot::First,
        }
    }

    pub fn both() -> impl Iterator<Item = HandSlot> {
        [HandSlot::First, HandSlot::Second].into_iter()
    }
}

/// Side of the board where the neutral card rests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Input to the exchange transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExchangeKey {
    pub facing: Facing,
    /// The exchange happens on the opening turn of the game.
    pub opening_turn: bool,
}

/// Output of the exchange transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub take_from: Side,
    pub deposit_to: Side,
}

impl ExchangeKey {
    /// Look up the transition for this key.
    #[must_use]
    pub const fn transition(self) -> Transition {
        let (take_from, deposit_to) = match (self.facing, self.opening_turn) {
            (Facing::Blue, _) => (Side::Right, Side::Left),
            (Facing::Red, true) => (Side::Right, Side::Right),
            (Facing::Red, false) => (Side::Left, Side::Right),
        };
        Transition {
            take_from,
            deposit_to,
        }
    }
}

/// The exchange asked for a neutral card from the empty side.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("no neutral card on the {0} side")]
    EmptySlot(Side),
}

/// Record of one completed exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub player: PlayerId,
    pub slot: HandSlot,
    /// Card that left the hand and became neutral.
    pub surrendered: CardId,
    /// Previously neutral card now in the hand.
    pub received: CardId,
    /// Where the surrendered card now rests.
    pub neutral_side: Side,
}

/// A decoded pool does not hold each of the five dealt ids exactly once.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("card pool must hold cards 0 to 4 once each, found {0:?}")]
pub struct InvalidPool(pub [CardId; CARDS_IN_PLAY]);

/// Hands plus the neutral card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardPool")]
pub struct CardPool {
    hands: PlayerMap<[CardId; 2]>,
    neutral: CardId,
    neutral_side: Side,
}

#[derive(Deserialize)]
struct RawCardPool {
    hands: PlayerMap<[CardId; 2]>,
    neutral: CardId,
    neutral_side: Side,
}

impl TryFrom<RawCardPool> for CardPool {
    type Error = InvalidPool;

    fn try_from(raw: RawCardPool) -> Result<Self, Self::Error> {
        let pool = Self {
            hands: raw.hands,
            neutral: raw.neutral,
            neutral_side: raw.neutral_side,
        };
        let mut ids = pool.all_cards();
        ids.sort();
        if ids == [0, 1, 2, 3, 4].map(CardId::new) {
            Ok(pool)
        } else {
            Err(InvalidPool(pool.all_cards()))
        }
    }
}

impl CardPool {
    /// Deal five cards: `[0, 1]` to Player 1, `[2, 3]` to Player 2, `[4]`
    /// neutral on the right.
    #[must_use]
    pub fn deal(cards: [CardId; CARDS_IN_PLAY]) -> Self {
        Self {
            hands: PlayerMap::from_pair([cards[0], cards[1]], [cards[2], cards[3]]),
            neutral: cards[4],
            neutral_side: Side::Right,
        }
    }

    /// Both cards held by `player`.
    #[must_use]
    pub fn held(&self, player: PlayerId) -> [CardId; 2] {
        self.hands[player]
    }

    /// The card in one hand slot.
    #[must_use]
    pub fn held_card(&self, player: PlayerId, slot: HandSlot) -> CardId {
        self.hands[player][slot.index()]
    }

    /// Hand slot holding `card`, if `player` holds it.
    #[must_use]
    pub fn slot_of(&self, player: PlayerId, card: CardId) -> Option<HandSlot> {
        HandSlot::both().find(|&slot| self.held_card(player, slot) == card)
    }

    /// The neutral card.
    #[must_use]
    pub fn neutral(&self) -> CardId {
        self.neutral
    }

    /// Side the neutral card rests on.
    #[must_use]
    pub fn neutral_side(&self) -> Side {
        self.neutral_side
    }

    /// Card on the left side, if any.
    #[must_use]
    pub fn left(&self) -> Option<CardId> {
        (self.neutral_side == Side::Left).then_some(self.neutral)
    }

    /// Card on the right side, if any.
    #[must_use]
    pub fn right(&self) -> Option<CardId> {
        (self.neutral_side == Side::Right).then_some(self.neutral)
    }

    /// All five cards: Player 1's, Player 2's, then the neutral card.
    #[must_use]
    pub fn all_cards(&self) -> [CardId; CARDS_IN_PLAY] {
        let [a, b] = self.hands[PlayerId::ONE];
        let [c, d] = self.hands[PlayerId::TWO];
        [a, b, c, d, self.neutral]
    }

    /// Surrender the card in `slot` and take the neutral card.
    ///
    /// Runs identically for move turns and forced exchanges. Leaves the pool
    /// untouched on error.
    pub fn exchange(
        &mut self,
        player: PlayerId,
        slot: HandSlot,
        opening_turn: bool,
    ) -> Result<Exchange, ExchangeError> {
        let key = ExchangeKey {
            facing: player.facing(),
            opening_turn,
        };
        let transition = key.transition();
        if self.neutral_side != transition.take_from {
            return Err(ExchangeError::EmptySlot(transition.take_from));
        }

        let hand = &mut self.hands[player][slot.index()];
        let surrendered = std::mem::replace(hand, self.neutral);
        let received = self.neutral;
        self.neutral = surrendered;
        self.neutral_side = transition.deposit_to;

        Ok(Exchange {
            player,
            slot,
            surrendered,
            received,
            neutral_side: transition.deposit_to,
        })
    }
}

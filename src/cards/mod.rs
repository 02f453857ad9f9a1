//! Card system: movement patterns, loading, registry, and the card pool.
//!
//! ## Key Types
//!
//! - `Card`: Immutable named movement pattern with a facing colour
//! - `Pattern`: 5x5 mark grid authored from the bottom player's side
//! - `CardRegistry`: Card definition lookup in deck order
//! - `CardPool`: The five cards in play and the exchange state machine

pub mod definition;
pub mod loader;
pub mod pool;
pub mod registry;

pub use definition::{Card, CardId, Pattern, PATTERN_CENTER, PATTERN_SIZE};
pub use loader::{load_card, load_deck, parse_card, parse_deck, CardError, DeckError, DECK_FILE, MAX_DECK_SIZE};
pub use pool::{
    CardPool, Exchange, ExchangeError, ExchangeKey, HandSlot, InvalidPool, Side, Transition,
    CARDS_IN_PLAY,
};
pub use registry::{CardRegistry, LoadReport};

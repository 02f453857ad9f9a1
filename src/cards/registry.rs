//! Card registry for definition lookup.
//!
//! The `CardRegistry` holds every loaded card definition in deck order and
//! assigns each one its `CardId`. Loading from disk collects per-card
//! failures instead of aborting, so one malformed file only removes that
//! card from the deck.

use std::path::Path;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, Pattern};
use super::loader::{load_card, load_deck, CardError, DeckError, DECK_FILE};
use crate::core::Facing;

/// Registry of card definitions in deck order.
///
/// ## Example
///
/// ```
/// use rust_onitama::cards::{CardRegistry, Pattern};
/// use rust_onitama::core::Facing;
///
/// let mut registry = CardRegistry::new();
/// let tiger = registry.register("Tiger", Facing::Blue, Pattern::from_offsets(&[(-2, 0), (1, 0)])).unwrap();
///
/// assert_eq!(registry.by_name("Tiger").unwrap().id, tiger);
/// assert!(registry.register("Tiger", Facing::Red, Pattern::from_offsets(&[(1, 0)])).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    names: FxHashMap<String, CardId>,
    order: Vec<CardId>,
}

/// Outcome of loading a deck from disk.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Cards that loaded cleanly, in deck order.
    pub registry: CardRegistry,
    /// Cards that could not be loaded, with the reason.
    pub failures: Vec<(String, CardError)>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition under the next free ID.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        facing: Facing,
        pattern: Pattern,
    ) -> Result<CardId, CardError> {
        let id = CardId::new(self.order.len() as u32);
        self.insert(Card::new(id, name, facing, pattern))
    }

    /// Register an existing card, re-identifying it with the next free ID.
    ///
    /// Names are unique; a second card with a registered name is refused and
    /// the registry is left unchanged.
    pub fn insert(&mut self, card: Card) -> Result<CardId, CardError> {
        if self.names.contains_key(&card.name) {
            return Err(CardError::AlreadyLoaded(card.name));
        }
        let id = CardId::new(self.order.len() as u32);
        self.names.insert(card.name.clone(), id);
        self.cards.insert(id, card.with_id(id));
        self.order.push(id);
        Ok(id)
    }

    /// Load the named cards from `<dir>/<name>.txt`.
    ///
    /// A repeated name is reported as a failure and the first copy is kept.
    pub fn load(dir: &Path, names: &[String]) -> LoadReport {
        let mut report = LoadReport::default();
        for name in names {
            if report.registry.by_name(name).is_some() {
                report
                    .failures
                    .push((name.clone(), CardError::AlreadyLoaded(name.clone())));
                continue;
            }
            let next = CardId::new(report.registry.len() as u32);
            if let Err(err) = load_card(dir, next, name).and_then(|card| report.registry.insert(card)) {
                report.failures.push((name.clone(), err));
            }
        }
        report
    }

    /// Load the deck registry in `dir` and then every card it lists.
    pub fn load_dir(dir: &Path) -> Result<LoadReport, DeckError> {
        let names = load_deck(&dir.join(DECK_FILE))?;
        Ok(Self::load(dir, &names))
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Card> {
        self.names.get(name).and_then(|id| self.cards.get(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over card definitions in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Clone the cards out in deck order.
    #[must_use]
    pub fn to_deck(&self) -> Vec<Card> {
        self.iter().cloned().collect()
    }
}

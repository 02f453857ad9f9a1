//! Player identification, facing, and per-player data storage.
//!
//! ## PlayerId
//!
//! Exactly two players. `PlayerId::ONE` starts on the bottom row and plays
//! blue; `PlayerId::TWO` starts on the top row and plays red.
//!
//! ## Facing
//!
//! Card patterns are authored from the bottom (blue) player's point of view.
//! A red mover sees the board mirrored vertically, so the row displacement is
//! negated before any pattern lookup.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use thiserror::Error;

use super::position::BOARD_SIZE;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Facing colour of a player or a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Bottom-origin player (Player 1). Patterns are drawn from this side.
    Blue,
    /// Top-origin player (Player 2). Sees patterns mirrored vertically.
    Red,
}

impl Facing {
    /// Whether row displacements are negated for this facing.
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Facing::Red)
    }

    /// The player who plays this colour.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        match self {
            Facing::Blue => PlayerId::ONE,
            Facing::Red => PlayerId::TWO,
        }
    }

    /// Parse a facing token (`red` / `blue`, case-insensitive).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("blue") {
            Some(Facing::Blue)
        } else if token.eq_ignore_ascii_case("red") {
            Some(Facing::Red)
        } else {
            None
        }
    }

    /// Lowercase token used in card files.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Facing::Blue => "blue",
            Facing::Red => "red",
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Decoded player index outside `0..2`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("no player with index {0}")]
pub struct InvalidPlayer(pub u8);

/// Player identifier. Indices are 0-based; `number()` is the 1-based label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct PlayerId(u8);

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayer;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(usize::from(index)).ok_or(InvalidPlayer(index))
    }
}

impl PlayerId {
    /// Bottom-origin (blue) player.
    pub const ONE: PlayerId = PlayerId(0);

    /// Top-origin (red) player.
    pub const TWO: PlayerId = PlayerId(1);

    /// Player from a 0-based index. Returns `None` outside `0..2`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < PLAYER_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based player number, as used in move exports.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Facing colour of this player.
    #[must_use]
    pub const fn facing(self) -> Facing {
        if self.0 == 0 {
            Facing::Blue
        } else {
            Facing::Red
        }
    }

    /// Row holding this player's starting pieces and temple.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        if self.0 == 0 {
            BOARD_SIZE as u8 - 1
        } else {
            0
        }
    }

    /// Both players, Player 1 first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::ONE, PlayerId::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data with O(1) access by `PlayerId`.
///
/// ## Example
///
/// ```
/// use rust_onitama::core::{PlayerId, PlayerMap};
///
/// let mut turns: PlayerMap<u32> = PlayerMap::with_value(0);
/// turns[PlayerId::TWO] += 1;
/// assert_eq!(turns[PlayerId::ONE], 0);
/// assert_eq!(turns[PlayerId::TWO], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a map from explicit per-player values.
    pub fn from_pair(one: T, two: T) -> Self {
        Self { data: [one, two] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
///
/// Held cards live in the `CardPool` so the five-card invariant has a single
/// owner; see `GameState::held_cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Completed turns, move turns and forced exchanges alike.
    pub turns_taken: u32,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            turns_taken: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(PlayerId::TWO.number(), 2);
        assert_eq!(format!("{}", PlayerId::TWO), "Player 2");
        assert_eq!(PlayerId::from_index(1), Some(PlayerId::TWO));
        assert_eq!(PlayerId::from_index(2), None);
    }

    #[test]
    fn test_opponent_and_facing() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.facing(), Facing::Blue);
        assert_eq!(PlayerId::TWO.facing(), Facing::Red);
        assert_eq!(Facing::Red.player(), PlayerId::TWO);
        assert!(Facing::Red.is_mirrored());
        assert!(!Facing::Blue.is_mirrored());
    }

    #[test]
    fn test_home_rows() {
        assert_eq!(PlayerId::ONE.home_row(), 4);
        assert_eq!(PlayerId::TWO.home_row(), 0);
    }

    #[test]
    fn test_facing_tokens() {
        assert_eq!(Facing::from_token("red"), Some(Facing::Red));
        assert_eq!(Facing::from_token("BLUE"), Some(Facing::Blue));
        assert_eq!(Facing::from_token("green"), None);
        assert_eq!(Facing::Blue.to_string(), "blue");
    }

    #[test]
    fn test_player_map() {
        let mut map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);
        assert_eq!(map[PlayerId::ONE], 0);
        assert_eq!(map[PlayerId::TWO], 10);

        map[PlayerId::ONE] = 5;
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::ONE, &5), (PlayerId::TWO, &10)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair("a".to_string(), "b".to_string());
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_player_id_decode_checks_range() {
        assert_eq!(serde_json::to_string(&PlayerId::TWO).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::TWO);
        assert!(serde_json::from_str::<PlayerId>("7").is_err());
        assert_eq!(PlayerId::try_from(2), Err(InvalidPlayer(2)));
    }
}

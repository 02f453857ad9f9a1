//! Card and deck definition parsing.
//!
//! ## Card file (`<name>.txt`)
//!
//! Whitespace-separated tokens: first the facing colour (`red` or `blue`),
//! then the 5x5 pattern as five 5-character row tokens or as 25
//! single-character tokens. `x` marks a legal destination; any other
//! character is a placeholder. The third pattern row is zero row
//! displacement.
//!
//! ```text
//! blue
//! .....
//! ..x..
//! .x.x.
//! .....
//! .....
//! ```
//!
//! ## Deck registry (`movecards.txt`)
//!
//! A count followed by that many card names.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::definition::{Card, CardId, Pattern, PATTERN_SIZE};
use crate::core::Facing;

/// Largest deck a registry may list.
pub const MAX_DECK_SIZE: usize = 16;

/// File name of the deck registry inside a card directory.
pub const DECK_FILE: &str = "movecards.txt";

/// A card definition could not be loaded. Fatal for that card only.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to read card file: {0}")]
    Io(#[from] std::io::Error),
    #[error("card definition is empty, expected a facing token")]
    MissingFacing,
    #[error("unknown facing token {0:?}, expected red or blue")]
    UnknownFacing(String),
    #[error("pattern must be 5x5, found {rows} rows of {cols} columns")]
    Dimensions { rows: usize, cols: usize },
    #[error("pattern marks its own origin")]
    MarkedOrigin,
    #[error("card {0:?} is already loaded")]
    AlreadyLoaded(String),
}

/// The deck registry could not be loaded.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck registry: {0}")]
    Io(#[from] std::io::Error),
    #[error("deck registry is empty, expected a card count")]
    MissingCount,
    #[error("invalid card count {0:?}")]
    InvalidCount(String),
    #[error("deck lists {count} cards, at most {max} are supported")]
    TooManyCards { count: usize, max: usize },
    #[error("deck promises {expected} card names, found {found}")]
    MissingNames { expected: usize, found: usize },
    #[error("card {0:?} is listed twice")]
    DuplicateCard(String),
}

/// Parse a card definition.
pub fn parse_card(id: CardId, name: &str, text: &str) -> Result<Card, CardError> {
    let mut tokens = text.split_whitespace();
    let facing_token = tokens.next().ok_or(CardError::MissingFacing)?;
    let facing = Facing::from_token(facing_token)
        .ok_or_else(|| CardError::UnknownFacing(facing_token.to_string()))?;

    let grid = parse_grid(tokens.collect())?;
    let pattern = Pattern::from_grid(grid).ok_or(CardError::MarkedOrigin)?;
    Ok(Card::new(id, name, facing, pattern))
}

fn parse_grid(tokens: Vec<&str>) -> Result<[[bool; PATTERN_SIZE]; PATTERN_SIZE], CardError> {
    let rows: Vec<Vec<char>> = if tokens.len() == PATTERN_SIZE * PATTERN_SIZE
        && tokens.iter().all(|t| t.chars().count() == 1)
    {
        tokens
            .chunks(PATTERN_SIZE)
            .map(|row| row.iter().flat_map(|t| t.chars()).collect())
            .collect()
    } else {
        tokens.iter().map(|t| t.chars().collect()).collect()
    };

    let cols = rows.first().map_or(0, Vec::len);
    if rows.len() != PATTERN_SIZE || rows.iter().any(|r| r.len() != PATTERN_SIZE) {
        let cols = rows
            .iter()
            .map(Vec::len)
            .find(|&len| len != PATTERN_SIZE)
            .unwrap_or(cols);
        return Err(CardError::Dimensions {
            rows: rows.len(),
            cols,
        });
    }

    let mut grid = [[false; PATTERN_SIZE]; PATTERN_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.iter().enumerate() {
            grid[r][c] = ch.eq_ignore_ascii_case(&'x');
        }
    }
    Ok(grid)
}

/// Read `<dir>/<name>.txt` as a card definition.
pub fn load_card(dir: &Path, id: CardId, name: &str) -> Result<Card, CardError> {
    let text = fs::read_to_string(dir.join(format!("{name}.txt")))?;
    parse_card(id, name, &text)
}

/// Parse a deck registry into its card names, in listed order.
pub fn parse_deck(text: &str) -> Result<Vec<String>, DeckError> {
    let mut tokens = text.split_whitespace();
    let count_token = tokens.next().ok_or(DeckError::MissingCount)?;
    let count: usize = count_token
        .parse()
        .map_err(|_| DeckError::InvalidCount(count_token.to_string()))?;
    if count > MAX_DECK_SIZE {
        return Err(DeckError::TooManyCards {
            count,
            max: MAX_DECK_SIZE,
        });
    }

    let names: Vec<String> = tokens.take(count).map(str::to_string).collect();
    if names.len() < count {
        return Err(DeckError::MissingNames {
            expected: count,
            found: names.len(),
        });
    }

    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            return Err(DeckError::DuplicateCard(name.clone()));
        }
    }
    Ok(names)
}

/// Read and parse a deck registry file.
pub fn load_deck(path: &Path) -> Result<Vec<String>, DeckError> {
    let text = fs::read_to_string(path)?;
    parse_deck(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOAR: &str = "red\n.....\n..x..\n.x.x.\n.....\n.....\n";

    #[test]
    fn test_parse_row_tokens() {
        let card = parse_card(CardId::new(1), "Boar", BOAR).unwrap();
        assert_eq!(card.name, "Boar");
        assert_eq!(card.facing, Facing::Red);
        let offsets: Vec<_> = card.pattern().offsets().collect();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 1)]);
    }

    #[test]
    fn test_parse_single_char_tokens() {
        let text = "BLUE\n. . . . .\n. . x . .\n. . . . .\n. . . . .\n. x . x .\n";
        let card = parse_card(CardId::new(0), "Odd", text).unwrap();
        assert_eq!(card.facing, Facing::Blue);
        assert_eq!(
            card.pattern().offsets().collect::<Vec<_>>(),
            vec![(-1, 0), (2, -1), (2, 1)]
        );
    }

    #[test]
    fn test_placeholders_are_not_marks() {
        let text = "blue ..... .o... ..M.. ...-. X....";
        let card = parse_card(CardId::new(0), "Tokens", text).unwrap();
        assert_eq!(card.pattern().offsets().collect::<Vec<_>>(), vec![(2, -2)]);
    }

    #[test]
    fn test_missing_facing() {
        assert!(matches!(
            parse_card(CardId::new(0), "Empty", "  \n"),
            Err(CardError::MissingFacing)
        ));
    }

    #[test]
    fn test_unknown_facing() {
        let err = parse_card(CardId::new(0), "Green", "green ..... ..... ..... ..... .....")
            .unwrap_err();
        assert!(matches!(err, CardError::UnknownFacing(t) if t == "green"));
    }

    #[test]
    fn test_wrong_dimensions() {
        let short_rows = "red ..... ..... ..... .....";
        assert!(matches!(
            parse_card(CardId::new(0), "Short", short_rows),
            Err(CardError::Dimensions { rows: 4, cols: 5 })
        ));

        let narrow = "red ..... .... ..... ..... .....";
        assert!(matches!(
            parse_card(CardId::new(0), "Narrow", narrow),
            Err(CardError::Dimensions { rows: 5, cols: 4 })
        ));
    }

    #[test]
    fn test_marked_origin() {
        let text = "red ..... ..... ..x.. ..... .....";
        assert!(matches!(
            parse_card(CardId::new(0), "Self", text),
            Err(CardError::MarkedOrigin)
        ));
    }

    #[test]
    fn test_parse_deck() {
        let names = parse_deck("5\nTiger\nCrab\nMonkey\nCrane\nDragon\n").unwrap();
        assert_eq!(names, vec!["Tiger", "Crab", "Monkey", "Crane", "Dragon"]);
    }

    #[test]
    fn test_parse_deck_ignores_trailing_tokens() {
        let names = parse_deck("2 Tiger Crab Monkey").unwrap();
        assert_eq!(names, vec!["Tiger", "Crab"]);
    }

    #[test]
    fn test_parse_deck_errors() {
        assert!(matches!(parse_deck(""), Err(DeckError::MissingCount)));
        assert!(matches!(parse_deck("five Tiger"), Err(DeckError::InvalidCount(_))));
        assert!(matches!(
            parse_deck("3 Tiger Crab"),
            Err(DeckError::MissingNames { expected: 3, found: 2 })
        ));
        assert!(matches!(
            parse_deck("17"),
            Err(DeckError::TooManyCards { count: 17, max: 16 })
        ));
        assert!(matches!(
            parse_deck("3 Tiger Crab Tiger"),
            Err(DeckError::DuplicateCard(n)) if n == "Tiger"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = std::env::temp_dir().join("rust_onitama_missing_cards");
        assert!(matches!(
            load_card(&dir, CardId::new(0), "Nowhere"),
            Err(CardError::Io(_))
        ));
        assert!(matches!(load_deck(&dir.join(DECK_FILE)), Err(DeckError::Io(_))));
    }
}

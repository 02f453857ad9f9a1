//! Whole-game scenario tests.
//!
//! These drive the public API the way a front-end would: load or build a
//! deck, deal, then play turns through the `TurnController`.

use std::fs;
use std::path::PathBuf;

use rust_onitama::board::{Board, Piece};
use rust_onitama::cards::{Card, CardId, CardRegistry, HandSlot, Pattern, DECK_FILE};
use rust_onitama::core::{Facing, GameConfig, GameState, PlayerId, Position};
use rust_onitama::leaderboard::{Leaderboard, LeaderboardEntry};
use rust_onitama::rules::{check_winner, is_legal_move, GameResult};
use rust_onitama::turn::{PieceSelection, TurnController, TurnKind, TurnPhase};

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn card(name: &str, facing: Facing, offsets: &[(i32, i32)]) -> Card {
    Card::new(CardId::new(0), name, facing, Pattern::from_offsets(offsets))
}

/// Five cards with distinct, known patterns. The spare (Frog) is red.
fn known_deck() -> Vec<Card> {
    vec![
        card("Ox", Facing::Blue, &[(-1, 0), (0, 1), (1, 0)]),
        card("Crab", Facing::Blue, &[(-1, 0), (0, -2), (0, 2)]),
        card("Boar", Facing::Red, &[(-1, 0), (0, -1), (0, 1)]),
        card("Tiger", Facing::Blue, &[(-2, 0), (1, 0)]),
        card("Frog", Facing::Red, &[(-1, -1), (0, -2), (1, 1)]),
    ]
}

fn ordered() -> GameConfig {
    GameConfig::default().without_shuffle()
}

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("rust_onitama_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// =============================================================================
// Dealing
// =============================================================================

/// Player 1 gets deck[0..2], Player 2 deck[2..4], deck[4] is the neutral card.
#[test]
fn test_deal_follows_deck_order() {
    let state = GameState::deal(&ordered(), known_deck()).unwrap();

    let held = |player| state.held_cards(player).map(|c| c.name.as_str());
    assert_eq!(held(PlayerId::ONE), ["Ox", "Crab"]);
    assert_eq!(held(PlayerId::TWO), ["Boar", "Tiger"]);
    assert_eq!(state.neutral_card().name, "Frog");

    // Red spare: the red (top) player opens.
    assert_eq!(state.active_player(), PlayerId::TWO);
}

/// A move by the offset (-1, 0) validates for Player 1; for Player 2 it
/// needs the mirrored mark (+1, 0).
#[test]
fn test_forward_step_is_mirrored_for_top_player() {
    let state = GameState::deal(&ordered(), known_deck()).unwrap();
    let [ox, crab] = state.held_cards(PlayerId::ONE);
    let tiger = state.held_cards(PlayerId::TWO)[1];

    let board = Board::empty()
        .with_piece(p(4, 2), Piece::master(PlayerId::ONE))
        .with_piece(p(2, 2), Piece::master(PlayerId::TWO));

    assert!(is_legal_move(&board, PlayerId::ONE, p(4, 2), p(3, 2), ox, Facing::Blue));
    assert!(is_legal_move(&board, PlayerId::ONE, p(4, 2), p(3, 2), crab, Facing::Blue));

    // Crab has no (+1, 0) mark, so Player 2 cannot make the same board step.
    assert!(!is_legal_move(&board, PlayerId::TWO, p(2, 2), p(1, 2), crab, Facing::Red));
    // Ox and Tiger both mark (+1, 0).
    assert!(is_legal_move(&board, PlayerId::TWO, p(2, 2), p(1, 2), ox, Facing::Red));
    assert!(is_legal_move(&board, PlayerId::TWO, p(2, 2), p(1, 2), tiger, Facing::Red));
    // Tiger's two-step forward is down the board for Player 2, onto the enemy master.
    assert!(is_legal_move(&board, PlayerId::TWO, p(2, 2), p(4, 2), tiger, Facing::Red));
    assert!(!is_legal_move(&board, PlayerId::TWO, p(2, 2), p(3, 2), tiger, Facing::Red));
}

/// Cards loaded from disk deal in registry order.
#[test]
fn test_load_and_deal_from_directory() {
    let dir = temp_dir("deal");
    fs::write(dir.join(DECK_FILE), "5\nOx\nCrab\nBoar\nTiger\nFrog\n").unwrap();
    fs::write(dir.join("Ox.txt"), "blue\n.....\n..x..\n...x.\n..x..\n.....\n").unwrap();
    fs::write(dir.join("Crab.txt"), "blue\n.....\n..x..\nx...x\n.....\n.....\n").unwrap();
    fs::write(dir.join("Boar.txt"), "red\n.....\n..x..\n.x.x.\n.....\n.....\n").unwrap();
    fs::write(dir.join("Tiger.txt"), "blue\n..x..\n.....\n.....\n..x..\n.....\n").unwrap();
    fs::write(dir.join("Frog.txt"), "red\n.....\n.x...\nx....\n...x.\n.....\n").unwrap();

    let report = CardRegistry::load_dir(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();
    assert!(report.failures.is_empty());

    let state = GameState::deal(&ordered(), report.registry.to_deck()).unwrap();
    let loaded: Vec<_> = state.cards().iter().map(|c| *c.pattern()).collect();
    let built: Vec<_> = known_deck().iter().map(|c| *c.pattern()).collect();
    assert_eq!(loaded, built);
    assert_eq!(state.active_player(), PlayerId::TWO);
}

/// A bad card file only removes that card; too few cards stops the deal.
#[test]
fn test_bad_card_leaves_too_few_to_deal() {
    let dir = temp_dir("short");
    fs::write(dir.join(DECK_FILE), "5 A B C D E").unwrap();
    for name in ["A", "B", "C", "D"] {
        fs::write(dir.join(format!("{name}.txt")), "blue ..... ..x.. ..... ..... .....").unwrap();
    }
    fs::write(dir.join("E.txt"), "purple ..... ..x.. ..... ..... .....").unwrap();

    let report = CardRegistry::load_dir(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(report.registry.len(), 4);
    assert_eq!(report.failures.len(), 1);
    assert!(GameState::deal(&ordered(), report.registry.to_deck()).is_err());
}

// =============================================================================
// Turns
// =============================================================================

/// Players alternate and the round counter climbs by one per turn.
#[test]
fn test_turns_alternate() {
    let mut turn = TurnController::new(GameState::deal(&ordered(), known_deck()).unwrap());

    let moves = [
        (PlayerId::TWO, HandSlot::First, p(0, 0), p(1, 0)),
        (PlayerId::ONE, HandSlot::First, p(4, 0), p(3, 0)),
        (PlayerId::TWO, HandSlot::First, p(0, 4), p(1, 3)),
        (PlayerId::ONE, HandSlot::First, p(4, 4), p(3, 4)),
    ];
    for (i, &(player, slot, from, to)) in moves.iter().enumerate() {
        assert_eq!(turn.active_player(), player);
        assert_eq!(turn.state().round(), i as u32 + 1);
        turn.select_card(slot).unwrap();
        let selection = turn.select_piece(from).unwrap();
        assert_ne!(selection, PieceSelection::Forced);
        turn.select_destination(to).unwrap();
    }
    assert_eq!(turn.state().round(), 5);
    assert_eq!(turn.state().player(PlayerId::ONE).turns_taken, 2);
    assert_eq!(turn.state().player(PlayerId::TWO).turns_taken, 2);
    assert_eq!(turn.state().move_log().len(), 4);
}

/// With no legal move anywhere, the turn is a pure card exchange.
#[test]
fn test_forced_exchange_scenario() {
    // Player 1's master is alone in the top-left corner and both held cards
    // only point up or left.
    let board = Board::empty()
        .with_piece(p(0, 0), Piece::master(PlayerId::ONE))
        .with_piece(p(4, 4), Piece::master(PlayerId::TWO));
    let deck = vec![
        card("Up", Facing::Blue, &[(-1, 0), (-1, -1)]),
        card("West", Facing::Blue, &[(0, -1), (0, -2)]),
        card("Boar", Facing::Red, &[(-1, 0)]),
        card("Eel", Facing::Red, &[(-1, 0)]),
        card("Goose", Facing::Blue, &[(0, 1)]),
    ];
    let state = GameState::deal(&ordered(), deck).unwrap().with_board(board.clone());
    let mut turn = TurnController::new(state);
    assert_eq!(turn.active_player(), PlayerId::ONE);
    assert_eq!(turn.phase(), TurnPhase::ForcedExchange);

    let held_before = turn.state().pool().held(PlayerId::ONE);
    let neutral_before = turn.state().pool().neutral();

    let summary = turn.surrender_card(HandSlot::Second).unwrap();
    assert_eq!(summary.kind, TurnKind::ForcedExchange);
    assert_eq!(summary.outcome, GameResult::NoWinner);

    let state = turn.state();
    assert_eq!(state.pool().held(PlayerId::ONE), [held_before[0], neutral_before]);
    assert_eq!(state.pool().neutral(), held_before[1]);
    assert_eq!(state.player(PlayerId::ONE).turns_taken, 1);
    assert_eq!(state.round(), 2);
    assert_eq!(state.board(), &board);
    assert!(state.move_log().is_empty());
    assert_eq!(state.active_player(), PlayerId::TWO);
}

// =============================================================================
// Winning
// =============================================================================

/// Marching the master onto the enemy temple wins, and the winner ranks.
#[test]
fn test_temple_arrival_wins_and_ranks() {
    let board = Board::empty()
        .with_piece(p(2, 2), Piece::master(PlayerId::ONE))
        .with_piece(p(0, 0), Piece::master(PlayerId::TWO));
    let deck = vec![
        card("Leap", Facing::Blue, &[(-2, 0)]),
        card("Step", Facing::Blue, &[(-1, 0)]),
        card("Boar", Facing::Red, &[(-1, 0)]),
        card("Eel", Facing::Red, &[(-1, 0)]),
        card("Goose", Facing::Blue, &[(0, 1)]),
    ];
    let config = ordered().with_player_names("Ana", "Ben");
    let state = GameState::deal(&config, deck).unwrap().with_board(board);
    let mut turn = TurnController::new(state);

    assert_eq!(check_winner(turn.state().board()), GameResult::NoWinner);
    turn.select_card(HandSlot::First).unwrap();
    turn.select_piece(p(2, 2)).unwrap();
    let summary = turn.select_destination(p(0, 2)).unwrap();

    assert_eq!(summary.outcome, GameResult::Player1Wins);
    assert_eq!(turn.phase(), TurnPhase::GameOver(PlayerId::ONE));

    let entry = turn.winner_entry().unwrap();
    assert_eq!(entry, LeaderboardEntry::new("Ana", 1));

    let mut leaders = Leaderboard::parse("Old\n7\n").unwrap();
    assert_eq!(leaders.record(entry), Some(0));
    assert_eq!(leaders.to_text(), "Ana\n1\nOld\n7\n");
}

/// The replay log rebuilds the final board of a played game.
#[test]
fn test_replay_matches_final_board() {
    let mut turn = TurnController::new(GameState::deal(&ordered(), known_deck()).unwrap());
    let moves = [
        (p(0, 0), p(1, 0)),
        (p(4, 0), p(3, 0)),
        (p(0, 4), p(1, 3)),
        (p(4, 4), p(3, 4)),
    ];
    for (from, to) in moves {
        turn.select_card(HandSlot::First).unwrap();
        turn.select_piece(from).unwrap();
        turn.select_destination(to).unwrap();
    }

    let log = turn.state().move_log();
    let last = log.replay().last().unwrap();
    assert_eq!(&last, turn.state().board());

    let exported = log.export();
    assert_eq!(exported[0], (2, 0, 0, 0, 1, "Boar".to_string()));
    assert_eq!(exported[1].0, 1);
}

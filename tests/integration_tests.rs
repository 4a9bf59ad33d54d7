//! Integration tests for full game sessions

use tui_memory::core::{Board, GameConfig, GameOutcome, GameState};
use tui_memory::types::{GameAction, FLIP_RESOLVE_MS, SECOND_MS, SESSION_SECONDS, TICK_MS};

/// `[A, B, A, B]`
fn two_pair_game() -> GameState {
    GameState::with_board(Board::from_values(&[1, 2, 1, 2]).unwrap())
}

fn run_for(game: &mut GameState, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        game.tick(step);
        left -= step;
    }
}

#[test]
fn test_win_scenario() {
    let mut game = two_pair_game();
    game.apply_action(GameAction::StartStop);

    assert!(game.apply_action(GameAction::SelectCard(0)));
    assert!(game.apply_action(GameAction::SelectCard(2)));
    assert!(game.matched().contains(&0) && game.matched().contains(&2));

    // The matched pair stays face up until the flip delay runs out.
    assert!(!game.apply_action(GameAction::SelectCard(1)));
    run_for(&mut game, FLIP_RESOLVE_MS);
    assert!(game.flipped().is_empty());

    game.apply_action(GameAction::SelectCard(1));
    game.apply_action(GameAction::SelectCard(3));

    assert_eq!(game.outcome(), Some(GameOutcome::Won));
    assert!(game.is_game_over());
    assert!(!game.is_active());
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS - 1);
}

#[test]
fn test_mismatch_turns_back_after_delay() {
    let mut game = two_pair_game();
    game.start_stop();

    game.select_card(0);
    game.select_card(1);
    assert_eq!(game.flipped(), &[0, 1]);
    assert!(game.matched().is_empty());

    run_for(&mut game, FLIP_RESOLVE_MS - TICK_MS);
    assert_eq!(game.flipped(), &[0, 1]);

    run_for(&mut game, TICK_MS);
    assert!(game.flipped().is_empty());
    assert!(game.matched().is_empty());
    assert!(game.is_active());
}

#[test]
fn test_timeout_scenario() {
    let mut game = two_pair_game();
    game.start_stop();
    game.select_card(0);
    game.select_card(2);

    run_for(&mut game, SESSION_SECONDS * SECOND_MS);

    assert_eq!(game.remaining_seconds(), 0);
    assert!(game.is_game_over());
    assert!(!game.is_active());
    assert_eq!(game.outcome(), Some(GameOutcome::TimeExpired));

    // Nothing moves once the clock has run out.
    assert!(!game.select_card(1));
    run_for(&mut game, 5 * SECOND_MS);
    assert_eq!(game.remaining_seconds(), 0);
    assert_eq!(game.matched().len(), 2);
}

#[test]
fn test_restart_after_pause_begins_fresh_session() {
    let mut game = two_pair_game();
    game.start_stop();
    game.select_card(0);
    game.select_card(2);
    run_for(&mut game, 5 * SECOND_MS);
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS - 5);

    // Pausing freezes the clock and keeps progress on screen.
    game.start_stop();
    assert!(!game.is_active());
    run_for(&mut game, 3 * SECOND_MS);
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS - 5);
    assert_eq!(game.matched().len(), 2);

    // Resuming does not continue; it starts over.
    game.start_stop();
    assert!(game.is_active());
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS);
    assert!(game.matched().is_empty());
    assert!(game.flipped().is_empty());
}

#[test]
fn test_reset_is_idempotent() {
    let mut game = two_pair_game();
    game.start_stop();
    game.select_card(0);
    game.select_card(1);
    run_for(&mut game, 2 * SECOND_MS);

    game.reset();
    let once = game.snapshot();
    game.reset();
    assert_eq!(game.snapshot(), once);

    assert!(!once.is_active);
    assert!(!once.is_game_over);
    assert_eq!(once.remaining_seconds, SESSION_SECONDS);
    assert!(once.flipped_positions.is_empty());
    assert!(once.matched_positions.is_empty());
}

#[test]
fn test_stale_clear_does_not_touch_new_flips() {
    let mut game = two_pair_game();
    game.start_stop();
    game.select_card(0);
    game.select_card(1);

    game.reset();
    game.start_stop();
    game.select_card(3);

    run_for(&mut game, FLIP_RESOLVE_MS);
    assert_eq!(game.flipped(), &[3]);
}

#[test]
fn test_selection_rules() {
    let mut game = two_pair_game();
    assert!(!game.select_card(0), "idle sessions ignore selections");

    game.start_stop();
    assert!(game.select_card(0));
    assert!(!game.select_card(0), "same card twice");
    assert!(!game.select_card(4), "off the board");
    assert!(game.select_card(1));
    assert!(!game.select_card(2), "two cards already face up");
    assert_eq!(game.flipped(), &[0, 1]);
}

#[test]
fn test_countdown_counts_whole_seconds() {
    let mut game = two_pair_game();
    game.start_stop();

    run_for(&mut game, SECOND_MS - TICK_MS);
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS);
    run_for(&mut game, TICK_MS);
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS - 1);

    // A single long tick counts every whole second in it.
    game.tick(2500);
    assert_eq!(game.remaining_seconds(), SESSION_SECONDS - 3);
}

#[test]
fn test_level_change_deals_new_board() {
    let mut game = GameState::new(GameConfig::new(4, 99)).unwrap();
    game.start_stop();
    game.select_card(0);

    game.set_level(6).unwrap();
    assert_eq!(game.level(), 6);
    assert_eq!(game.board().len(), 36);
    assert!(!game.is_active());
    assert!(game.flipped().is_empty());

    assert!(game.set_level(5).is_err());
    assert_eq!(game.level(), 6);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = GameState::new(GameConfig::new(4, 2024)).unwrap();
    let b = GameState::new(GameConfig::new(4, 2024)).unwrap();
    assert_eq!(a.board(), b.board());
}

//! Property tests: invariants that hold for any seed and any input sequence

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use proptest::strategy::ValueTree;
use proptest::test_runner::TestRunner;

use tui_memory::core::{Board, DeckRng, GameConfig, GameOutcome, GameState};
use tui_memory::types::{GameAction, SESSION_SECONDS};

#[derive(Debug, Clone, Copy)]
enum Op {
    StartStop,
    Reset,
    Select(usize),
    Tick(u32),
}

/// Input sequences whose selections fall in `0..positions`.
fn op_sequences(positions: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        1 => Just(Op::StartStop),
        1 => Just(Op::Reset),
        6 => (0..positions).prop_map(Op::Select),
        4 => (0u32..2500).prop_map(Op::Tick),
    ];
    prop::collection::vec(op, 0..200)
}

/// `[A, B, A, B]`
fn two_pair_game() -> GameState {
    GameState::with_board(Board::from_values(&[1, 2, 1, 2]).unwrap())
}

fn apply(game: &mut GameState, op: Op) {
    match op {
        Op::StartStop => {
            game.apply_action(GameAction::StartStop);
        }
        Op::Reset => {
            game.apply_action(GameAction::Reset);
        }
        Op::Select(position) => {
            game.apply_action(GameAction::SelectCard(position));
        }
        Op::Tick(ms) => {
            game.tick(ms);
        }
    }
}

fn check_invariants(game: &GameState) {
    assert!(game.flipped().len() <= 2);
    assert!(game.remaining_seconds() <= SESSION_SECONDS);
    assert!(!(game.is_active() && game.is_game_over()));
    assert_eq!(
        game.is_game_over(),
        game.remaining_seconds() == 0 || game.all_matched()
    );

    // Matched cards always come in pairs of equal value.
    let mut by_value: HashMap<u32, usize> = HashMap::new();
    for &position in game.matched() {
        let card = game.card(position).unwrap();
        *by_value.entry(card.value).or_insert(0) += 1;
    }
    assert!(by_value.values().all(|&count| count == 2));

    match game.outcome() {
        Some(GameOutcome::Won) => assert!(game.all_matched()),
        Some(GameOutcome::TimeExpired) => {
            assert_eq!(game.remaining_seconds(), 0);
            assert!(!game.all_matched());
        }
        None => assert!(!game.is_game_over()),
    }
}

/// Replay `ops`, checking invariants after every step.
///
/// Returns true if the session was won at some point.
fn play(game: &mut GameState, ops: &[Op]) -> bool {
    let mut won = false;
    check_invariants(game);

    for &op in ops {
        let matched_before: BTreeSet<usize> = game.matched().clone();
        let seconds_before = game.remaining_seconds();
        let over_before = game.is_game_over();

        apply(game, op);
        check_invariants(game);

        if matches!(op, Op::Select(_) | Op::Tick(_)) {
            // Only a session reset may take matches away.
            assert!(matched_before.is_subset(game.matched()));

            // A finished session stays frozen until the next start or reset.
            if over_before {
                assert!(game.is_game_over());
                assert_eq!(game.matched(), &matched_before);
                assert_eq!(game.remaining_seconds(), seconds_before);
            }
        }
        won |= game.outcome() == Some(GameOutcome::Won);
    }
    won
}

#[test]
fn random_play_on_two_pair_board_reaches_wins() {
    let mut runner = TestRunner::deterministic();
    let strategy = op_sequences(5);
    let mut wins = 0;
    for _ in 0..256 {
        let sequence = strategy.new_tree(&mut runner).unwrap().current();
        if play(&mut two_pair_game(), &sequence) {
            wins += 1;
        }
    }
    assert!(wins > 0, "no random sequence finished a game");
}

proptest! {
    #[test]
    fn dealt_boards_pair_every_value(seed in any::<u64>(), half in 1u8..=4) {
        let level = half * 2;
        let board = Board::generate(level, &mut DeckRng::new(seed)).unwrap();

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.value).or_insert(0) += 1;
        }
        prop_assert_eq!(board.len(), level as usize * level as usize);
        prop_assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), len in 0usize..64) {
        let mut values: Vec<usize> = (0..len).collect();
        DeckRng::new(seed).shuffle(&mut values);
        values.sort_unstable();
        prop_assert_eq!(values, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn invariants_hold_for_any_input(seed in any::<u64>(), ops in op_sequences(20)) {
        let mut game = GameState::new(GameConfig::new(4, seed)).unwrap();
        play(&mut game, &ops);
    }

    #[test]
    fn invariants_hold_on_two_pair_board(ops in op_sequences(5)) {
        let mut game = two_pair_game();
        play(&mut game, &ops);
    }

    #[test]
    fn clock_never_runs_while_idle(seed in any::<u64>(), ticks in prop::collection::vec(0u32..5000, 0..50)) {
        let mut game = GameState::new(GameConfig::new(2, seed)).unwrap();
        for ms in ticks {
            game.tick(ms);
        }
        prop_assert_eq!(game.remaining_seconds(), SESSION_SECONDS);
        prop_assert!(!game.is_active());
    }
}

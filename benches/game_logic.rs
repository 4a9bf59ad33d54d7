use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{Board, DeckRng, GameConfig, GameSnapshot, GameState};
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::{GameAction, TICK_MS};

fn bench_deal(c: &mut Criterion) {
    let mut rng = DeckRng::new(12345);
    c.bench_function("deal_8x8", |b| {
        b.iter(|| Board::generate(black_box(8), &mut rng))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::new(4, 12345)).unwrap_or_else(|e| panic!("{e}"));
    state.start_stop();

    c.bench_function("game_tick_50ms", |b| {
        b.iter(|| {
            // Restart before the clock runs out so every tick counts down.
            if state.remaining_seconds() < 2 {
                state.reset();
                state.start_stop();
            }
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_select_pair(c: &mut Criterion) {
    let board = Board::from_values(&[1, 2, 1, 2]).unwrap_or_else(|e| panic!("{e}"));
    c.bench_function("select_matching_pair", |b| {
        b.iter(|| {
            let mut state = GameState::with_board(board.clone());
            state.apply_action(GameAction::StartStop);
            state.apply_action(GameAction::SelectCard(black_box(0)));
            state.apply_action(GameAction::SelectCard(black_box(2)));
            state
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig::new(8, 7)).unwrap_or_else(|e| panic!("{e}"));
    state.start_stop();
    state.select_card(0);

    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("snapshot_render_8x8", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Some(0), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_deal,
    bench_tick,
    bench_select_pair,
    bench_snapshot_and_render
);
criterion_main!(benches);

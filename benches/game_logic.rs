use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::types::{Color, GameAction, Intents};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let intents = Intents::from_actions([GameAction::MoveLeft, GameAction::SoftDrop]);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.tick(black_box(intents));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    let _ = board.set_cell(row, col, Color::RED);
                }
            }
            board.clear_full_lines()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn();

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            state.move_piece(black_box(1), 0);
            state.move_piece(black_box(-1), 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.spawn();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);

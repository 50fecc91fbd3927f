use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState};
use blockfall::engine::Session;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Command, GameStatus, PieceKind, FRAME_MS};

fn bench_frame_advance(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            session.advance_if_due(black_box(FRAME_MS));
            if session.status() == GameStatus::GameOver {
                session.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row_except(y, PieceKind::I, &[]);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.hard_drop().is_none() {
                state.restart();
            }
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut dir = Command::MoveRight;

    c.bench_function("move", |b| {
        b.iter(|| {
            if !state.apply(dir) {
                dir = match dir {
                    Command::MoveRight => Command::MoveLeft,
                    _ => Command::MoveRight,
                };
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            state.apply(black_box(Command::RotateCw));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let snap = state.snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_frame_advance,
    bench_line_clear,
    bench_hard_drop,
    bench_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);

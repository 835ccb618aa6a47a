use criterion::{black_box, criterion_group, criterion_main, Criterion};
use queen_step::core::{legal_moves_from, BoardSize, GameState};
use queen_step::term::{FrameBuffer, GameView, Viewport};
use queen_step::types::Square;

fn bench_legal_moves(c: &mut Criterion) {
    let size = BoardSize::new(20).unwrap();

    c.bench_function("legal_moves_center", |b| {
        b.iter(|| legal_moves_from(size, black_box(Square::new(0, 0)), black_box(Square::new(10, 10))))
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut state = GameState::new(BoardSize::new(20).unwrap(), 12345);

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            let target = state.legal_moves()[0];
            state.attempt_move(black_box(target));
        })
    });
}

fn bench_randomize(c: &mut Criterion) {
    let mut state = GameState::new(BoardSize::new(20).unwrap(), 12345);

    c.bench_function("randomize_queen_and_block", |b| {
        b.iter(|| {
            state.randomize_queen();
            state.randomize_block();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(BoardSize::new(20).unwrap(), 12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(120, 48);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_20x20", |b| {
        b.iter(|| view.render_into(Some(black_box(&snap)), None, vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_attempt_move,
    bench_randomize,
    bench_render
);
criterion_main!(benches);

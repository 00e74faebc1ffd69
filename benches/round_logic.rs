use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_unscramble::core::{
    reorder, scramble, tiles_from_scrambled, PuzzleGenerator, Round, RoundSnapshot, SimpleRng,
    Vocabulary,
};
use word_unscramble::engine::Session;
use word_unscramble::term::{FrameBuffer, PuzzleView, Viewport};
use word_unscramble::types::{RoundAction, TICK_MS, WORD_COUNT};

fn new_round(seed: u32) -> Round {
    Round::new(PuzzleGenerator::new(Vocabulary::builtin(), WORD_COUNT).unwrap(), seed)
}

fn bench_scramble(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("scramble_javascript", |b| {
        b.iter(|| scramble(black_box("JAVASCRIPT"), &mut rng))
    });
}

fn bench_new_set(c: &mut Criterion) {
    let mut round = new_round(12345);
    c.bench_function("new_set", |b| {
        b.iter(|| {
            round.apply(RoundAction::NewSet);
        })
    });
}

fn bench_reorder(c: &mut Criterion) {
    let mut tiles = tiles_from_scrambled(&"BOOTSTRAP".chars().collect::<Vec<_>>());
    c.bench_function("reorder_tiles", |b| {
        b.iter(|| {
            reorder(&mut tiles, black_box(8), black_box(0));
        })
    });
}

fn bench_round_reorder(c: &mut Criterion) {
    let mut round = new_round(12345);
    c.bench_function("round_reorder", |b| {
        b.iter(|| {
            let tiles = round.words()[0].tiles();
            let action = RoundAction::Reorder {
                word_index: 0,
                source: tiles[tiles.len() - 1].id,
                target: tiles[0].id,
            };
            round.apply(action)
        })
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let mut session = Session::new(new_round(12345));
    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| session.tick(black_box(TICK_MS)))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let round = new_round(12345);
    let view = PuzzleView::default();
    let mut snap = RoundSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_into_render_into", |b| {
        b.iter(|| {
            round.snapshot_into(&mut snap);
            view.render_into(&snap, None, Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_scramble,
    bench_new_set,
    bench_reorder,
    bench_round_reorder,
    bench_session_tick,
    bench_snapshot_and_render
);
criterion_main!(benches);

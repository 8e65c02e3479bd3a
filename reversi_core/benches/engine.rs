//! `reversi_core::engine` の性能計測（着手候補の計算、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use reversi_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// `MoveResolver::apply_move` を計測する。
fn bench_apply_move(criterion: &mut Criterion) {
    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            || (engine::BoardState::initial(), engine::MoveResolver::new()),
            |(mut board, mut resolver)| {
                black_box(resolver.apply_move(&mut board, 4, 2).map(<[engine::Coord]>::len))
            },
            BatchSize::SmallInput,
        );
    });
}

/// `MoveResolver::compute_candidates` を計測する。
fn bench_compute_candidates(criterion: &mut Criterion) {
    let board = engine::BoardState::initial();
    criterion.bench_function("engine/compute_candidates_initial", |bench| {
        bench.iter_batched(
            engine::MoveResolver::new,
            |mut resolver| black_box(resolver.compute_candidates(&board).len()),
            BatchSize::SmallInput,
        );
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_move(&mut criterion);
    bench_compute_candidates(&mut criterion);

    criterion.final_summary();
}

//! `reversi_core::ai::random` の性能計測（1手選択、1局の自己対戦）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use reversi_core::ai::Ai as _;
use reversi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めたゲームを返す（途中で終局した場合はその時点で止める）。
fn game_after_plies(plies: u16) -> engine::Game {
    let mut agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::initial();

    for _turn in u16::MIN..plies {
        let Some(mv) = agent.select_move(&game) else {
            break;
        };

        match game.play(i32::from(mv.x()), i32::from(mv.y())) {
            Ok(engine::GameStatus::InProgress) => {}
            _ => break,
        }
    }

    game
}

/// ランダム同士で1局を最後まで進める。
fn self_play(seed: u64) -> engine::GameStatus {
    let mut agent = ai::random::Agent::new(seed);
    let mut game = engine::Game::initial();

    while let Some(mv) = agent.select_move(&game) {
        if game.play(i32::from(mv.x()), i32::from(mv.y())).is_err() {
            break;
        }
    }

    game.status()
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = [game_after_plies(0), game_after_plies(8), game_after_plies(24)];
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, game) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("game", index);
        group.bench_with_input(bench_id, game, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(input)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// 自己対戦1局を計測する。
fn bench_self_play(criterion: &mut Criterion) {
    criterion.bench_function("ai/random/self_play", |bench| {
        bench.iter(|| black_box(self_play(42)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    bench_self_play(&mut criterion);
    criterion.final_summary();
}

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    Criterion,
};
use minimax::TicTacToeSolver;
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax all", |b| {
        b.iter_batched(
            TicTacToeSolver::new,
            |mut solver| solver.minimax(black_box(&tic_tac_toe::initial_state())),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("minimax all cached", |b| {
        let mut solver = TicTacToeSolver::new();
        let board = tic_tac_toe::initial_state();
        b.iter(|| solver.minimax(black_box(&board)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);

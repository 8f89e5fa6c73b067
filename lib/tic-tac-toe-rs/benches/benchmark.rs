use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Team,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("minimax all", |b| {
        b.iter(|| tic_tac_toe::minimax(black_box(Board::new()), black_box(Team::X)))
    });

    let corner_opening = Board::new()
        .apply(0, Team::X)
        .expect("failed to apply opening move");
    c.bench_function("choose ai move after corner opening", |b| {
        b.iter(|| tic_tac_toe::choose_ai_move(black_box(corner_opening)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);

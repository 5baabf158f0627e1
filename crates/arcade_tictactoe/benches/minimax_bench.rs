use arcade_tictactoe::{minimax_move, Board, Marker, MinimaxSearch};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_exhaustive_empty_board(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("minimax_exhaustive_empty_board", |b| {
        b.iter(|| minimax_move(black_box(&board), Marker::X, None))
    });
}

fn bench_exhaustive_mid_game(c: &mut Criterion) {
    let board: Board = "x...o...x".parse().expect("valid board literal");
    c.bench_function("minimax_exhaustive_mid_game", |b| {
        b.iter(|| minimax_move(black_box(&board), Marker::O, None))
    });
}

fn bench_medium_depth(c: &mut Criterion) {
    let board: Board = "x.o.x....".parse().expect("valid board literal");
    c.bench_function("minimax_depth_3", |b| {
        b.iter(|| {
            let mut search = MinimaxSearch::new(Marker::O).with_depth_limit(3);
            search.best_move(black_box(&board))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_exhaustive_empty_board, bench_exhaustive_mid_game, bench_medium_depth
}
criterion_main!(benches);

//! Benchmarks for the Klotski engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use klotski::{generator, moves, solver, Board, CLASSIC_LAYOUT};

/// Benchmark full-board legal-move enumeration.
fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::from_blocks(CLASSIC_LAYOUT).unwrap();

    c.bench_function("legal_moves", |b| {
        b.iter(|| moves::legal_moves(black_box(&board)))
    });
}

/// Benchmark the breadth-first solve of the classic 81-move layout.
fn bench_solve_classic(c: &mut Criterion) {
    let board = Board::from_blocks(CLASSIC_LAYOUT).unwrap();

    let mut group = c.benchmark_group("solver");
    group.sample_size(10);
    group.bench_function("solve_classic", |b| {
        b.iter(|| solver::solve(black_box(&board)))
    });
    group.finish();
}

/// Benchmark random solvable-board generation with its solver oracle.
fn bench_random_solvable_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.sample_size(10);
    group.bench_function("random_solvable_board", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| generator::random_solvable_board_with(black_box(&mut rng)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_solve_classic,
    bench_random_solvable_board
);
criterion_main!(benches);

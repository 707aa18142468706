use std::hint::black_box;

use caro_core::bitboard::BitBoard;
use criterion::{criterion_group, criterion_main, Criterion};

fn sample_board() -> BitBoard {
    let mut board = BitBoard::empty();
    for i in 0..16 {
        board.set(i, (i * 3) % 16);
    }
    board
}

fn bench_shift_right(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("bitboard_shift_right", |b| b.iter(|| black_box(board).shift_right()));
}

fn bench_shift_down(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("bitboard_shift_down", |b| b.iter(|| black_box(board).shift_down()));
}

fn bench_shift_down_right(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("bitboard_shift_down_right", |b| b.iter(|| black_box(board).shift_down_right()));
}

fn bench_union_intersection(c: &mut Criterion) {
    let a = sample_board();
    let b = a.shift_right();
    c.bench_function("bitboard_union_intersection", |bencher| {
        bencher.iter(|| (black_box(a).union(&b), black_box(a).intersection(&b)))
    });
}

fn bench_iter(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("bitboard_iter", |b| b.iter(|| black_box(board).iter().count()));
}

criterion_group!(
    benches,
    bench_shift_right,
    bench_shift_down,
    bench_shift_down_right,
    bench_union_intersection,
    bench_iter
);
criterion_main!(benches);

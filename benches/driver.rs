use std::hint::black_box;

use caro_core::{candidates, IterativeDeepeningDriver, NodeCount, SearchBoard, SearchFn, Score, Depth, Side};
use criterion::{criterion_group, criterion_main, Criterion};

/// A fixed-depth material-count stand-in for the real recursive search, just enough
/// to exercise the driver's root loop and time-bound bookkeeping under a realistic
/// branching factor.
struct MaterialStub;

impl SearchFn for MaterialStub {
    fn search(
        &self,
        board: &mut SearchBoard,
        side: Side,
        depth: Depth,
        _alpha: Score,
        _beta: Score,
        _allow_null_move: bool,
        _root_side: Side,
        _current_depth: Depth,
    ) -> (Score, NodeCount) {
        if depth == 0 {
            let mine = board.get_bitboard(side).count() as Score;
            let theirs = board.get_bitboard(side.opponent()).count() as Score;
            (mine - theirs, 1)
        } else {
            (0, 1)
        }
    }
}

fn bench_opening_search_depth_two(c: &mut Criterion) {
    let driver = IterativeDeepeningDriver::new(MaterialStub);
    let board = SearchBoard::new();
    let cands = candidates::candidates(&board, candidates::DEFAULT_RADIUS);

    c.bench_function("driver_opening_depth_two", |b| {
        b.iter(|| black_box(driver.search(&board, Side::Red, &cands, 1, 2, 1.0, 1.0)))
    });
}

fn bench_midgame_search_depth_two(c: &mut Criterion) {
    let driver = IterativeDeepeningDriver::new(MaterialStub);
    let mut board = SearchBoard::new();
    for (i, &(x, y)) in [(7, 7), (8, 8), (7, 9), (9, 7), (6, 6), (9, 9)].iter().enumerate() {
        let side = if i % 2 == 0 { Side::Red } else { Side::Blue };
        board.make_move(x, y, side);
    }
    let cands = candidates::candidates(&board, candidates::DEFAULT_RADIUS);

    c.bench_function("driver_midgame_depth_two", |b| {
        b.iter(|| black_box(driver.search(&board, Side::Red, &cands, 1, 2, 1.0, 1.0)))
    });
}

criterion_group!(benches, bench_opening_search_depth_two, bench_midgame_search_depth_two);
criterion_main!(benches);

//! Capability traits for the collaborators this core invokes but does not
//! implement: the static evaluator, the recursive search, the opening book, and
//! position canonicalisation.
//!
//! The hot, per-node call (`SearchFn`) is taken generically by the driver so it
//! monomorphises to a direct call; the cold, rarely-invoked hooks (`EvalFn`,
//! `OpeningBookStore`, `PositionCanonicalizer`) are taken as trait objects, the way
//! the teacher's `Search` holds its `Eval`/`TranspositionTable` collaborators as
//! owned handles rather than generic parameters.

use crate::board::SearchBoard;
use crate::difficulty::DifficultyLevel;
use crate::types::{Depth, NodeCount, Position, Score, Side};

/// The static position evaluator: `eval(position, side) -> score`. Pure.
pub trait EvalFn {
    fn evaluate(&self, board: &SearchBoard, side_to_move: Side) -> Score;
}

/// The recursive alpha-beta search the driver delegates to below the root.
///
/// Must be referentially transparent in `(board, side, depth, alpha, beta)`: calling
/// it twice with the same arguments (and the same stones on `board`) must return the
/// same score. `root_side` is the side the overall search is being conducted for;
/// `current_depth` is the ply count from the root, used by collaborators such as a
/// transposition table or a mate-distance adjustment.
pub trait SearchFn {
    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        board: &mut SearchBoard,
        side: Side,
        depth: Depth,
        alpha: Score,
        beta: Score,
        allow_null_move: bool,
        root_side: Side,
        current_depth: Depth,
    ) -> (Score, NodeCount);
}

/// Aggregate counters an opening book can report about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookStatistics {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// The external opening-book store `OpeningBookFacade` delegates to.
pub trait OpeningBookStore {
    fn get_move(
        &self,
        canonical_position: &SearchBoard,
        side: Side,
        difficulty: DifficultyLevel,
    ) -> Option<Position>;

    fn get_statistics(&self) -> BookStatistics;
}

/// Canonicalises a position (e.g. under the board's symmetry group) before an
/// opening-book lookup, so rotations/reflections of the same position share one
/// book entry.
pub trait PositionCanonicalizer {
    fn canonicalize(&self, position: &SearchBoard) -> SearchBoard;
}

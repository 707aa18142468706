//! Value types shared across the search core: moves, search results, principal
//! variations, and threats.

use crate::types::{Depth, NodeCount, Position, Score, Side};

/// The sole output of `IterativeDeepeningDriver::search`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub x: i32,
    pub y: i32,
    pub depth_achieved: Depth,
    pub nodes_searched: NodeCount,
    pub elapsed_seconds: f64,
    pub score: Score,
    /// Set when `DifficultyProfile::error_rate` jitter substituted a weaker move for
    /// the true best one.
    pub was_randomized: bool,
}

impl SearchResult {
    #[inline]
    pub fn best_move(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// An immutable ordered sequence of moves the search currently believes optimal for
/// both sides, with the depth and score it was produced at.
#[derive(Debug, Clone, PartialEq)]
pub struct Pv {
    moves: Vec<Position>,
    depth: Depth,
    score: Score,
}

impl Pv {
    pub fn new(moves: Vec<Position>, depth: Depth, score: Score) -> Pv {
        Pv { moves, depth, score }
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// The root side's best reply (index 0).
    pub fn root_move(&self) -> Option<Position> {
        self.moves.first().copied()
    }

    /// The predicted opponent reply (index 1), used for pondering.
    pub fn ponder_move(&self) -> Option<Position> {
        self.moves.get(1).copied()
    }
}

/// The four threat shapes the (external) VCF solver reasons about, each with a
/// static search priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatKind {
    StraightFour,
    BrokenFour,
    StraightThree,
    BrokenThree,
}

impl ThreatKind {
    /// Static priority used to order threats for the VCF solver.
    pub fn priority(self) -> u32 {
        match self {
            ThreatKind::StraightFour => 100,
            ThreatKind::BrokenFour => 80,
            ThreatKind::StraightThree => 60,
            ThreatKind::BrokenThree => 40,
        }
    }
}

/// A detected threat: an owner-side shape along a direction, with the squares that
/// would complete it (gain) and the squares the opponent must answer at (cost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Threat {
    pub kind: ThreatKind,
    pub owner: Side,
    pub direction: (i32, i32),
    pub stones: Vec<Position>,
    pub gain_squares: Vec<Position>,
    pub cost_squares: Vec<Position>,
}

//! Search core for a 16x16 Caro (Gomoku-variant) engine: board representation, move
//! generation, win detection, the opening book facade, difficulty profiles, rating
//! updates, and the iterative-deepening driver that ties them together.
//!
//! This crate is the engine core only. It does not implement a static evaluator, the
//! recursive alpha-beta search below the root, or an opening-book backing store:
//! those are supplied by a caller through the traits in [`collab`].

pub mod bitboard;
pub mod board;
pub mod book;
pub mod candidates;
pub mod collab;
pub mod difficulty;
pub mod elo;
pub mod error;
pub mod moves;
pub mod search;
pub mod types;
pub mod win;

pub use board::{MoveUndo, SearchBoard};
pub use collab::{BookStatistics, EvalFn, OpeningBookStore, PositionCanonicalizer, SearchFn};
pub use difficulty::{DifficultyLevel, DifficultyProfile};
pub use error::{CoreError, CoreResult};
pub use moves::{Pv, SearchResult, Threat, ThreatKind};
pub use search::{IterativeDeepeningDriver, SearchAbortFlag, SearchConfig};
pub use types::{Depth, NodeCount, Position, Score, Side, BOARD_SIZE, CENTRE};

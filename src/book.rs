//! Thin dispatcher to an external opening-book lookup, with an unconditional
//! centre-move fallback on an empty board.

use crate::board::SearchBoard;
use crate::collab::{OpeningBookStore, PositionCanonicalizer};
use crate::difficulty::DifficultyLevel;
use crate::types::{Position, Side, CENTRE};

/// Stones on the board past which a position is no longer considered "opening":
/// 12 moves per side.
const OPENING_PHASE_STONES: u32 = 24;

/// Dispatches to an injected book store, holding its services by owned handle (no
/// cyclic references: the store/canonicalizer never refer back to the facade).
pub struct OpeningBookFacade {
    store: Box<dyn OpeningBookStore>,
    canonicalizer: Box<dyn PositionCanonicalizer>,
}

impl OpeningBookFacade {
    pub fn new(store: Box<dyn OpeningBookStore>, canonicalizer: Box<dyn PositionCanonicalizer>) -> OpeningBookFacade {
        OpeningBookFacade { store, canonicalizer }
    }

    /// `last_opponent_move` is kept in the signature for book implementations that
    /// key on the reply to a specific move; the cascade below does not itself
    /// branch on it.
    pub fn book_move(
        &self,
        board: &SearchBoard,
        side: Side,
        difficulty: DifficultyLevel,
        _last_opponent_move: Option<Position>,
    ) -> Option<Position> {
        if board.occupancy().is_empty() {
            return Some(Position::new(CENTRE, CENTRE));
        }

        if !matches!(
            difficulty,
            DifficultyLevel::Hard | DifficultyLevel::Grandmaster | DifficultyLevel::Experimental
        ) {
            return None;
        }

        if board.total_stones() >= OPENING_PHASE_STONES {
            return None;
        }

        let canonical = self.canonicalizer.canonicalize(board);
        self.store.get_move(&canonical, side, difficulty)
    }
}

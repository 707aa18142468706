//! Proximity-based candidate move generation: prunes the 256-cell board down to the
//! empty cells near existing stones, in a deterministic seed order.

use crate::board::SearchBoard;
use crate::types::{Position, BOARD_SIZE, CENTRE};

/// Default proximity radius (Chebyshev distance) used when callers don't override it.
pub const DEFAULT_RADIUS: i32 = 2;

/// Returns every empty cell within Chebyshev distance `radius` of some occupied
/// cell, in seed order (see `seed_order`). On an empty board, returns only the
/// centre cell: callers (notably the driver) rely on this for the opening.
pub fn candidates(board: &SearchBoard, radius: i32) -> Vec<Position> {
    let occupancy = board.occupancy();
    if occupancy.is_empty() {
        return vec![Position::new(CENTRE, CENTRE)];
    }

    let stones: Vec<Position> = occupancy.iter().collect();
    let mut result = Vec::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if occupancy.get(x, y) {
                continue;
            }
            let cell = Position::new(x, y);
            if stones.iter().any(|&s| cell.chebyshev_distance(s) <= radius) {
                result.push(cell);
            }
        }
    }
    seed_order(&mut result, &stones);
    result
}

/// Orders candidates by `2 * manhattan(centre) + manhattan(nearest stone)`,
/// ascending, breaking ties by `(x, y)` lexicographic order so the ordering is
/// deterministic regardless of input order or hash-iteration artifacts.
pub fn seed_order(cells: &mut [Position], stones: &[Position]) {
    let centre = Position::new(CENTRE, CENTRE);
    cells.sort_by(|&a, &b| seed_key(a, centre, stones).cmp(&seed_key(b, centre, stones)).then(a.cmp(&b)));
}

fn seed_key(cell: Position, centre: Position, stones: &[Position]) -> i32 {
    let nearest_stone = stones.iter().map(|&s| cell.manhattan_distance(s)).min().unwrap_or(0);
    2 * cell.manhattan_distance(centre) + nearest_stone
}

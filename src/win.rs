//! Detects an exactly-five-in-a-row win under Caro rules: no overline, and not
//! blocked at both ends.

use crate::board::SearchBoard;
use crate::types::{Position, Side};

/// The four canonical scan directions. Each unordered line is reachable by scanning
/// in exactly one of these, so no direction and its opposite are both listed.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Outcome of a win scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinResult {
    pub has_winner: bool,
    pub winner: Side,
    /// The five cells forming the winning line, in scan order. Empty when
    /// `has_winner` is false.
    pub winning_line: Vec<Position>,
}

impl WinResult {
    fn none() -> WinResult {
        WinResult {
            has_winner: false,
            winner: Side::None,
            winning_line: Vec::new(),
        }
    }
}

/// Reads the side at `(x, y)`, returning `Side::None` for an out-of-bounds or empty
/// cell (a safe read, matching `SearchBoard`'s own out-of-bounds semantics).
#[inline]
fn side_at(board: &SearchBoard, x: i32, y: i32) -> Side {
    if !Position::new(x, y).in_bounds() {
        Side::None
    } else {
        board.player_at(x, y)
    }
}

/// Scans the whole board for a winning five-in-a-row.
///
/// Every occupied cell is scanned as a potential run start in each of the four
/// canonical directions; see the module docs on why only the cell immediately
/// before the start and immediately after the fifth stone need checking for an
/// overline.
pub fn check(board: &SearchBoard) -> WinResult {
    for y in 0..16 {
        for x in 0..16 {
            let side = board.player_at(x, y);
            if side == Side::None {
                continue;
            }
            for &(dx, dy) in &DIRECTIONS {
                if let Some(result) = check_run(board, x, y, dx, dy, side) {
                    return result;
                }
            }
        }
    }
    WinResult::none()
}

fn check_run(board: &SearchBoard, x: i32, y: i32, dx: i32, dy: i32, side: Side) -> Option<WinResult> {
    let mut count = 0;
    while side_at(board, x + count * dx, y + count * dy) == side {
        count += 1;
        if count > 5 {
            break;
        }
    }
    if count != 5 {
        return None;
    }

    let before = side_at(board, x - dx, y - dy);
    let after = side_at(board, x + 5 * dx, y + 5 * dy);
    if before == side || after == side {
        return None; // overline
    }

    let blocked_before = !Position::new(x - dx, y - dy).in_bounds() || before == side.opponent();
    let blocked_after = !Position::new(x + 5 * dx, y + 5 * dy).in_bounds() || after == side.opponent();
    if blocked_before && blocked_after {
        return None; // fully surrounded five is not a win under Caro rules
    }

    let winning_line = (0..5).map(|i| Position::new(x + i * dx, y + i * dy)).collect();
    Some(WinResult {
        has_winner: true,
        winner: side,
        winning_line,
    })
}

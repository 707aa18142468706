//! Standard Elo rating update, K-factor 32. Pure functions; no engine state.

/// Expected score of a player rated `p` against an opponent rated `o`.
pub fn expected(p: f64, o: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((o - p) / 400.0))
}

/// Updates a rating after one game. `mult` scales the K-factor (e.g. for tournament
/// weighting); pass `1.0` for a standard update.
pub fn new_rating(p: i32, o: i32, won: bool, mult: f64) -> i32 {
    let expected_score = expected(p as f64, o as f64);
    let actual_score = if won { 1.0 } else { 0.0 };
    let delta = 32.0 * mult * (actual_score - expected_score);
    round_half_away_from_zero(p as f64 + delta)
}

fn round_half_away_from_zero(value: f64) -> i32 {
    if value >= 0.0 {
        (value + 0.5).floor() as i32
    } else {
        (value - 0.5).ceil() as i32
    }
}

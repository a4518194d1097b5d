//! Pattern scores for Renju evaluation
//!
//! Two tables live here: the candidate weights used to rank empty cells and
//! the run-length weights used by the static evaluation.

/// Candidate move weights, anchored at the empty cell being scored
pub struct PatternScore;

impl PatternScore {
    /// Completes five for the mover
    pub const FIVE: i64 = 1_000_000;
    /// Opponent would complete five here
    pub const BLOCK_FIVE: i64 = 1_000_000;
    /// Open four for the mover: _OOOO_
    pub const OPEN_FOUR: i64 = 200_000;
    /// Opponent would get an open four here
    pub const BLOCK_OPEN_FOUR: i64 = 100_000;
    /// Opponent would get an open three here
    pub const BLOCK_OPEN_THREE: i64 = 10_000;
    /// Opponent would get a four with one end blocked
    pub const BLOCK_DEAD_FOUR: i64 = 10_000;
    /// Open three for the mover: _OOO_
    pub const OPEN_THREE: i64 = 10_000;
    /// Four with one end blocked for the mover: XOOOO_
    pub const DEAD_FOUR: i64 = 1_000;
    /// Any stone in the 8-neighborhood
    pub const NEIGHBOR: i64 = 100;
    /// Inside the central 3x3
    pub const CENTER: i64 = 10;
    /// Forbidden for Black through this point
    pub const FORBIDDEN: i64 = -100_000_000;

    /// Candidates at or above this score are played without searching:
    /// an immediate win, a forced block, or an open four.
    pub const IMMEDIATE: i64 = 100_000;
}

/// Static evaluation weight for a run of `len` same-color stones (1..=5)
#[inline]
pub fn run_weight(len: u32) -> i64 {
    match len {
        0 => 0,
        1 => 10,
        2 => 100,
        3 => 1_000,
        4 => 10_000,
        _ => 100_000,
    }
}

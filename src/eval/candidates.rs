//! Candidate move scoring
//!
//! Every empty cell is scored for the side to move with point-anchored
//! pattern tests: extend outward from the cell along each axis, counting the
//! stones of one color as if the cell held that color, and look at what
//! blocks each end. The ranking feeds both the immediate-move shortcut and
//! the minimax candidate list.

use crate::board::{Board, Cell, Pos, DIRECTIONS};
use crate::rules::{is_forbidden, scan_run, LineRun};

use super::patterns::PatternScore;

/// An empty cell with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: i64,
}

/// Runs through `pos` on all four axes, as if `color` stood there
#[inline]
fn runs_through(board: &Board, pos: Pos, color: Cell) -> [LineRun; 4] {
    DIRECTIONS.map(|(dr, dc)| scan_run(board, pos, color, dr, dc))
}

#[inline]
fn makes_five(runs: &[LineRun; 4]) -> bool {
    runs.iter().any(|run| run.count >= 5)
}

#[inline]
fn makes_live_four(runs: &[LineRun; 4]) -> bool {
    runs.iter().any(|run| run.count >= 4 && run.is_open())
}

#[inline]
fn makes_live_three(runs: &[LineRun; 4]) -> bool {
    runs.iter().any(|run| run.count >= 3 && run.is_open())
}

/// Exactly four with one end blocked by the opponent or the edge
#[inline]
fn makes_dead_four(runs: &[LineRun; 4]) -> bool {
    runs.iter().any(|run| run.count == 4 && run.open_ends() == 1)
}

/// Any stone in the 8-neighborhood
fn has_neighbor(board: &Board, pos: Pos) -> bool {
    (-1..=1).any(|dr| {
        (-1..=1).any(|dc| {
            pos.offset(dr, dc, 1)
                .is_some_and(|near| board.get(near).is_stone())
        })
    })
}

#[inline]
fn near_center(pos: Pos) -> bool {
    (6..=8).contains(&pos.row) && (6..=8).contains(&pos.col)
}

/// Score the empty cell `pos` as a move for `color`.
///
/// Attack and defense are weighed together: completing or blocking a five
/// dominates, then fours, then threes. A point that is forbidden for Black
/// is pushed far below every legal candidate.
#[must_use]
pub fn evaluate_pos(board: &Board, pos: Pos, color: Cell) -> i64 {
    debug_assert!(board.is_empty(pos), "only empty cells are candidates");

    let own = runs_through(board, pos, color);
    let opp = runs_through(board, pos, color.opponent());
    let mut score = 0;

    if makes_five(&own) {
        score += PatternScore::FIVE;
    }
    if makes_five(&opp) {
        score += PatternScore::BLOCK_FIVE;
    }
    if makes_live_four(&own) {
        score += PatternScore::OPEN_FOUR;
    }
    if makes_live_four(&opp) {
        score += PatternScore::BLOCK_OPEN_FOUR;
    }
    if makes_live_three(&opp) {
        score += PatternScore::BLOCK_OPEN_THREE;
    }
    if makes_dead_four(&opp) {
        score += PatternScore::BLOCK_DEAD_FOUR;
    }
    if makes_live_three(&own) {
        score += PatternScore::OPEN_THREE;
    }
    if makes_dead_four(&own) {
        score += PatternScore::DEAD_FOUR;
    }
    if has_neighbor(board, pos) {
        score += PatternScore::NEIGHBOR;
    }
    if near_center(pos) {
        score += PatternScore::CENTER;
    }
    if is_forbidden(board, pos, color) {
        score += PatternScore::FORBIDDEN;
    }

    score
}

/// Score every empty cell for `color`, best first.
///
/// Ties keep row-major order (the sort is stable). Nothing is cached: the
/// list is rebuilt from the current board on every call.
#[must_use]
pub fn all_valid_moves(board: &Board, color: Cell) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = board
        .empty_cells()
        .map(|pos| ScoredMove {
            pos,
            score: evaluate_pos(board, pos, color),
        })
        .collect();

    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves
}

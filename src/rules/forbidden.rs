//! Point-anchored forbidden move test for Black
//!
//! Used by the move evaluator to steer away from forbidden points without
//! mutating the board. It only looks at the four axes through the candidate,
//! counting contiguous Black runs as if the candidate already held a Black
//! stone:
//!
//! - Overline: a run longer than five through the point.
//! - Double-four: runs of exactly four with at least one open end on two or
//!   more axes.
//! - Double-three: runs of exactly three with both ends open on two or more
//!   axes.
//!
//! It is kept apart from the whole-board scan in
//! [`super::legality`]: that one judges the position after a commit, this
//! one judges a single point before it.

use crate::board::{Board, Cell, Pos, DIRECTIONS};

use super::line::{scan_run, LineRun};
use super::ForbiddenReason;

/// Classify the candidate move `pos` for `color`.
///
/// Always `None` for White. Precedence matches the whole-board check:
/// overline, then double-four, then double-three.
pub fn forbidden_at(board: &Board, pos: Pos, color: Cell) -> Option<ForbiddenReason> {
    if color != Cell::Black {
        return None;
    }

    let runs: [LineRun; 4] =
        DIRECTIONS.map(|(dr, dc)| scan_run(board, pos, Cell::Black, dr, dc));

    if runs.iter().any(|run| run.count > 5) {
        return Some(ForbiddenReason::Overline);
    }

    let fours = runs
        .iter()
        .filter(|run| run.count == 4 && run.open_ends() >= 1)
        .count();
    if fours >= 2 {
        return Some(ForbiddenReason::DoubleFour);
    }

    let open_threes = runs
        .iter()
        .filter(|run| run.count == 3 && run.is_open())
        .count();
    if open_threes >= 2 {
        return Some(ForbiddenReason::DoubleThree);
    }

    None
}

/// Check if the move is forbidden for `color`
#[inline]
pub fn is_forbidden(board: &Board, pos: Pos, color: Cell) -> bool {
    forbidden_at(board, pos, color).is_some()
}

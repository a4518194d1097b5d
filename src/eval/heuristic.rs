//! Static evaluation of a whole board
//!
//! Used at the leaves of the search. The score is always from Black's point
//! of view: positive favors Black, negative favors White.

use crate::board::{Board, Cell, DIRECTIONS};

use super::patterns::run_weight;

/// Longest run counted from one origin (origin plus four forward cells)
const MAX_RUN: i32 = 5;

/// Evaluate the board.
///
/// For every stone and every axis, the run of the stone's color starting at
/// that stone and extending forward (at most five cells) is bucketed by
/// length. Black and White totals are accumulated separately and the
/// difference is returned.
#[must_use]
pub fn evaluate_static(board: &Board) -> i64 {
    color_total(board, Cell::Black) - color_total(board, Cell::White)
}

fn color_total(board: &Board, color: Cell) -> i64 {
    let Some(stones) = board.stones(color) else {
        return 0;
    };

    let mut total = 0;
    for origin in stones.iter() {
        for &(dr, dc) in &DIRECTIONS {
            let mut len = 1u32;
            for step in 1..MAX_RUN {
                match origin.offset(dr, dc, step) {
                    Some(next) if board.get(next) == color => len += 1,
                    _ => break,
                }
            }
            total += run_weight(len);
        }
    }
    total
}

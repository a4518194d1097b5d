//! Win condition checking for Renju
//!
//! A player wins with five or more stones in a row in any of the four axes.

use tracing::error;

use crate::board::{Board, Cell, Pos, DIRECTIONS, TOTAL_CELLS};

use super::check_legal;

/// Color of the first five-in-a-row on the board.
///
/// Origins are scanned in row-major order; from each stone the run is
/// extended forward up to 4 steps along each axis.
pub fn find_five(board: &Board) -> Option<Cell> {
    for idx in 0..TOTAL_CELLS {
        let origin = Pos::from_index(idx);
        let color = board.get(origin);
        if color == Cell::Empty {
            continue;
        }

        let five = DIRECTIONS.iter().any(|&(dr, dc)| {
            (1..5).all(|step| {
                origin
                    .offset(dr, dc, step)
                    .is_some_and(|next| board.get(next) == color)
            })
        });
        if five {
            return Some(color);
        }
    }
    None
}

/// Check for a winner
///
/// Returns the color owning the first five-in-a-row. If there is none but the
/// whole board breaks a renju rule, White is returned: a Black stone that
/// should never have been accepted forfeits the game. `Board::set_cell` keeps
/// that branch unreachable in normal play, so reaching it is logged as an
/// error.
pub fn check_win(board: &Board) -> Option<Cell> {
    if let Some(color) = find_five(board) {
        return Some(color);
    }

    if let Some(reason) = check_legal(board) {
        error!(%reason, "board holds a forbidden black configuration, awarding white");
        return Some(Cell::White);
    }

    None
}

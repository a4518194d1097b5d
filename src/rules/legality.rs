//! Whole-board renju legality for Black
//!
//! These checks look at the board as a whole rather than at the last move.
//! `Board::set_cell` writes the new stone tentatively, calls [`check_legal`]
//! and rolls the stone back if a rule is broken.
//!
//! - Overline: a run of six or more Black stones.
//! - Double-four: two or more fours anywhere on the board, where a four is
//!   exactly four consecutive Black stones with at least one open end.
//! - Double-three: a Black stone sitting on open threes along two or more
//!   axes.

use crate::board::{Board, Cell, Pos, DIRECTIONS};

use super::line::{scan_run, EndState};
use super::ForbiddenReason;

/// Return the violated rule, if any.
///
/// The rules are evaluated double-three, double-four, overline, and a later
/// violation overrides an earlier one: an overline is reported even when the
/// same stones also look like fours.
pub fn check_legal(board: &Board) -> Option<ForbiddenReason> {
    if has_overline(board) {
        return Some(ForbiddenReason::Overline);
    }
    if count_fours(board) >= 2 {
        return Some(ForbiddenReason::DoubleFour);
    }
    if has_double_three(board) {
        return Some(ForbiddenReason::DoubleThree);
    }
    None
}

/// Length of the Black run starting at `start` and walking forward.
/// `start` is only counted when it is the first stone of the run.
fn run_from_start(board: &Board, start: Pos, dr: i32, dc: i32) -> Option<i32> {
    if let Some(prev) = start.offset(dr, dc, -1) {
        if board.get(prev) == Cell::Black {
            return None;
        }
    }

    let mut len = 1;
    while let Some(next) = start.offset(dr, dc, len) {
        if board.get(next) != Cell::Black {
            break;
        }
        len += 1;
    }
    Some(len)
}

/// True if any Black run is longer than five
pub fn has_overline(board: &Board) -> bool {
    board.black.iter().any(|start| {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| run_from_start(board, start, dr, dc).is_some_and(|len| len > 5))
    })
}

/// Count fours with at least one open end across the whole board.
///
/// ```text
/// _ B B B B _    one four
/// W B B B B _    one four
/// | B B B B _    one four (board edge)
/// W B B B B W    dead, not counted
/// _ B B B B B    five, not a four
/// ```
pub fn count_fours(board: &Board) -> usize {
    let mut count = 0;
    for start in board.black.iter() {
        for &(dr, dc) in &DIRECTIONS {
            if run_from_start(board, start, dr, dc) != Some(4) {
                continue;
            }
            let before = start.offset(dr, dc, -1).map(|p| board.get(p));
            let after = start.offset(dr, dc, 4).map(|p| board.get(p));
            if before == Some(Cell::Empty) || after == Some(Cell::Empty) {
                count += 1;
            }
        }
    }
    count
}

/// True if some Black stone lies on open threes along two or more axes.
///
/// An open three here is a run of exactly three Black stones through the
/// stone with an empty, on-board cell just past each end.
pub fn has_double_three(board: &Board) -> bool {
    board.black.iter().any(|origin| {
        let open_threes = DIRECTIONS
            .iter()
            .filter(|&&(dr, dc)| {
                let run = scan_run(board, origin, Cell::Black, dr, dc);
                run.count == 3 && run.back == EndState::Open && run.front == EndState::Open
            })
            .count();
        open_threes >= 2
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::new();
        for &(r, c) in black {
            board.place_stone(Pos::new(r, c), Cell::Black);
        }
        for &(r, c) in white {
            board.place_stone(Pos::new(r, c), Cell::White);
        }
        board
    }

    #[test]
    fn test_empty_board_legal() {
        assert_eq!(check_legal(&Board::new()), None);
    }

    #[test]
    fn test_overline_detected() {
        let board = board_with(&[(7, 2), (7, 3), (7, 4), (7, 5), (7, 6), (7, 7)], &[]);
        assert!(has_overline(&board));
        assert_eq!(check_legal(&board), Some(ForbiddenReason::Overline));
    }

    #[test]
    fn test_five_is_not_overline() {
        let board = board_with(&[(7, 2), (7, 3), (7, 4), (7, 5), (7, 6)], &[]);
        assert!(!has_overline(&board));
        assert_eq!(count_fours(&board), 0, "a five is not a four");
        assert_eq!(check_legal(&board), None);
    }

    #[test]
    fn test_white_overline_ignored() {
        let board = board_with(&[], &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);
        assert_eq!(check_legal(&board), None);
    }

    #[test]
    fn test_open_four_counts_once() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], &[]);
        assert_eq!(count_fours(&board), 1);
        assert_eq!(check_legal(&board), None);
    }

    #[test]
    fn test_dead_four_not_counted() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], &[(7, 2), (7, 7)]);
        assert_eq!(count_fours(&board), 0);
    }

    #[test]
    fn test_edge_four_counted() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[]);
        assert_eq!(count_fours(&board), 1);
    }

    #[test]
    fn test_double_four_detected() {
        // Horizontal four on row 7 and vertical four on column 10
        let board = board_with(
            &[
                (7, 3), (7, 4), (7, 5), (7, 6),
                (2, 10), (3, 10), (4, 10), (5, 10),
            ],
            &[(7, 2), (1, 10)],
        );
        assert_eq!(count_fours(&board), 2);
        assert_eq!(check_legal(&board), Some(ForbiddenReason::DoubleFour));
    }

    #[test]
    fn test_double_three_cross() {
        let board = board_with(&[(7, 6), (7, 7), (7, 8), (6, 7), (8, 7)], &[]);
        assert!(has_double_three(&board));
        assert_eq!(check_legal(&board), Some(ForbiddenReason::DoubleThree));
    }

    #[test]
    fn test_double_three_diagonal_cross() {
        let board = board_with(&[(6, 6), (7, 7), (8, 8), (6, 8), (8, 6)], &[]);
        assert!(has_double_three(&board));
    }

    #[test]
    fn test_single_three_legal() {
        let board = board_with(&[(7, 6), (7, 7), (7, 8)], &[]);
        assert!(!has_double_three(&board));
        assert_eq!(check_legal(&board), None);
    }

    #[test]
    fn test_blocked_three_not_open() {
        // One arm is blocked by White, so only one open three remains
        let board = board_with(&[(7, 6), (7, 7), (7, 8), (6, 7), (8, 7)], &[(7, 5)]);
        assert!(!has_double_three(&board));
    }

    #[test]
    fn test_four_three_allowed() {
        // Open four horizontally crossing an open three vertically
        let board = board_with(&[(7, 5), (7, 6), (7, 7), (7, 8), (6, 7), (8, 7)], &[]);
        assert!(!has_double_three(&board));
        assert_eq!(check_legal(&board), None);
    }

    #[test]
    fn test_white_double_three_ignored() {
        let board = board_with(&[], &[(7, 6), (7, 7), (7, 8), (6, 7), (8, 7)]);
        assert_eq!(check_legal(&board), None);
    }
}

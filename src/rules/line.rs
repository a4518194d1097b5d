//! Extension counting along one axis
//!
//! The point-anchored tests (evaluator patterns and the point forbidden
//! check) all reduce to the same question: if `color` stood at `pos`, how
//! long is the contiguous run through it along an axis, and what lies just
//! past each end of that run?

use crate::board::{Board, Cell, Pos};

/// What lies just past one end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndState {
    /// On the board and empty
    Open,
    /// Opponent stone or board edge
    Blocked,
}

/// Contiguous run through a point along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Run length, including the anchor point itself
    pub count: u32,
    /// End state in the negative direction
    pub back: EndState,
    /// End state in the positive direction
    pub front: EndState,
}

impl LineRun {
    #[inline]
    pub fn open_ends(&self) -> u8 {
        u8::from(self.back == EndState::Open) + u8::from(self.front == EndState::Open)
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_ends() == 2
    }
}

/// Count the run through `pos` along (dr, dc), treating `pos` as `color`.
///
/// The cell at `pos` is never read, so this works on the empty candidate
/// cell as well as on an occupied origin.
pub fn scan_run(board: &Board, pos: Pos, color: Cell, dr: i32, dc: i32) -> LineRun {
    let (forward, front) = extend(board, pos, color, dr, dc);
    let (backward, back) = extend(board, pos, color, -dr, -dc);

    LineRun {
        count: 1 + forward + backward,
        back,
        front,
    }
}

/// Walk away from `pos` while cells hold `color`
fn extend(board: &Board, pos: Pos, color: Cell, dr: i32, dc: i32) -> (u32, EndState) {
    let mut steps = 0u32;
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;

    loop {
        match board.get_at(r, c) {
            Some(cell) if cell == color => {
                steps += 1;
                r += dr;
                c += dc;
            }
            Some(Cell::Empty) => return (steps, EndState::Open),
            // Opponent stone or edge
            _ => return (steps, EndState::Blocked),
        }
    }
}

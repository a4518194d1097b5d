//! Board structure with renju legality on commit

use super::bitboard::Bitboard;
use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;
use crate::eval::evaluate_static;
use crate::rules::{check_legal, check_win, ForbiddenReason};

/// 15x15 game board, one bitboard per color
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.contains(pos) {
            Cell::Black
        } else if self.white.contains(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Cell contents at signed coordinates; `None` when off the board
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Cell> {
        if Pos::is_valid(row, col) {
            Some(self.get(Pos::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.occupied().contains(pos)
    }

    /// Place a stone without any rule checks.
    /// Use `set_cell` for game moves; this is for search scratch work and setup.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Cell) {
        self.remove_stone(pos);
        match stone {
            Cell::Black => {
                self.black.insert(pos);
            },
            Cell::White => {
                self.white.insert(pos);
            },
            Cell::Empty => {}
        }
    }

    /// Reset a cell to Empty
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.remove(pos);
        self.white.remove(pos);
    }

    /// Commit a stone under the renju rules.
    ///
    /// Fails with `Occupied` if the cell already holds a stone. Otherwise the
    /// stone is written tentatively and the whole board is re-checked; an
    /// illegal result rolls the cell back to Empty and reports the reason.
    /// The board is only changed on success.
    pub fn set_cell(&mut self, pos: Pos, stone: Cell) -> Result<(), BoardError> {
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied { pos });
        }

        self.place_stone(pos, stone);
        if let Some(reason) = self.check_legal() {
            self.remove_stone(pos);
            return Err(BoardError::Illegal(reason));
        }

        Ok(())
    }

    /// Winner of the current position, see [`check_win`]
    #[inline]
    pub fn check_win(&self) -> Option<Cell> {
        check_win(self)
    }

    /// First violated renju rule on the whole board, see [`check_legal`]
    #[inline]
    pub fn check_legal(&self) -> Option<ForbiddenReason> {
        check_legal(self)
    }

    /// Static score, positive favors Black, see [`evaluate_static`]
    #[inline]
    pub fn evaluate_static(&self) -> i64 {
        evaluate_static(self)
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Cell) -> Option<&Bitboard> {
        match stone {
            Cell::Black => Some(&self.black),
            Cell::White => Some(&self.white),
            Cell::Empty => None,
        }
    }

    /// Cells holding a stone of either color
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.occupied().len()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> {
        self.occupied().complement().iter()
    }

    /// Rows of cell codes (0 = Empty, 1 = Black, 2 = White)
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..BOARD_SIZE as u8)
            .map(|row| {
                (0..BOARD_SIZE as u8)
                    .map(|col| self.get(Pos::new(row, col)).code())
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "{:>2} ", row)?;
            for col in 0..BOARD_SIZE as u8 {
                let ch = match self.get(Pos::new(row, col)) {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

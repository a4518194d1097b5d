//! Saved game format
//!
//! ```json
//! {
//!   "board": [[0, 0, ...], ...],
//!   "history": [{ "playerColor": 1, "position": [7, 7], "id": 0 }],
//!   "whoseTurn": 2,
//!   "elapsedTime": 42
//! }
//! ```
//!
//! Cells and colors use 0 = empty, 1 = black, 2 = white. A payload is
//! validated in full before a session adopts any of it.

use serde::{Deserialize, Serialize};

use crate::board::{Bitboard, Board, Cell, Pos, BOARD_SIZE};
use crate::error::LoadError;

use super::session::Move;

/// Serialized session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub board: Vec<Vec<u8>>,
    pub history: Vec<SavedMove>,
    pub whose_turn: u8,
    pub elapsed_time: u64,
}

/// One history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMove {
    pub player_color: u8,
    /// `[row, col]`
    pub position: [usize; 2],
    pub id: u32,
}

impl From<&Move> for SavedMove {
    fn from(mv: &Move) -> Self {
        Self {
            player_color: mv.color.code(),
            position: [mv.pos.row as usize, mv.pos.col as usize],
            id: mv.id,
        }
    }
}

/// Validated state, ready to be swapped into a session
#[derive(Debug)]
pub(crate) struct RestoredGame {
    pub board: Board,
    pub history: Vec<Move>,
    pub turn: Cell,
    pub elapsed: u64,
    pub next_id: u32,
}

impl SavedGame {
    pub fn from_json(data: &str) -> Result<Self, LoadError> {
        serde_json::from_str(data).map_err(|e| LoadError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Check every field and rebuild the board and history.
    pub(crate) fn restore(&self) -> Result<RestoredGame, LoadError> {
        let board = self.restore_board()?;

        let turn = stone_from_code(self.whose_turn).ok_or(LoadError::Turn {
            value: self.whose_turn,
        })?;

        let mut history = Vec::with_capacity(self.history.len());
        let mut seen = Bitboard::new();
        let mut last_id: Option<u32> = None;

        for (index, saved) in self.history.iter().enumerate() {
            let color = stone_from_code(saved.player_color).ok_or(LoadError::MoveColor {
                index,
                value: saved.player_color,
            })?;

            let [row, col] = saved.position;
            let pos = Pos::try_new(row, col).ok_or(LoadError::MovePosition { index, row, col })?;

            if board.get(pos) != color {
                return Err(LoadError::MoveMismatch { index, row, col });
            }
            if !seen.insert(pos) {
                return Err(LoadError::DuplicatePosition { index, row, col });
            }

            if last_id.is_some_and(|last| saved.id <= last) {
                return Err(LoadError::NonIncreasingId { index, id: saved.id });
            }
            last_id = Some(saved.id);

            history.push(Move {
                color,
                pos,
                id: saved.id,
            });
        }

        let stones = board.stone_count();
        if history.len() != stones {
            return Err(LoadError::StoneCountMismatch {
                history: history.len(),
                stones,
            });
        }

        Ok(RestoredGame {
            board,
            history,
            turn,
            elapsed: self.elapsed_time,
            next_id: last_id.map_or(0, |id| id.saturating_add(1)),
        })
    }

    fn restore_board(&self) -> Result<Board, LoadError> {
        if self.board.len() != BOARD_SIZE {
            return Err(LoadError::BoardRows {
                found: self.board.len(),
            });
        }

        let mut board = Board::new();
        for (row, cells) in self.board.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(LoadError::BoardCols {
                    row,
                    found: cells.len(),
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                let cell = Cell::from_code(value).ok_or(LoadError::CellValue { row, col, value })?;
                if cell.is_stone() {
                    board.place_stone(Pos::new(row as u8, col as u8), cell);
                }
            }
        }
        Ok(board)
    }
}

fn stone_from_code(code: u8) -> Option<Cell> {
    Cell::from_code(code).filter(|cell| cell.is_stone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_rows() -> Vec<Vec<u8>> {
        vec![vec![0; BOARD_SIZE]; BOARD_SIZE]
    }

    fn two_move_game() -> SavedGame {
        let mut board = empty_rows();
        board[7][7] = 1;
        board[7][8] = 2;
        SavedGame {
            board,
            history: vec![
                SavedMove {
                    player_color: 1,
                    position: [7, 7],
                    id: 0,
                },
                SavedMove {
                    player_color: 2,
                    position: [7, 8],
                    id: 3,
                },
            ],
            whose_turn: 1,
            elapsed_time: 12,
        }
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let json = two_move_game().to_json().unwrap();
        assert!(json.contains("\"whoseTurn\":1"));
        assert!(json.contains("\"elapsedTime\":12"));
        assert!(json.contains("\"playerColor\":2"));
        assert!(json.contains("\"position\":[7,8]"));
        assert_eq!(SavedGame::from_json(&json).unwrap(), two_move_game());
    }

    #[test]
    fn test_restore_valid() {
        let restored = two_move_game().restore().unwrap();
        assert_eq!(restored.board.get(Pos::new(7, 7)), Cell::Black);
        assert_eq!(restored.board.get(Pos::new(7, 8)), Cell::White);
        assert_eq!(restored.history.len(), 2);
        assert_eq!(restored.turn, Cell::Black);
        assert_eq!(restored.elapsed, 12);
        assert_eq!(restored.next_id, 4);
    }

    #[test]
    fn test_restore_empty_game() {
        let saved = SavedGame {
            board: empty_rows(),
            history: Vec::new(),
            whose_turn: 1,
            elapsed_time: 0,
        };
        let restored = saved.restore().unwrap();
        assert!(restored.board.is_board_empty());
        assert_eq!(restored.next_id, 0);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SavedGame::from_json("{\"board\": 3"),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            SavedGame::from_json("{\"board\": []}"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_board_shape() {
        let mut saved = two_move_game();
        saved.board.pop();
        assert_eq!(saved.restore().unwrap_err(), LoadError::BoardRows { found: 14 });

        let mut saved = two_move_game();
        saved.board[3].push(0);
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::BoardCols { row: 3, found: 16 }
        );

        let mut saved = two_move_game();
        saved.board[2][5] = 3;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::CellValue {
                row: 2,
                col: 5,
                value: 3
            }
        );
    }

    #[test]
    fn test_turn_value() {
        let mut saved = two_move_game();
        saved.whose_turn = 0;
        assert_eq!(saved.restore().unwrap_err(), LoadError::Turn { value: 0 });
    }

    #[test]
    fn test_history_checks() {
        let mut saved = two_move_game();
        saved.history[1].player_color = 1;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::MoveMismatch {
                index: 1,
                row: 7,
                col: 8
            }
        );

        let mut saved = two_move_game();
        saved.history[0].player_color = 0;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::MoveColor { index: 0, value: 0 }
        );

        let mut saved = two_move_game();
        saved.history[0].position = [15, 0];
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::MovePosition {
                index: 0,
                row: 15,
                col: 0
            }
        );

        let mut saved = two_move_game();
        saved.history[1].id = 0;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::NonIncreasingId { index: 1, id: 0 }
        );

        let mut saved = two_move_game();
        saved.history[1] = saved.history[0];
        saved.history[1].id = 1;
        saved.board[7][8] = 0;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::DuplicatePosition {
                index: 1,
                row: 7,
                col: 7
            }
        );
    }

    #[test]
    fn test_stone_count_mismatch() {
        let mut saved = two_move_game();
        saved.board[0][0] = 2;
        assert_eq!(
            saved.restore().unwrap_err(),
            LoadError::StoneCountMismatch {
                history: 2,
                stones: 3
            }
        );
    }
}

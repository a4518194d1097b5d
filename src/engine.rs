//! AI engine facade
//!
//! Wraps the searcher with timing and logging so callers get one
//! [`MoveResult`] per decision. The search itself is a fixed, small
//! computation: at most `MAX_MOVES` candidates, each answered by at most
//! `MAX_MOVES` replies, one ply deep.
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, Board, Cell, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Cell::Black);
//!
//! let result = engine.get_move_with_stats(&mut board, Cell::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Cell, Pos};
use crate::search::{SearchResult, Searcher};

pub use crate::search::SearchType;

/// Result of a move search with statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Score the move was chosen on (Black-positive for minimax results)
    pub score: i64,
    /// Path that produced the move
    pub search_type: SearchType,
    /// Wall time in milliseconds
    pub time_ms: u64,
    /// Minimax nodes visited
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: result.search_type,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Move selection for either color.
///
/// The engine holds no position state between calls; every decision is made
/// from the board passed in.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
        }
    }

    /// Best move for `color`, or `None` if no empty cell remains.
    ///
    /// `board` is borrowed as scratch space and is unchanged on return.
    pub fn get_move(&mut self, board: &mut Board, color: Cell) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Best move for `color` with timing and node statistics.
    pub fn get_move_with_stats(&mut self, board: &mut Board, color: Cell) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.get_best_move(board, color);
        let time_ms = start.elapsed().as_millis() as u64;

        let result = MoveResult::from_search(result, time_ms);
        debug!(
            %color,
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            time_ms = result.time_ms,
            nodes = result.nodes,
            "AI decision"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        let result = engine.get_move_with_stats(&mut board, Cell::Black);

        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Opening);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Cell::Black);
        }
        board.place_stone(Pos::new(10, 0), Cell::White);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board, Cell::Black);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::Immediate);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        for i in 0..4 {
            board.place_stone(Pos::new(9, i), Cell::White);
        }
        board.place_stone(Pos::new(10, 5), Cell::Black);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board, Cell::Black);

        assert_eq!(result.best_move, Some(Pos::new(9, 4)));
        assert_eq!(result.search_type, SearchType::Immediate);
    }

    #[test]
    fn test_engine_minimax_stats() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Cell::Black);
        board.place_stone(Pos::new(8, 8), Cell::White);
        board.place_stone(Pos::new(7, 8), Cell::Black);
        board.place_stone(Pos::new(6, 7), Cell::White);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board, Cell::Black);

        assert_eq!(result.search_type, SearchType::Minimax);
        // One root node per candidate plus at most MAX_MOVES leaves each
        assert!(result.nodes >= 10 && result.nodes <= 110, "nodes = {}", result.nodes);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Cell::Black);

        let result1 = engine.get_move(&mut board, Cell::White);
        let result2 = engine.get_move(&mut board, Cell::White);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = AIEngine::new();
        let mut board = Board::new();

        let mut color = Cell::Black;
        for _ in 0..6 {
            let pos = engine.get_move(&mut board, color).unwrap();
            assert!(board.is_empty(pos));
            board.set_cell(pos, color).unwrap();
            color = color.opponent();
        }
        assert_eq!(board.stone_count(), 6);
    }
}

//! Fixed-depth minimax with alpha-beta pruning
//!
//! The search is shallow: the AI considers its best
//! `MAX_MOVES` candidates, answers each with the opponent's best `MAX_MOVES`
//! replies, and scores the resulting positions with the static evaluation.
//! Scores are always from Black's point of view, so Black maximizes and
//! White minimizes.
//!
//! The caller's board doubles as scratch space. Every trial stone goes
//! through a `Scratch` guard, which removes it again when dropped, so the board is
//! back in the caller's state on every exit path, pruning cutoffs included.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Cell, Pos};
//! use renju::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Cell::Black);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.get_best_move(&mut board, Cell::White);
//! assert!(result.best_move.is_some());
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, Pos, CENTER};
use crate::eval::{all_valid_moves, PatternScore};

/// Candidates tried per node
pub const MAX_MOVES: usize = 10;

/// Plies searched below each root candidate
pub const MAX_DEPTH: u8 = 1;

/// Which path produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center stone without searching
    Opening,
    /// Top candidate scored as a win or forced block
    Immediate,
    /// Regular minimax result
    Minimax,
}

/// Search result with the score the chosen move led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Minimax score for Minimax results, candidate score otherwise
    pub score: i64,
    pub search_type: SearchType,
    /// Minimax nodes visited
    pub nodes: u64,
}

/// A stone placed for the lifetime of the guard
struct Scratch<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Scratch<'a> {
    fn place(board: &'a mut Board, pos: Pos, color: Cell) -> Self {
        debug_assert!(board.is_empty(pos));
        board.place_stone(pos, color);
        Self { board, pos }
    }
}

impl Deref for Scratch<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Scratch<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

/// Move selector for one side
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Pick a move for `ai_color`.
    ///
    /// The top candidate is played directly when it scores at least
    /// [`PatternScore::IMMEDIATE`]. Otherwise each of the top `MAX_MOVES`
    /// candidates is tried with a fresh (-inf, +inf) window and the first
    /// candidate reaching the best score for `ai_color` wins.
    ///
    /// `board` is used as scratch space and is unchanged on return.
    pub fn get_best_move(&mut self, board: &mut Board, ai_color: Cell) -> SearchResult {
        self.nodes = 0;

        if board.is_board_empty() {
            return SearchResult {
                best_move: Some(CENTER),
                score: 0,
                search_type: SearchType::Opening,
                nodes: 0,
            };
        }

        let candidates = all_valid_moves(board, ai_color);
        let Some(top) = candidates.first().copied() else {
            return SearchResult {
                best_move: None,
                score: 0,
                search_type: SearchType::Minimax,
                nodes: 0,
            };
        };

        if top.score >= PatternScore::IMMEDIATE {
            return SearchResult {
                best_move: Some(top.pos),
                score: top.score,
                search_type: SearchType::Immediate,
                nodes: 0,
            };
        }

        let reply_color = ai_color.opponent();
        let mut best: Option<(Pos, i64)> = None;

        for candidate in candidates.iter().take(MAX_MOVES) {
            let score = {
                let mut scratch = Scratch::place(board, candidate.pos, ai_color);
                self.minimax(&mut scratch, MAX_DEPTH, i64::MIN, i64::MAX, reply_color)
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) if ai_color == Cell::Black => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((candidate.pos, score));
            }
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            search_type: SearchType::Minimax,
            nodes: self.nodes,
        }
    }

    /// Minimax value of the board with `color` to move.
    ///
    /// Returns the static evaluation at depth 0 or when `color` has no empty
    /// cell to play. Black maximizes and raises `alpha`, White minimizes and
    /// lowers `beta`; the candidate loop stops once `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        color: Cell,
    ) -> i64 {
        self.nodes += 1;

        if depth == 0 {
            return board.evaluate_static();
        }

        let moves = all_valid_moves(board, color);
        if moves.is_empty() {
            return board.evaluate_static();
        }

        let next = color.opponent();

        if color == Cell::Black {
            let mut best = i64::MIN;
            for mv in moves.iter().take(MAX_MOVES) {
                let score = {
                    let mut scratch = Scratch::place(board, mv.pos, color);
                    self.minimax(&mut scratch, depth - 1, alpha, beta, next)
                };
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i64::MAX;
            for mv in moves.iter().take(MAX_MOVES) {
                let score = {
                    let mut scratch = Scratch::place(board, mv.pos, color);
                    self.minimax(&mut scratch, depth - 1, alpha, beta, next)
                };
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

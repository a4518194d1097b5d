//! Search module for the Renju AI
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning over ranked candidates
//! - The immediate-move shortcut for wins and forced blocks

pub mod minimax;

pub use minimax::{SearchResult, SearchType, Searcher, MAX_DEPTH, MAX_MOVES};

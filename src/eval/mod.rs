//! Evaluation module for the Renju AI
//!
//! Contains:
//! - Weight tables for patterns and runs
//! - Static whole-board evaluation used at search leaves
//! - Candidate scoring and ranking of empty cells

pub mod candidates;
pub mod heuristic;
pub mod patterns;

pub use candidates::{all_valid_moves, evaluate_pos, ScoredMove};
pub use heuristic::evaluate_static;
pub use patterns::{run_weight, PatternScore};

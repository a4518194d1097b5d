//! Error types for the renju engine
//!
//! Every error here is local and recoverable: the board or session is left
//! exactly as it was before the failing call.

use thiserror::Error;

use crate::board::Pos;
use crate::rules::ForbiddenReason;

/// Errors from committing a stone to the board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Target cell already holds a stone
    #[error("cell {pos} is already occupied")]
    Occupied { pos: Pos },

    /// Move breaks a renju rule; the board was rolled back
    #[error("illegal move: {0}")]
    Illegal(ForbiddenReason),
}

/// Errors from validating a saved game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("malformed saved game: {0}")]
    Json(String),

    #[error("board must have 15 rows, found {found}")]
    BoardRows { found: usize },

    #[error("board row {row} must have 15 cells, found {found}")]
    BoardCols { row: usize, found: usize },

    #[error("invalid cell value {value} at ({row}, {col})")]
    CellValue { row: usize, col: usize, value: u8 },

    #[error("invalid turn value {value}, expected 1 or 2")]
    Turn { value: u8 },

    #[error("history entry {index} has invalid color {value}")]
    MoveColor { index: usize, value: u8 },

    #[error("history entry {index} is off the board at ({row}, {col})")]
    MovePosition { index: usize, row: usize, col: usize },

    #[error("history entry {index} does not match the board at ({row}, {col})")]
    MoveMismatch { index: usize, row: usize, col: usize },

    #[error("history entry {index} repeats position ({row}, {col})")]
    DuplicatePosition { index: usize, row: usize, col: usize },

    #[error("history entry {index} has id {id}, which does not increase")]
    NonIncreasingId { index: usize, id: u32 },

    #[error("history has {history} moves but the board holds {stones} stones")]
    StoneCountMismatch { history: usize, stones: usize },
}

/// Errors from session operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("waiting for the AI to move")]
    Waiting,

    #[error("the game is already over")]
    GameOver,

    #[error("no moves to undo")]
    NoHistory,

    #[error("undo is not allowed")]
    RegretNotAllowed,

    #[error("could not load saved game: {0}")]
    LoadParse(#[from] LoadError),

    #[error("could not save game: {0}")]
    Save(String),
}

/// Errors from reading session configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed configuration: {0}")]
    Parse(String),

    #[error("invalid value {value:?} for human_color, expected \"black\" or \"white\"")]
    HumanColor { value: String },

    #[error("could not serialize configuration: {0}")]
    Serialize(String),
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

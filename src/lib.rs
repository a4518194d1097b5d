//! Renju engine with a minimax AI
//!
//! A Gomoku engine playing standard renju on a 15x15 board:
//! - Five in a row wins
//! - Black may not make an overline (six or more)
//! - Black may not make a double four or a double three
//! - White is unrestricted
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection and forbidden-move checks
//! - [`eval`]: Static evaluation and candidate scoring
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI facade with timing statistics
//! - [`session`]: Turn sequencing, undo, configuration and saved games
//!
//! # Quick Start
//!
//! ```
//! use renju::{Cell, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default());
//!
//! // Human plays Black at the center, the AI answers as White
//! let outcome = session.place(7, 7).unwrap();
//! if let Some(reply) = outcome.reply {
//!     println!("AI plays at {}", reply.pos);
//! }
//! assert_eq!(session.turn(), Cell::Black);
//! ```
//!
//! The library never installs a `tracing` subscriber; the host decides where
//! logs go.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Pos, BOARD_SIZE, CENTER};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, LoadError, SessionError, SessionResult};
pub use rules::ForbiddenReason;
pub use session::{GameStore, MemoryStore, Move, PlaceOutcome, SavedGame, Session, SessionConfig};

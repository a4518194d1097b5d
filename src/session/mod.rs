//! Game session orchestration
//!
//! Contains:
//! - The session that sequences human and AI turns
//! - TOML configuration
//! - The JSON saved-game format and its validation
//! - The persistence port

pub mod config;
pub mod saved;
#[allow(clippy::module_inception)]
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use saved::{SavedGame, SavedMove};
pub use session::{Move, PlaceOutcome, Session};
pub use store::{GameStore, MemoryStore};

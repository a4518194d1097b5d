//! Persistence port for saved games
//!
//! The session serializes itself to a JSON string and hands it to a
//! [`GameStore`]. Where that string goes (a file, browser storage, a
//! database row) is up to the host.

/// Holds at most one saved game
pub trait GameStore {
    /// Replace the stored game
    fn write(&mut self, data: String);

    /// The stored game, if any
    fn read(&self) -> Option<String>;
}

/// In-memory store, useful for tests and autosave slots
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the stored game
    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

impl GameStore for MemoryStore {
    fn write(&mut self, data: String) {
        self.data = Some(data);
    }

    fn read(&self) -> Option<String> {
        self.data.clone()
    }
}

//! Session configuration
//!
//! Stored as TOML by whatever persistence layer hosts the session:
//!
//! ```toml
//! enable_ai = true
//! human_color = "white"
//! allow_undo = false
//! ```
//!
//! Missing keys take their defaults and unknown keys are ignored.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Cell;
use crate::error::ConfigError;

/// Options that shape a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// The AI answers every human move
    pub enable_ai: bool,
    /// Color the human plays when the AI is enabled
    pub human_color: Cell,
    /// `undo` is permitted
    pub allow_undo: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enable_ai: true,
            human_color: Cell::Black,
            allow_undo: true,
        }
    }
}

/// On-disk shape, with the color kept as text
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
struct RawConfig {
    enable_ai: bool,
    human_color: String,
    allow_undo: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        SessionConfig::default().into()
    }
}

impl From<SessionConfig> for RawConfig {
    fn from(config: SessionConfig) -> Self {
        Self {
            enable_ai: config.enable_ai,
            human_color: config.human_color.to_string(),
            allow_undo: config.allow_undo,
        }
    }
}

impl TryFrom<RawConfig> for SessionConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, ConfigError> {
        let human_color = match raw.human_color.as_str() {
            "black" => Cell::Black,
            "white" => Cell::White,
            _ => {
                return Err(ConfigError::HumanColor {
                    value: raw.human_color,
                })
            }
        };
        Ok(Self {
            enable_ai: raw.enable_ai,
            human_color,
            allow_undo: raw.allow_undo,
        })
    }
}

impl SessionConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        raw.try_into()
    }

    /// Parse a TOML document, falling back to the defaults if it is
    /// malformed or missing.
    #[must_use]
    pub fn from_toml_or_default(text: Option<&str>) -> Self {
        let Some(text) = text else {
            warn!("configuration not found, using defaults");
            return Self::default();
        };
        match Self::from_toml_str(text) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "using default configuration");
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(&RawConfig::from(*self)).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Color the AI plays
    #[inline]
    pub fn ai_color(&self) -> Cell {
        self.human_color.opponent()
    }

    /// The AI opens the game with a center stone
    #[inline]
    pub fn ai_moves_first(&self) -> bool {
        self.enable_ai && self.human_color == Cell::White
    }
}

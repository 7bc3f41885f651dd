//! Structured error kinds for the desk and its persistence layer.
//!
//! Failure kinds (lookup failed, storage failed, invalid input) stay
//! programmatic so callers can decide to retry, surface, or fall back
//! instead of every failure collapsing into a log line.

use thiserror::Error;

use crate::character::CharacterId;
use crate::desk::PanelId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage failure for key '{key}': {reason}")]
    Storage { key: String, reason: String },

    #[error("no platform data directory available")]
    NoDataDir,

    #[error("unknown panel: {0}")]
    UnknownPanel(PanelId),

    #[error("unknown character: {0}")]
    UnknownCharacter(CharacterId),

    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },
}

impl Error {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

//! Strict error handling with the EngineError enum
//!
//! All variants are serializable so they can cross the IPC boundary to the
//! presentation surface unchanged.

use serde::Serialize;
use thiserror::Error;

/// Engine operation errors.
///
/// Empty clipboard reads, adjacent duplicates and deletes of unknown ids are
/// policy no-ops, not errors; they never show up here. What does is the
/// storage-failure signal (write-through persistence failed; in-memory state
/// is already updated) and clipboard access failures.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum EngineError {
    /// Persistence read/write failed. The running session stays usable but
    /// durability is not guaranteed until the next successful write.
    #[error("Storage failure: {0}")]
    Storage(String),

    /// Clipboard read/write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid input or parameter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Storage(format!("JSON error: {}", err))
    }
}

/// Helper type alias for engine results
pub type EngineResult<T> = Result<T, EngineError>;

//! Clipboard module
//!
//! Provides clipboard history tracking and monitoring functionality.
//!
//! - `history`: bounded, adjacent-deduplicated history with write-through
//!   persistence
//! - `monitor`: adaptive-interval poll loop feeding the history
//! - `state`: the shared last-observed clipboard shadow
//! - `filter`: secret-pattern screening applied before anything is recorded

pub mod filter;
pub mod history;
pub mod monitor;
pub mod state;

pub use history::HistoryStore;
pub use monitor::{ClipboardPoller, PollerMode, ACTIVE_POLL_INTERVAL_MS, IDLE_POLL_INTERVAL_MS};
pub use state::ObservedClipboard;

use crate::shared::errors::EngineResult;

/// Read/write access to the OS clipboard.
///
/// The engine treats the clipboard as read-mostly: the poller reads on every
/// tick, and the only writes happen on explicit paste commands.
pub trait Clipboard: Send + Sync {
    fn read_text(&self) -> EngineResult<String>;
    fn write_text(&self, text: &str) -> EngineResult<()>;
}

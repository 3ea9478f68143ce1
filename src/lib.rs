//! Clipboard history engine.
//!
//! Watches the OS clipboard on an adaptive cadence, records a bounded,
//! adjacent-deduplicated history of text snapshots, persists the whole state
//! as a single write-through JSON record, and exposes a typed message
//! protocol ([`shared::events`]) to whatever presentation surface embeds it.
//!
//! Window chrome, tray menus and shortcut registration live outside this
//! crate; they drive the engine through [`core::engine::Engine`] and the
//! command/push channels it hands out.

pub mod core;
pub mod shared;
pub mod system;

pub use crate::core::clipboard::{
    Clipboard, ClipboardPoller, HistoryStore, ObservedClipboard, PollerMode,
};
pub use crate::core::engine::{Engine, EngineHandles};
pub use crate::core::sync::{SyncChannel, SyncEndpoints};
pub use crate::core::theme::ThemeState;
pub use crate::shared::errors::{EngineError, EngineResult};
pub use crate::shared::events::{Command, PushEvent, WindowSignal};
pub use crate::shared::settings::{JsonStore, MemoryStore, PersistHandle, PersistedState, Storage};
pub use crate::shared::types::{HistoryItem, Theme};
pub use crate::system::clipboard::SystemClipboard;

//! Message protocol between the engine and the presentation surface.
//!
//! Both directions are tagged serde enums so either side can be type-checked
//! independently; ts-rs exports the shapes for the frontend.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::types::{HistoryItem, Theme};

/// Pushes, engine -> presentation. Fire-and-forget.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export, export_to = "bindings/")]
pub enum PushEvent {
    /// Full current state. Sent when the surface becomes visible and after
    /// any history-mutating command.
    #[serde(rename = "snapshot")]
    Snapshot {
        history: Vec<HistoryItem>,
        theme: Theme,
    },

    /// Sent after a theme toggle.
    #[serde(rename = "themeChanged")]
    ThemeChanged(Theme),
}

/// Commands, presentation -> engine. The engine answers asynchronously via a
/// push rather than a direct reply.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "command", content = "payload")]
#[ts(export, export_to = "bindings/")]
pub enum Command {
    #[serde(rename = "requestPaste")]
    RequestPaste { content: String },

    /// Followed immediately by a fresh snapshot push.
    #[serde(rename = "requestDelete")]
    RequestDelete { id: String },

    #[serde(rename = "requestThemeToggle")]
    RequestThemeToggle,

    /// Routed to the external window-visibility collaborator, not the store.
    #[serde(rename = "requestClose")]
    RequestClose,
}

/// Signals for the external window controller (hide after paste/close).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSignal {
    Hide,
}

//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

use crate::shared::events::{Command, PushEvent};
use crate::shared::types::{HistoryItem, Theme};
use ts_rs::TS;

#[test]
fn export_bindings() {
    // Writes the TypeScript declarations the presentation surface compiles
    // against. The bindings land under bindings/.
    Theme::export().expect("Failed to export Theme");
    HistoryItem::export().expect("Failed to export HistoryItem");
    PushEvent::export().expect("Failed to export PushEvent");
    Command::export().expect("Failed to export Command");
}

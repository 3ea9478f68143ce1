//! System clipboard adapter.

use cli_clipboard::{ClipboardContext, ClipboardProvider};

use crate::core::clipboard::Clipboard;
use crate::shared::errors::{EngineError, EngineResult};

/// OS clipboard behind the [`Clipboard`] capability trait.
///
/// A fresh context is created per operation; the platform contexts are not
/// shareable across threads and the poll cadence is slow enough that setup
/// cost does not matter.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&self) -> EngineResult<String> {
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.get_contents())
            .map_err(|e| EngineError::Clipboard(e.to_string()))
    }

    fn write_text(&self, text: &str) -> EngineResult<()> {
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(text.to_string()))
            .map_err(|e| EngineError::Clipboard(e.to_string()))
    }
}

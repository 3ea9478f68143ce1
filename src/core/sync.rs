//! The message-passing boundary between the engine and the presentation
//! surface.
//!
//! Commands come in over an unbounded channel and are handled to completion
//! one at a time; answers go back out as pushes ([`PushEvent`]) rather than
//! direct replies. Window-hide requests are routed to a separate channel for
//! the external window-visibility collaborator.

use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::clipboard::{Clipboard, HistoryStore, ObservedClipboard};
use super::theme::ThemeState;
use crate::shared::events::{Command, PushEvent, WindowSignal};

/// Receiving ends handed to the embedding surface.
pub struct SyncEndpoints {
    /// Pushes for the presentation surface.
    pub pushes: UnboundedReceiver<PushEvent>,
    /// Hide requests for the window controller.
    pub window: UnboundedReceiver<WindowSignal>,
}

#[derive(Clone)]
pub struct SyncChannel {
    store: HistoryStore,
    theme: ThemeState,
    clipboard: Arc<dyn Clipboard>,
    observed: ObservedClipboard,
    push_tx: UnboundedSender<PushEvent>,
    window_tx: UnboundedSender<WindowSignal>,
}

impl SyncChannel {
    pub fn new(
        store: HistoryStore,
        theme: ThemeState,
        clipboard: Arc<dyn Clipboard>,
        observed: ObservedClipboard,
    ) -> (Self, SyncEndpoints) {
        let (push_tx, pushes) = unbounded_channel();
        let (window_tx, window) = unbounded_channel();
        (
            Self {
                store,
                theme,
                clipboard,
                observed,
                push_tx,
                window_tx,
            },
            SyncEndpoints { pushes, window },
        )
    }

    /// Push the full current state. Called after mutating commands and by
    /// the visibility controller whenever the surface is shown.
    pub fn push_snapshot(&self) {
        let event = PushEvent::Snapshot {
            history: self.store.list(),
            theme: self.theme.get(),
        };
        if self.push_tx.send(event).is_err() {
            eprintln!("[SyncChannel] Presentation surface gone, dropping snapshot");
        }
    }

    /// Handle one command to completion. Commands are fire-and-forget; all
    /// failures are logged, never returned to the sender.
    pub fn handle(&self, command: Command) {
        match command {
            Command::RequestPaste { content } => self.paste(&content),
            Command::RequestDelete { id } => self.delete(&id),
            Command::RequestThemeToggle => self.toggle_theme(),
            Command::RequestClose => {
                let _ = self.window_tx.send(WindowSignal::Hide);
            }
        }
    }

    /// Write an item's content back to the clipboard. Updates the poller's
    /// last-observed shadow with the same value so the write is not
    /// re-recorded, then asks the window controller to hide the surface.
    fn paste(&self, content: &str) {
        if let Err(e) = self.clipboard.write_text(content) {
            eprintln!("[SyncChannel] Paste failed: {}", e);
            return;
        }
        self.observed.note(content);
        let _ = self.window_tx.send(WindowSignal::Hide);
    }

    /// Delete is followed immediately by a fresh snapshot push.
    fn delete(&self, id: &str) {
        if let Err(e) = self.store.delete(id) {
            eprintln!("[SyncChannel] Storage failure on delete: {}", e);
        }
        self.push_snapshot();
    }

    fn toggle_theme(&self) {
        let theme = match self.theme.toggle() {
            Ok(theme) => theme,
            Err(e) => {
                // In-memory value flipped; durability caught up on the next
                // successful write.
                eprintln!("[SyncChannel] Storage failure on theme toggle: {}", e);
                self.theme.get()
            }
        };
        let _ = self.push_tx.send(PushEvent::ThemeChanged(theme));
    }

    /// Run the command loop until the sender side is dropped.
    pub fn spawn(self, mut commands: UnboundedReceiver<Command>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(command) = commands.recv().await {
                self.handle(command);
            }
            println!("[SyncChannel] Command channel closed");
        })
    }
}

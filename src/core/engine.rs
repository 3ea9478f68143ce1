//! Engine wiring.
//!
//! Builds the store, theme state, poller and sync channel once at process
//! start with injected clipboard and storage capabilities, and hands the
//! embedding surface the channel endpoints it needs. No ambient globals.

use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::clipboard::{Clipboard, ClipboardPoller, HistoryStore};
use super::sync::{SyncChannel, SyncEndpoints};
use super::theme::ThemeState;
use crate::shared::events::{Command, PushEvent, WindowSignal};
use crate::shared::settings::{PersistHandle, Storage};
use crate::shared::types::HistoryItem;

/// Everything the embedding surface holds on to.
pub struct EngineHandles {
    /// Send presentation commands here.
    pub commands: UnboundedSender<Command>,
    /// Pushes for the presentation surface.
    pub pushes: UnboundedReceiver<PushEvent>,
    /// Hide requests for the window controller.
    pub window: UnboundedReceiver<WindowSignal>,
    /// Every newly recorded history item, for a notification collaborator.
    pub recorded: UnboundedReceiver<HistoryItem>,
}

pub struct Engine {
    store: HistoryStore,
    theme: ThemeState,
    poller: ClipboardPoller,
    sync: SyncChannel,
    command_rx: Option<UnboundedReceiver<Command>>,
}

impl Engine {
    /// Construct the engine over injected capabilities. State is loaded from
    /// `storage` once, here; every later mutation writes through.
    pub fn new(clipboard: Arc<dyn Clipboard>, storage: Arc<dyn Storage>) -> (Self, EngineHandles) {
        let persist = PersistHandle::load(storage);

        let (recorded_tx, recorded) = unbounded_channel();
        let store = HistoryStore::new(persist.clone()).with_notifier(recorded_tx);
        let theme = ThemeState::new(persist);

        let poller = ClipboardPoller::new(Arc::clone(&clipboard), store.clone());
        let (sync, SyncEndpoints { pushes, window }) = SyncChannel::new(
            store.clone(),
            theme.clone(),
            clipboard,
            poller.observed(),
        );

        let (commands, command_rx) = unbounded_channel();

        (
            Self {
                store,
                theme,
                poller,
                sync,
                command_rx: Some(command_rx),
            },
            EngineHandles {
                commands,
                pushes,
                window,
                recorded,
            },
        )
    }

    /// Start the poll loop and the command loop.
    pub fn start(&mut self) -> Vec<JoinHandle<()>> {
        let mut tasks = vec![self.poller.spawn()];
        if let Some(command_rx) = self.command_rx.take() {
            tasks.push(self.sync.clone().spawn(command_rx));
        }
        tasks
    }

    /// Visibility signal from the external window controller. Becoming
    /// visible switches the poller to the active cadence and pushes a fresh
    /// snapshot; becoming hidden drops back to the idle cadence.
    pub fn set_surface_visible(&self, visible: bool) {
        self.poller.set_active(visible);
        if visible {
            self.sync.push_snapshot();
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }
}

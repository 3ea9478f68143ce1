use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use super::history::HistoryStore;
use super::state::ObservedClipboard;
use super::Clipboard;

/// Sampling interval while the presentation surface is hidden.
pub const IDLE_POLL_INTERVAL_MS: u64 = 5000;
/// Sampling interval while the presentation surface is visible.
pub const ACTIVE_POLL_INTERVAL_MS: u64 = 200;

/// Poller cadence. Both states are steady; the poller never terminates on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerMode {
    Idle,
    Active,
}

impl PollerMode {
    fn interval(self) -> Duration {
        match self {
            PollerMode::Idle => Duration::from_millis(IDLE_POLL_INTERVAL_MS),
            PollerMode::Active => Duration::from_millis(ACTIVE_POLL_INTERVAL_MS),
        }
    }
}

/// Adaptive clipboard poll loop.
///
/// Reads the clipboard every tick and feeds changed content into the
/// [`HistoryStore`]. Change detection goes through the shared
/// [`ObservedClipboard`] shadow, which the paste command also updates, so
/// the loop never records the engine's own writes.
///
/// Mode switches take effect immediately: the pending sleep is cancelled and
/// sampling restarts at the new cadence rather than waiting out the old
/// interval.
pub struct ClipboardPoller {
    clipboard: Arc<dyn Clipboard>,
    store: HistoryStore,
    observed: ObservedClipboard,
    mode: watch::Sender<PollerMode>,
}

impl ClipboardPoller {
    /// Create a poller in the Idle state.
    pub fn new(clipboard: Arc<dyn Clipboard>, store: HistoryStore) -> Self {
        let (mode, _) = watch::channel(PollerMode::Idle);
        Self {
            clipboard,
            store,
            observed: ObservedClipboard::new(),
            mode,
        }
    }

    /// Handle to the last-observed shadow, shared with the paste command.
    pub fn observed(&self) -> ObservedClipboard {
        self.observed.clone()
    }

    pub fn mode(&self) -> PollerMode {
        *self.mode.borrow()
    }

    /// Switch cadence. Called by the external visibility controller when the
    /// presentation surface is shown or hidden.
    pub fn set_active(&self, active: bool) {
        let mode = if active {
            PollerMode::Active
        } else {
            PollerMode::Idle
        };
        if self.mode.send_replace(mode) != mode {
            println!("[ClipboardPoller] Switched to {:?} cadence", mode);
        }
    }

    /// Start the poll loop. The task runs until the poller is dropped.
    pub fn spawn(&self) -> JoinHandle<()> {
        let clipboard = Arc::clone(&self.clipboard);
        let store = self.store.clone();
        let observed = self.observed.clone();
        let mut mode_rx = self.mode.subscribe();

        tokio::spawn(async move {
            println!("[ClipboardPoller] Started monitoring");
            loop {
                let interval = mode_rx.borrow_and_update().interval();
                tokio::select! {
                    _ = tokio::time::sleep(interval) => {
                        // A failed read is swallowed and retried on the next
                        // natural tick; clipboard content is untrusted and
                        // frequently unavailable.
                        if let Ok(text) = clipboard.read_text() {
                            if observed.record_if_changed(&text) {
                                match store.add(&text) {
                                    Ok(_) => {}
                                    Err(e) => {
                                        eprintln!("[ClipboardPoller] Storage failure: {}", e);
                                    }
                                }
                            }
                        }
                    }
                    changed = mode_rx.changed() => {
                        if changed.is_err() {
                            // Poller dropped; stop sampling.
                            break;
                        }
                        // Re-arm the sleep at the new cadence immediately.
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::{EngineError, EngineResult};
    use crate::shared::settings::{MemoryStore, PersistHandle};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Scriptable clipboard for tests.
    #[derive(Default)]
    struct FakeClipboard {
        text: Mutex<String>,
        failing: AtomicBool,
    }

    impl FakeClipboard {
        fn set(&self, text: &str) {
            *self.text.lock().unwrap() = text.to_string();
        }
        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }
    }

    impl Clipboard for FakeClipboard {
        fn read_text(&self) -> EngineResult<String> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(EngineError::Clipboard("unavailable".to_string()));
            }
            Ok(self.text.lock().unwrap().clone())
        }
        fn write_text(&self, text: &str) -> EngineResult<()> {
            self.set(text);
            Ok(())
        }
    }

    fn poller() -> (Arc<FakeClipboard>, HistoryStore, ClipboardPoller) {
        let clipboard = Arc::new(FakeClipboard::default());
        let store = HistoryStore::new(PersistHandle::load(Arc::new(MemoryStore::new())));
        let poller = ClipboardPoller::new(clipboard.clone() as Arc<dyn Clipboard>, store.clone());
        (clipboard, store, poller)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_tick_records_change() {
        let (clipboard, store, poller) = poller();
        clipboard.set("hello");
        let _task = poller.spawn();
        settle().await;

        tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
        settle().await;

        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].content, "hello");
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_content_recorded_once() {
        let (clipboard, store, poller) = poller();
        clipboard.set("steady");
        let _task = poller.spawn();
        settle().await;

        for _ in 0..3 {
            tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
            settle().await;
        }

        assert_eq!(store.list().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_restarts_cadence_immediately() {
        let (clipboard, store, poller) = poller();
        clipboard.set("old");
        let _task = poller.spawn();
        settle().await;

        // A few idle ticks go by without changes.
        for _ in 0..3 {
            tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
            settle().await;
        }
        assert_eq!(store.list().len(), 1);

        // The surface becomes visible mid-interval. The next tick must fire
        // within the active interval, not up to 5000 ms later.
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        clipboard.set("fresh");
        poller.set_active(true);
        settle().await;

        tokio::time::advance(Duration::from_millis(ACTIVE_POLL_INTERVAL_MS)).await;
        settle().await;

        assert_eq!(store.list()[0].content, "fresh");
        assert_eq!(store.list().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deactivation_returns_to_idle_cadence() {
        let (clipboard, store, poller) = poller();
        let _task = poller.spawn();
        poller.set_active(true);
        settle().await;

        clipboard.set("while active");
        tokio::time::advance(Duration::from_millis(ACTIVE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert_eq!(store.list().len(), 1);

        poller.set_active(false);
        settle().await;

        // An active-length interval is no longer enough to trigger a tick.
        clipboard.set("while idle");
        tokio::time::advance(Duration::from_millis(ACTIVE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert_eq!(store.list().len(), 1);

        tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert_eq!(store.list().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_failure_swallowed_and_retried() {
        let (clipboard, store, poller) = poller();
        clipboard.set("eventually seen");
        clipboard.set_failing(true);
        let _task = poller.spawn();
        settle().await;

        tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert!(store.list().is_empty());

        clipboard.set_failing(false);
        tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert_eq!(store.list().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_noted_write_is_not_recaptured() {
        let (clipboard, store, poller) = poller();
        let observed = poller.observed();
        let _task = poller.spawn();
        settle().await;

        // Simulates the paste command: clipboard write plus shadow update.
        clipboard.set("pasted back");
        observed.note("pasted back");

        tokio::time::advance(Duration::from_millis(IDLE_POLL_INTERVAL_MS)).await;
        settle().await;
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_initial_mode_is_idle() {
        let clipboard: Arc<dyn Clipboard> = Arc::new(FakeClipboard::default());
        let store = HistoryStore::new(PersistHandle::load(Arc::new(MemoryStore::new())));
        let poller = ClipboardPoller::new(clipboard, store);
        assert_eq!(poller.mode(), PollerMode::Idle);
        poller.set_active(true);
        assert_eq!(poller.mode(), PollerMode::Active);
    }
}

use tokio::sync::mpsc::UnboundedSender;

use super::filter;
use crate::shared::errors::EngineResult;
use crate::shared::settings::PersistHandle;
use crate::shared::types::HistoryItem;

/// Bounded, newest-first clipboard history with write-through persistence.
///
/// Exclusive owner of the history sequence: the poller and the command loop
/// both go through this store, and every mutation runs to completion
/// (memory + persistence) before the next one starts. Invariants held after
/// every call:
///
/// - the sequence never exceeds `max_history` items
/// - no item equals the content of the item ahead of it at insert time
///   (adjacent-duplicate suppression only, not global dedupe)
/// - stored content is trimmed and at most `max_characters` chars
#[derive(Clone)]
pub struct HistoryStore {
    persist: PersistHandle,
    notifier: Option<UnboundedSender<HistoryItem>>,
}

impl HistoryStore {
    pub fn new(persist: PersistHandle) -> Self {
        Self {
            persist,
            notifier: None,
        }
    }

    /// Attach a channel that receives every newly recorded item, for an
    /// external notification collaborator.
    pub fn with_notifier(mut self, notifier: UnboundedSender<HistoryItem>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Record raw clipboard content.
    ///
    /// Returns the stored item, or `Ok(None)` for the policy no-ops: content
    /// that is empty after trimming, equals the current head item, or looks
    /// like a credential. A storage failure is returned as an error, but the
    /// item is already recorded in memory at that point.
    pub fn add(&self, raw_content: &str) -> EngineResult<Option<HistoryItem>> {
        let trimmed = raw_content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if filter::is_sensitive(trimmed) {
            return Ok(None);
        }

        let recorded = self.persist.update(|state| {
            let (content, is_truncated) = if trimmed.chars().count() > state.max_characters {
                (
                    trimmed.chars().take(state.max_characters).collect(),
                    true,
                )
            } else {
                (trimmed.to_string(), false)
            };

            // Adjacent-duplicate suppression: only the head item counts.
            if state.history.first().map(|head| head.content == content) == Some(true) {
                return None;
            }

            let item = HistoryItem::new(content, is_truncated);
            state.history.insert(0, item.clone());
            state.history.truncate(state.max_history);
            Some(item)
        });

        if let Ok(Some(item)) = &recorded {
            println!("[HistoryStore] Recorded item {} ({} chars)", item.id, item.char_count);
            if let Some(notifier) = &self.notifier {
                let _ = notifier.send(item.clone());
            }
        }
        recorded
    }

    /// Snapshot of the current sequence, newest first.
    pub fn list(&self) -> Vec<HistoryItem> {
        self.persist.read(|state| state.history.clone())
    }

    /// Remove the item with the given id. Deleting an absent id is a no-op,
    /// not an error.
    pub fn delete(&self, id: &str) -> EngineResult<()> {
        self.persist
            .update(|state| {
                let before = state.history.len();
                state.history.retain(|item| item.id != id);
                (state.history.len() != before).then_some(())
            })
            .map(|_| ())
    }

    /// Drop everything and persist the empty sequence.
    pub fn clear(&self) -> EngineResult<()> {
        self.persist
            .update(|state| {
                state.history.clear();
                Some(())
            })
            .map(|_| ())
    }

}

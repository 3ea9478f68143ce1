use std::sync::{Arc, Mutex};

/// The last clipboard value the engine has observed.
///
/// Shared between the poller (which updates it on every detected change) and
/// the paste command (which updates it atomically with its clipboard write).
/// That second path is intentional suppression: without it the next poll
/// tick would see the engine's own write and record it as a new external
/// change.
#[derive(Clone, Default)]
pub struct ObservedClipboard {
    last: Arc<Mutex<Option<String>>>,
}

impl ObservedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` if it differs (exact equality) from the last
    /// observed value. Returns true when it did differ, i.e. the caller is
    /// looking at new clipboard content. The very first observation counts
    /// as a change.
    pub fn record_if_changed(&self, current: &str) -> bool {
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let changed = match &*last {
            Some(prev) => prev != current,
            None => true,
        };
        if changed {
            *last = Some(current.to_string());
        }
        changed
    }

    /// Overwrite the shadow directly. Called by the paste command with the
    /// exact text it just wrote to the clipboard.
    pub fn note(&self, text: &str) {
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *last = Some(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_is_a_change() {
        let observed = ObservedClipboard::new();
        assert!(observed.record_if_changed("a"));
        assert!(!observed.record_if_changed("a"));
        assert!(observed.record_if_changed("b"));
    }

    #[test]
    fn test_note_suppresses_next_observation() {
        let observed = ObservedClipboard::new();
        observed.note("pasted");
        assert!(!observed.record_if_changed("pasted"));
        assert!(observed.record_if_changed("something else"));
    }
}

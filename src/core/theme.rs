use crate::shared::errors::EngineResult;
use crate::shared::settings::PersistHandle;
use crate::shared::types::Theme;

/// The persisted theme preference. Two variants, defaults to dark.
///
/// Broadcasting the new value after a toggle is the sync channel's job; this
/// type only owns the value and its write-through.
#[derive(Clone)]
pub struct ThemeState {
    persist: PersistHandle,
}

impl ThemeState {
    pub fn new(persist: PersistHandle) -> Self {
        Self { persist }
    }

    pub fn get(&self) -> Theme {
        self.persist.read(|state| state.theme)
    }

    /// Flip the theme and persist it. Returns the new value. On a storage
    /// failure the in-memory value is already flipped.
    pub fn toggle(&self) -> EngineResult<Theme> {
        self.persist
            .update(|state| {
                state.theme = state.theme.toggled();
                Some(state.theme)
            })
            .map(|theme| theme.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::settings::{MemoryStore, Storage};
    use std::sync::Arc;

    #[test]
    fn test_defaults_to_dark() {
        let theme = ThemeState::new(PersistHandle::load(Arc::new(MemoryStore::new())));
        assert_eq!(theme.get(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists_and_reads_back() {
        let backend = Arc::new(MemoryStore::new());
        let theme = ThemeState::new(PersistHandle::load(backend.clone() as Arc<dyn Storage>));

        assert_eq!(theme.toggle().unwrap(), Theme::Light);
        assert_eq!(theme.get(), Theme::Light);
        assert_eq!(backend.load().unwrap().unwrap().theme, Theme::Light);

        // A fresh handle over the same backend sees the persisted value.
        let reloaded = ThemeState::new(PersistHandle::load(backend));
        assert_eq!(reloaded.get(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let theme = ThemeState::new(PersistHandle::load(Arc::new(MemoryStore::new())));
        theme.toggle().unwrap();
        theme.toggle().unwrap();
        assert_eq!(theme.get(), Theme::Dark);
    }
}

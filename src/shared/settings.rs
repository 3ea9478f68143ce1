//! Persisted engine state.
//!
//! Everything the engine remembers across restarts lives in one structured
//! record: the history sequence, the theme, and the two capacity knobs. The
//! record is loaded once at startup and written back synchronously after
//! every mutation (write-through, no batching).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::errors::{EngineError, EngineResult};
use super::types::{HistoryItem, Theme};

/// History capacity when nothing is persisted yet.
pub const DEFAULT_MAX_HISTORY: usize = 30;
/// Per-item character cap when nothing is persisted yet.
pub const DEFAULT_MAX_CHARACTERS: usize = 5000;

/// The single persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub history: Vec<HistoryItem>,
    pub theme: Theme,
    pub max_history: usize,
    pub max_characters: usize,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            theme: Theme::default(),
            max_history: DEFAULT_MAX_HISTORY,
            max_characters: DEFAULT_MAX_CHARACTERS,
        }
    }
}

/// Storage backend for the persisted record.
pub trait Storage: Send + Sync {
    /// Read the record. `Ok(None)` means nothing was persisted yet.
    fn load(&self) -> EngineResult<Option<PersistedState>>;
    /// Write the record, replacing whatever was there.
    fn save(&self, state: &PersistedState) -> EngineResult<()>;
}

/// JSON-file storage under the platform config directory.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Store at the default platform location.
    pub fn new() -> EngineResult<Self> {
        let dirs = ProjectDirs::from("com", "antigravity", "clipvault").ok_or_else(|| {
            EngineError::Storage("Failed to determine config directory".to_string())
        })?;
        Ok(Self {
            path: dirs.config_dir().join("state.json"),
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Storage for JsonStore {
    fn load(&self) -> EngineResult<Option<PersistedState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| EngineError::Storage(format!("Failed to read state file: {}", e)))?;
        let state = serde_json::from_str(&content)
            .map_err(|e| EngineError::Storage(format!("Failed to parse state file: {}", e)))?;
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> EngineResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| EngineError::Storage(format!("Failed to create config dir: {}", e)))?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)
            .map_err(|e| EngineError::Storage(format!("Failed to write state file: {}", e)))
    }
}

/// In-memory storage, used by tests and as a fallback when the filesystem is
/// unavailable. Load returns whatever was last saved.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<Option<PersistedState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn load(&self) -> EngineResult<Option<PersistedState>> {
        let guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(guard.clone())
    }

    fn save(&self, state: &PersistedState) -> EngineResult<()> {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(state.clone());
        Ok(())
    }
}

/// Shared handle over the in-memory record plus its storage backend.
///
/// `HistoryStore` owns the history field, `ThemeState` owns the theme field;
/// both go through this handle so every mutation is applied in memory and
/// written through under one lock. A mutation runs to completion before
/// anything else can observe the record, so the history invariants are never
/// visible mid-violation.
#[derive(Clone)]
pub struct PersistHandle {
    state: Arc<Mutex<PersistedState>>,
    storage: Arc<dyn Storage>,
}

impl PersistHandle {
    /// Load the record from storage, falling back to defaults when nothing
    /// was persisted yet or the read fails.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.load() {
            Ok(Some(state)) => state,
            Ok(None) => PersistedState::default(),
            Err(e) => {
                eprintln!("[PersistHandle] Failed to load state: {}, using defaults", e);
                PersistedState::default()
            }
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            storage,
        }
    }

    /// Read-only access to a copy of part of the record.
    pub fn read<R>(&self, f: impl FnOnce(&PersistedState) -> R) -> R {
        let guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&guard)
    }

    /// Apply a mutation and write the record through.
    ///
    /// When the closure returns `None` the record is considered untouched
    /// and nothing is written (policy no-ops: empty add, adjacent duplicate,
    /// delete of an unknown id). On a write failure the in-memory mutation
    /// stands and `EngineError::Storage` is returned.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut PersistedState) -> Option<R>,
    ) -> EngineResult<Option<R>> {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match f(&mut guard) {
            None => Ok(None),
            Some(result) => {
                self.storage.save(&guard)?;
                Ok(Some(result))
            }
        }
    }
}

//! Per-word board persistence
//!
//! Maps `(device, word index)` to a JSON-encoded [`GameState`] and keeps the
//! progress pointer and version tag next to it. All failures degrade: a board
//! that cannot be read is treated as absent, a write that fails is logged.

use crate::core::GameState;
use crate::storage::{KeyValueStore, StorageError, keys};

/// Repository of per-word boards over a key-value backend
#[derive(Debug, Clone, Default)]
pub struct GameStateStore<S> {
    backend: S,
}

impl<S: KeyValueStore> GameStateStore<S> {
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Borrow the underlying backend
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Load the board for one word
    ///
    /// Returns `None` when nothing was saved, and also when the stored value is
    /// unreadable, does not parse, or violates the cursor invariants.
    #[must_use]
    pub fn load(&self, device_id: &str, index: usize) -> Option<GameState> {
        let key = keys::word_state(device_id, index);
        let raw = match self.backend.get(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("could not read {key}: {e}");
                return None;
            }
        };

        match serde_json::from_str::<GameState>(&raw) {
            Ok(state) if state.is_consistent() => Some(state),
            Ok(_) => {
                log::warn!("discarding inconsistent board at {key}");
                None
            }
            Err(e) => {
                log::warn!("discarding corrupt board at {key}: {e}");
                None
            }
        }
    }

    /// Save the board for one word and point the progress pointer at it
    pub fn save(&mut self, device_id: &str, index: usize, state: &GameState) {
        let key = keys::word_state(device_id, index);
        let result = serde_json::to_string(state)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.put(&key, &json));
        if let Err(e) = result {
            log::warn!("could not save {key}: {e}");
        }
        self.set_last_index(device_id, index);
    }

    /// Replace the board for one word with a fresh one and save it
    pub fn reset(&mut self, device_id: &str, index: usize) -> GameState {
        let state = GameState::new();
        self.save(device_id, index, &state);
        state
    }

    /// Saved board for one word, or a fresh unsaved board when there is none
    #[must_use]
    pub fn load_or_default(&self, device_id: &str, index: usize) -> GameState {
        self.load(device_id, index).unwrap_or_default()
    }

    /// Last played word index
    #[must_use]
    pub fn last_index(&self, device_id: &str) -> Option<usize> {
        let key = keys::last_index(device_id);
        match self.backend.get(&key) {
            Ok(raw) => raw.and_then(|s| s.trim().parse().ok()),
            Err(e) => {
                log::warn!("could not read {key}: {e}");
                None
            }
        }
    }

    pub fn set_last_index(&mut self, device_id: &str, index: usize) {
        let key = keys::last_index(device_id);
        if let Err(e) = self.backend.put(&key, &index.to_string()) {
            log::warn!("could not save {key}: {e}");
        }
    }

    /// Word-list version this device last played
    #[must_use]
    pub fn stored_version(&self, device_id: &str) -> Option<String> {
        let key = keys::version(device_id);
        self.backend.get(&key).unwrap_or_else(|e| {
            log::warn!("could not read {key}: {e}");
            None
        })
    }

    pub fn set_version(&mut self, device_id: &str, version: &str) {
        let key = keys::version(device_id);
        if let Err(e) = self.backend.put(&key, version) {
            log::warn!("could not save {key}: {e}");
        }
    }

    /// Delete every saved board and the progress pointer of a device
    ///
    /// Returns how many boards were removed.
    pub fn clear_progress(&mut self, device_id: &str) -> usize {
        let prefix = keys::word_state_prefix(device_id);
        let board_keys = self.backend.keys_with_prefix(&prefix).unwrap_or_else(|e| {
            log::warn!("could not list boards for {device_id}: {e}");
            Vec::new()
        });

        let mut removed = 0;
        for key in &board_keys {
            match self.backend.remove(key) {
                Ok(()) => removed += 1,
                Err(e) => log::warn!("could not remove {key}: {e}"),
            }
        }

        let pointer = keys::last_index(device_id);
        if let Err(e) = self.backend.remove(&pointer) {
            log::warn!("could not remove {pointer}: {e}");
        }
        removed
    }
}

//! Word-list version registry
//!
//! Reconciles the running word list with what this device played last time.

use super::state_store::GameStateStore;
use crate::storage::KeyValueStore;
use crate::wordlists::WordList;

/// Who is playing and which word they are on
///
/// Passed explicitly to every storage operation instead of being re-derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub device_id: String,
    pub word_index: usize,
}

impl SessionContext {
    #[must_use]
    pub fn new(device_id: impl Into<String>, word_index: usize) -> Self {
        Self {
            device_id: device_id.into(),
            word_index,
        }
    }
}

/// Compare the list's version with the stored one and pick the starting word
///
/// On a mismatch (including a device that never played) the new tag is
/// stored, all saved boards and the progress pointer are erased, and play
/// starts at index 0. On a match the progress pointer is restored, clamped to
/// the list bounds.
pub fn sync_version<S: KeyValueStore>(
    store: &mut GameStateStore<S>,
    device_id: &str,
    list: &WordList,
) -> SessionContext {
    let stored = store.stored_version(device_id);

    if stored.as_deref() != Some(list.version()) {
        store.set_version(device_id, list.version());
        let removed = store.clear_progress(device_id);
        log::info!(
            "word list version {:?} -> {}: cleared {removed} saved boards",
            stored,
            list.version()
        );
        return SessionContext::new(device_id, 0);
    }

    let index = store
        .last_index(device_id)
        .map_or(0, |i| i.min(list.last_index()));
    log::debug!("resuming {device_id} at word {index}");
    SessionContext::new(device_id, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::words_from_slice;

    const DEVICE: &str = "dev";

    fn list(version: &str) -> WordList {
        WordList::new(words_from_slice(&["watch", "blend", "crane"]), version)
    }

    fn touched_state() -> GameState {
        GameState {
            message: "Try again!".to_string(),
            ..GameState::new()
        }
    }

    #[test]
    fn first_run_stores_version_and_starts_at_zero() {
        let mut store = GameStateStore::new(MemoryStore::new());
        let ctx = sync_version(&mut store, DEVICE, &list("1"));

        assert_eq!(ctx, SessionContext::new(DEVICE, 0));
        assert_eq!(store.stored_version(DEVICE).as_deref(), Some("1"));
    }

    #[test]
    fn matching_version_resumes_pointer() {
        let mut store = GameStateStore::new(MemoryStore::new());
        sync_version(&mut store, DEVICE, &list("1"));
        store.save(DEVICE, 2, &touched_state());

        let ctx = sync_version(&mut store, DEVICE, &list("1"));
        assert_eq!(ctx.word_index, 2);
        assert_eq!(store.load(DEVICE, 2), Some(touched_state()));
    }

    #[test]
    fn pointer_is_clamped_to_list() {
        let mut store = GameStateStore::new(MemoryStore::new());
        sync_version(&mut store, DEVICE, &list("1"));
        store.set_last_index(DEVICE, 40);

        let ctx = sync_version(&mut store, DEVICE, &list("1"));
        assert_eq!(ctx.word_index, 2);
    }

    #[test]
    fn version_mismatch_wipes_progress() {
        let mut store = GameStateStore::new(MemoryStore::new());
        sync_version(&mut store, DEVICE, &list("1"));
        store.save(DEVICE, 0, &touched_state());
        store.save(DEVICE, 1, &touched_state());

        let ctx = sync_version(&mut store, DEVICE, &list("2"));
        assert_eq!(ctx.word_index, 0);
        assert_eq!(store.stored_version(DEVICE).as_deref(), Some("2"));
        assert_eq!(store.load(DEVICE, 0), None);
        assert_eq!(store.load(DEVICE, 1), None);
        assert_eq!(store.load_or_default(DEVICE, 1), GameState::new());
        assert_eq!(store.last_index(DEVICE), None);
    }

    #[test]
    fn other_devices_survive_a_reset() {
        let mut store = GameStateStore::new(MemoryStore::new());
        sync_version(&mut store, "other", &list("1"));
        store.save("other", 1, &touched_state());

        sync_version(&mut store, DEVICE, &list("2"));
        let ctx = sync_version(&mut store, "other", &list("1"));
        assert_eq!(ctx.word_index, 1);
        assert!(store.load("other", 1).is_some());
    }
}

//! Device identity
//!
//! A random token created on first run and reused forever after. It namespaces
//! every other key this device writes.

use crate::storage::{KeyValueStore, keys};
use rand::Rng;

/// Return the stored device identity, creating and persisting one if absent
///
/// Storage failures never abort the session: an unreadable store yields a
/// fresh token, and a failed write is logged and the token returned anyway.
pub fn get_or_create_device_id<S: KeyValueStore + ?Sized>(store: &mut S) -> String {
    match store.get(keys::DEVICE_ID) {
        Ok(Some(id)) if !id.trim().is_empty() => return id,
        Ok(_) => {}
        Err(e) => log::warn!("could not read device id: {e}"),
    }

    let id = generate_device_id();
    if let Err(e) = store.put(keys::DEVICE_ID, &id) {
        log::warn!("could not persist device id: {e}");
    }
    log::info!("created device id {id}");
    id
}

/// Return the stored device identity without creating one
#[must_use]
pub fn stored_device_id<S: KeyValueStore + ?Sized>(store: &S) -> Option<String> {
    match store.get(keys::DEVICE_ID) {
        Ok(id) => id.filter(|id| !id.trim().is_empty()),
        Err(e) => {
            log::warn!("could not read device id: {e}");
            None
        }
    }
}

/// 128 random bits rendered as 32 lowercase hex digits
fn generate_device_id() -> String {
    let bits: u128 = rand::rng().random();
    format!("{bits:032x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn created_once_then_reused() {
        let mut store = MemoryStore::new();
        let first = get_or_create_device_id(&mut store);
        let second = get_or_create_device_id(&mut store);

        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(store.get(keys::DEVICE_ID).unwrap(), Some(first));
    }

    #[test]
    fn stored_id_is_read_only() {
        let mut store = MemoryStore::new();
        assert_eq!(stored_device_id(&store), None);
        assert!(store.is_empty());

        let id = get_or_create_device_id(&mut store);
        assert_eq!(stored_device_id(&store), Some(id));
    }

    #[test]
    fn existing_id_is_kept() {
        let mut store = MemoryStore::new();
        store.put(keys::DEVICE_ID, "fixed-device").unwrap();
        assert_eq!(get_or_create_device_id(&mut store), "fixed-device");
    }

    #[test]
    fn blank_id_is_replaced() {
        let mut store = MemoryStore::new();
        store.put(keys::DEVICE_ID, "  ").unwrap();
        let id = get_or_create_device_id(&mut store);
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn separate_stores_get_distinct_ids() {
        let a = get_or_create_device_id(&mut MemoryStore::new());
        let b = get_or_create_device_id(&mut MemoryStore::new());
        assert_ne!(a, b);
    }
}

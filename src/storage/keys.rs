//! Storage key layout
//!
//! Every per-device key is namespaced by the device identity:
//!
//! | Key                       | Value                     |
//! |---------------------------|---------------------------|
//! | `device-id`               | device identity           |
//! | `{device}:version`        | word-list version tag     |
//! | `{device}:last-index`     | last played word index    |
//! | `{device}:word:{index}`   | JSON board for that word  |

/// Key holding the device identity itself
pub const DEVICE_ID: &str = "device-id";

#[must_use]
pub fn version(device_id: &str) -> String {
    format!("{device_id}:version")
}

#[must_use]
pub fn last_index(device_id: &str) -> String {
    format!("{device_id}:last-index")
}

#[must_use]
pub fn word_state(device_id: &str, index: usize) -> String {
    format!("{}{index}", word_state_prefix(device_id))
}

/// Prefix shared by every per-word board of a device
#[must_use]
pub fn word_state_prefix(device_id: &str) -> String {
    format!("{device_id}:word:")
}

//! Session configuration

use std::time::Duration;

/// Tunables for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Require the current word to be finished before moving to the next one
    pub gate_forward_navigation: bool,
    /// Upper bound on a single word-validity check
    pub validation_timeout: Duration,
}

impl SessionConfig {
    /// Create a new session configuration
    ///
    /// # Parameters
    /// - `gate_forward_navigation`: block `next_word` until the word is solved or exhausted (default: true)
    /// - `validation_timeout`: how long to wait for the validator (default: 3s)
    #[must_use]
    pub const fn new(gate_forward_navigation: bool, validation_timeout: Duration) -> Self {
        Self {
            gate_forward_navigation,
            validation_timeout,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(true, Duration::from_secs(3))
    }
}

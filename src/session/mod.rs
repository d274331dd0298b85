//! Game session layer
//!
//! Ties the core types to storage: device identity, word-list version
//! reconciliation, per-word board persistence, word validation, and the
//! session controller that the user interfaces drive.

mod config;
mod controller;
pub mod identity;
pub mod registry;
pub mod state_store;
pub mod validator;

pub use config::SessionConfig;
pub use controller::{
    GameSession, MSG_INCOMPLETE, MSG_INVALID, MSG_RETRY, MSG_SOLVED, PendingGuess, SessionError,
    SessionPhase,
};
pub use identity::{get_or_create_device_id, stored_device_id};
pub use registry::{SessionContext, sync_version};
pub use state_store::GameStateStore;
pub use validator::{DictionaryValidator, TimeoutValidator, Validation, WordValidator};

//! Wordle Engine
//!
//! Guess evaluation, keyboard tracking and per-device progress persistence for
//! a Wordle game played through a fixed, versioned list of target words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("react").unwrap();
//!
//! let evaluation = evaluate(&guess, &target);
//! assert_eq!(evaluation.statuses()[0], LetterStatus::Present);
//! assert_eq!(evaluation.statuses()[2], LetterStatus::Correct);
//! assert_eq!(evaluation.to_emoji(), "🟨🟨🟩⬜🟨");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Key-value persistence
pub mod storage;

// Game session controller
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

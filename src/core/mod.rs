//! Core domain types for Wordle
//!
//! This module contains the fundamental game types: words, letter statuses,
//! the keyboard map and the per-word board. Everything here is pure and
//! independent of storage or user interface.

mod board;
mod keyboard;
mod status;
mod word;

pub use board::{Cell, DEFAULT_MESSAGE, GameState, Grid, MAX_ATTEMPTS};
pub use keyboard::{KEYBOARD_ROWS, KeyboardStatusMap};
pub use status::{Evaluation, LetterStatus, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};

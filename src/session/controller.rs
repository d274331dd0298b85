//! Game session state machine
//!
//! `GameSession` owns the active word's board and drives it from user events:
//! letter keys, backspace, enter and next/previous navigation. Every mutation is
//! saved before the event returns.
//!
//! Submitting a guess is split in two so the word check can happen outside the
//! session: [`GameSession::enter`] hands out a [`PendingGuess`] and moves to
//! `Validating`, and [`GameSession::complete_validation`] consumes it with the
//! outcome. Further `enter` calls are ignored until then.

use super::config::SessionConfig;
use super::identity::get_or_create_device_id;
use super::registry::{SessionContext, sync_version};
use super::state_store::GameStateStore;
use super::validator::{Validation, WordValidator};
use crate::core::{
    Cell, GameState, Grid, KeyboardStatusMap, LetterStatus, MAX_ATTEMPTS, Word, evaluate,
};
use crate::storage::KeyValueStore;
use crate::wordlists::WordList;
use std::fmt;

pub const MSG_INCOMPLETE: &str = "Word must be 5 letters";
pub const MSG_INVALID: &str = "Not a valid word";
pub const MSG_SOLVED: &str = "Congratulations! You guessed the word!";
pub const MSG_RETRY: &str = "Try again!";

/// Where the active word is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Accepting letters on the current row
    Entering,
    /// Current row is full, waiting for enter
    RowFull,
    /// A guess is out for validation
    Validating,
    /// Guessed correctly
    Solved,
    /// All rows used without a correct guess
    Exhausted,
}

impl SessionPhase {
    /// Check whether the word is finished
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// A submitted row awaiting its validity check
///
/// Only one is outstanding at a time. It is not `Clone`, so each ticket can be
/// completed at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingGuess {
    ticket: u64,
    word: String,
}

impl PendingGuess {
    /// The guess, lowercased, as it should be sent to a validator
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Error type for starting a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyWordList,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no playable words"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Controller for one player working through a word list
pub struct GameSession<S> {
    store: GameStateStore<S>,
    list: WordList,
    config: SessionConfig,
    context: SessionContext,
    state: GameState,
    pending: Option<u64>,
    next_ticket: u64,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Start a session over `backend`
    ///
    /// Resolves the device identity, reconciles the word-list version, and
    /// opens the word the progress pointer names.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyWordList` if `list` has no words.
    pub fn start(backend: S, list: WordList, config: SessionConfig) -> Result<Self, SessionError> {
        if list.is_empty() {
            return Err(SessionError::EmptyWordList);
        }

        let mut store = GameStateStore::new(backend);
        let device_id = get_or_create_device_id(store.backend_mut());
        let context = sync_version(&mut store, &device_id, &list);

        let mut session = Self {
            store,
            list,
            config,
            context,
            state: GameState::new(),
            pending: None,
            next_ticket: 0,
        };
        session.open_word(session.context.word_index);
        Ok(session)
    }

    // ----- accessors -------------------------------------------------------

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.state.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatusMap {
        &self.state.keyboard
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.state.message
    }

    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.state.can_advance
    }

    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.context.word_index
    }

    #[must_use]
    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.list
    }

    #[must_use]
    pub const fn store(&self) -> &GameStateStore<S> {
        &self.store
    }

    #[must_use]
    pub fn into_backend(self) -> S {
        self.store.into_backend()
    }

    /// Word the active board is played against
    #[must_use]
    pub fn target(&self) -> &Word {
        // Index is kept inside the (non-empty) list by every navigation path
        &self.list.words()[self.context.word_index]
    }

    /// Current lifecycle phase of the active word
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.pending.is_some() {
            SessionPhase::Validating
        } else if self.state.can_advance {
            if self.state.is_solved() {
                SessionPhase::Solved
            } else {
                SessionPhase::Exhausted
            }
        } else if self.state.row_is_full() {
            SessionPhase::RowFull
        } else {
            SessionPhase::Entering
        }
    }

    /// Check whether `next_word` would move
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.context.word_index < self.list.last_index()
            && (self.state.can_advance || !self.config.gate_forward_navigation)
    }

    /// Check whether `prev_word` would move
    #[must_use]
    pub const fn can_go_prev(&self) -> bool {
        self.context.word_index > 0
    }

    // ----- input events ----------------------------------------------------

    /// Type a letter into the next free cell of the current row
    ///
    /// Ignored unless the row has room and no guess is being validated.
    /// Returns whether the board changed.
    pub fn key_press(&mut self, letter: char) -> bool {
        if self.phase() != SessionPhase::Entering || !letter.is_ascii_alphabetic() {
            return false;
        }

        let (row, col) = (self.state.current_row, self.state.current_col);
        let cell = &mut self.state.grid[row][col];
        cell.letter = Some(letter.to_ascii_uppercase());
        cell.status = LetterStatus::Unset;
        self.state.current_col += 1;

        self.persist();
        true
    }

    /// Remove the most recently typed letter of the current row
    ///
    /// Returns whether the board changed.
    pub fn backspace(&mut self) -> bool {
        if !matches!(self.phase(), SessionPhase::Entering | SessionPhase::RowFull)
            || self.state.current_col == 0
        {
            return false;
        }

        self.state.current_col -= 1;
        let (row, col) = (self.state.current_row, self.state.current_col);
        self.state.grid[row][col] = Cell::default();

        self.persist();
        true
    }

    /// Submit the current row
    ///
    /// With fewer than five letters only the message changes. With a full row
    /// the session enters `Validating` and the returned ticket must be passed to
    /// [`complete_validation`](Self::complete_validation). Returns `None` while
    /// another guess is pending or after the word is finished.
    pub fn enter(&mut self) -> Option<PendingGuess> {
        match self.phase() {
            SessionPhase::Entering => {
                self.state.message = MSG_INCOMPLETE.to_string();
                self.persist();
                None
            }
            SessionPhase::RowFull => {
                let word = self.state.current_guess()?.to_ascii_lowercase();
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                self.pending = Some(ticket);
                log::debug!(
                    "word {} row {}: validating {word}",
                    self.context.word_index,
                    self.state.current_row
                );
                Some(PendingGuess { ticket, word })
            }
            SessionPhase::Validating => {
                log::debug!("ignoring enter while a guess is being validated");
                None
            }
            SessionPhase::Solved | SessionPhase::Exhausted => None,
        }
    }

    /// Resume after a validity check
    ///
    /// An invalid word keeps the row for correction. A valid word is scored and
    /// the session moves to the next row or finishes the word. Returns `false`
    /// if `pending` is stale (navigation or another submission happened since).
    pub fn complete_validation(&mut self, pending: PendingGuess, outcome: Validation) -> bool {
        if self.pending != Some(pending.ticket) {
            log::debug!("dropping stale validation for {}", pending.word);
            return false;
        }
        self.pending = None;

        match (outcome, Word::new(pending.word)) {
            (Validation::Valid, Ok(guess)) => self.score(&guess),
            _ => {
                self.state.message = MSG_INVALID.to_string();
                self.persist();
            }
        }
        true
    }

    /// Submit the current row and validate it in one step
    ///
    /// Returns the validation outcome, or `None` if nothing was submitted.
    pub fn submit<V: WordValidator + ?Sized>(&mut self, validator: &V) -> Option<Validation> {
        let pending = self.enter()?;
        let outcome = validator.validate(pending.word());
        self.complete_validation(pending, outcome);
        Some(outcome)
    }

    /// Show `message` for input that never reached the board
    ///
    /// Leaves the grid and cursor untouched. Ignored while a guess is pending
    /// or after the word is finished. Returns whether the message changed.
    pub fn reject_input(&mut self, message: &str) -> bool {
        if !matches!(self.phase(), SessionPhase::Entering | SessionPhase::RowFull) {
            return false;
        }
        self.state.message = message.to_string();
        self.persist();
        true
    }

    fn score(&mut self, guess: &Word) {
        let evaluation = evaluate(guess, self.target());
        self.state.apply_evaluation(&evaluation);

        if evaluation.is_solved() {
            self.state.message = MSG_SOLVED.to_string();
            self.state.can_advance = true;
            log::info!("word {} solved", self.context.word_index);
        } else if self.state.current_row + 1 >= MAX_ATTEMPTS {
            self.state.message = format!("Game over! The word was {}.", self.target());
            self.state.can_advance = true;
            log::info!("word {} exhausted", self.context.word_index);
        } else {
            self.state.current_row += 1;
            self.state.current_col = 0;
            self.state.message = MSG_RETRY.to_string();
        }

        self.persist();
    }

    // ----- navigation ------------------------------------------------------

    /// Move to the next word in the list
    ///
    /// No-op at the end of the list, and, when forward navigation is gated,
    /// while the current word is unfinished. Returns whether the word changed.
    pub fn next_word(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.open_word(self.context.word_index + 1);
        true
    }

    /// Move to the previous word in the list
    ///
    /// No-op at the first word. Returns whether the word changed.
    pub fn prev_word(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.open_word(self.context.word_index - 1);
        true
    }

    /// Clear the active word's board
    pub fn reset_word(&mut self) {
        self.pending = None;
        self.state = self
            .store
            .reset(&self.context.device_id, self.context.word_index);
    }

    /// Erase every saved board for this device and return to the first word
    pub fn reset_progress(&mut self) {
        let removed = self.store.clear_progress(&self.context.device_id);
        log::info!("cleared {removed} saved boards");
        self.open_word(0);
    }

    fn open_word(&mut self, index: usize) {
        self.pending = None;
        self.context.word_index = index.min(self.list.last_index());
        let device_id = &self.context.device_id;

        self.state = match self.store.load(device_id, self.context.word_index) {
            Some(state) => {
                self.store.set_last_index(device_id, self.context.word_index);
                state
            }
            None => self.store.reset(device_id, self.context.word_index),
        };
        log::debug!("opened word {}", self.context.word_index);
    }

    fn persist(&mut self) {
        self.store.save(
            &self.context.device_id,
            self.context.word_index,
            &self.state,
        );
    }
}

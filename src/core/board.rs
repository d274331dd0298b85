//! Board state for a single target word
//!
//! `GameState` is the complete persistable snapshot of progress on one word:
//! the guess grid, the aggregated keyboard, the user-facing message, the
//! cursor, and whether the player may move on.

use super::keyboard::KeyboardStatusMap;
use super::status::{Evaluation, LetterStatus};
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};

/// Maximum number of guesses per word
pub const MAX_ATTEMPTS: usize = 6;

/// Message shown on a freshly reset board
pub const DEFAULT_MESSAGE: &str = "Start guessing!";

/// One letter slot in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

impl Cell {
    /// Check whether a letter has been typed into this cell
    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.letter.is_some()
    }
}

/// Fixed 6×5 guess grid
pub type Grid = [[Cell; WORD_LENGTH]; MAX_ATTEMPTS];

/// Complete snapshot of progress on one target word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub keyboard: KeyboardStatusMap,
    pub message: String,
    pub current_row: usize,
    pub current_col: usize,
    pub can_advance: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            keyboard: KeyboardStatusMap::new(),
            message: DEFAULT_MESSAGE.to_string(),
            current_row: 0,
            current_col: 0,
            can_advance: false,
        }
    }
}

impl GameState {
    /// Create a fresh board: empty grid, neutral keyboard, cursor at origin
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the cursor invariants hold
    ///
    /// Used to reject persisted snapshots that were edited or truncated.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.current_row >= MAX_ATTEMPTS || self.current_col > WORD_LENGTH {
            return false;
        }
        self.grid[self.current_row]
            .iter()
            .enumerate()
            .all(|(col, cell)| cell.is_filled() == (col < self.current_col))
    }

    /// Check whether the current row has every letter filled
    #[inline]
    #[must_use]
    pub const fn row_is_full(&self) -> bool {
        self.current_col == WORD_LENGTH
    }

    /// Letters of the current row as an uppercase string
    ///
    /// Returns `None` until the row is full.
    #[must_use]
    pub fn current_guess(&self) -> Option<String> {
        if !self.row_is_full() {
            return None;
        }
        self.grid[self.current_row]
            .iter()
            .map(|cell| cell.letter)
            .collect()
    }

    /// Write evaluated statuses into the current row and update the keyboard
    pub fn apply_evaluation(&mut self, evaluation: &Evaluation) {
        for (cell, &status) in self.grid[self.current_row]
            .iter_mut()
            .zip(evaluation.statuses())
        {
            cell.status = status;
        }
        self.keyboard.apply(evaluation);
    }

    /// Number of rows that have been scored
    #[must_use]
    pub fn rows_scored(&self) -> usize {
        self.grid
            .iter()
            .take_while(|row| row.iter().all(|cell| cell.status != LetterStatus::Unset))
            .count()
    }

    /// Check whether the last scored row is all correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows_scored()
            .checked_sub(1)
            .is_some_and(|row| {
                self.grid[row]
                    .iter()
                    .all(|cell| cell.status == LetterStatus::Correct)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn type_row(state: &mut GameState, word: &str) {
        for (col, ch) in word.chars().enumerate() {
            state.grid[state.current_row][col].letter = Some(ch);
        }
        state.current_col = word.len();
    }

    #[test]
    fn fresh_state_defaults() {
        let state = GameState::new();
        assert_eq!(state.message, DEFAULT_MESSAGE);
        assert_eq!((state.current_row, state.current_col), (0, 0));
        assert!(!state.can_advance);
        assert!(state.grid.iter().flatten().all(|c| *c == Cell::default()));
        assert!(state.is_consistent());
    }

    #[test]
    fn current_guess_requires_full_row() {
        let mut state = GameState::new();
        type_row(&mut state, "BLE");
        assert_eq!(state.current_guess(), None);
        type_row(&mut state, "BLEND");
        assert_eq!(state.current_guess().as_deref(), Some("BLEND"));
    }

    #[test]
    fn apply_evaluation_writes_row_and_keyboard() {
        let mut state = GameState::new();
        type_row(&mut state, "CHATS");
        let evaluation = evaluate(&Word::new("chats").unwrap(), &Word::new("watch").unwrap());
        state.apply_evaluation(&evaluation);

        assert_eq!(state.grid[0][0].status, LetterStatus::Present);
        assert_eq!(state.grid[0][4].status, LetterStatus::Absent);
        assert_eq!(state.keyboard.get(b'S'), LetterStatus::Absent);
        assert_eq!(state.rows_scored(), 1);
        assert!(!state.is_solved());
    }

    #[test]
    fn solved_after_correct_row() {
        let mut state = GameState::new();
        type_row(&mut state, "BLEND");
        let word = Word::new("blend").unwrap();
        state.apply_evaluation(&evaluate(&word, &word));
        assert!(state.is_solved());
    }

    #[test]
    fn consistency_rejects_bad_cursor() {
        let mut state = GameState::new();
        state.current_col = 6;
        assert!(!state.is_consistent());

        let mut state = GameState::new();
        state.current_row = MAX_ATTEMPTS;
        assert!(!state.is_consistent());

        // Cursor claims two letters but none are typed
        let mut state = GameState::new();
        state.current_col = 2;
        assert!(!state.is_consistent());
    }

    #[test]
    fn json_round_trip() {
        let mut state = GameState::new();
        type_row(&mut state, "CHATS");
        state.apply_evaluation(&evaluate(
            &Word::new("chats").unwrap(),
            &Word::new("watch").unwrap(),
        ));
        state.message = "Try again!".to_string();

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}

//! Keyboard status aggregation
//!
//! Tracks the best-known status of every alphabet letter across all guesses
//! made against the current word.

use super::status::{Evaluation, LetterStatus};
use serde::{Deserialize, Serialize};

/// Letters of the on-screen keyboard, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const ALPHABET_LEN: usize = 26;

/// Best-known status per letter A-Z
///
/// Entries only move up in rank, so a letter once `Correct` stays `Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardStatusMap {
    statuses: [LetterStatus; ALPHABET_LEN],
}

impl KeyboardStatusMap {
    /// Create a map with every letter `Unset`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of an ASCII letter (either case); non-letters report `Unset`
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterStatus {
        index_of(letter).map_or(LetterStatus::Unset, |i| self.statuses[i])
    }

    /// Record an observation for one letter using the monotonic upgrade rule
    pub fn record(&mut self, letter: u8, observed: LetterStatus) {
        if let Some(i) = index_of(letter) {
            self.statuses[i] = self.statuses[i].upgrade(observed);
        }
    }

    /// Record every letter of a scored guess
    pub fn apply(&mut self, evaluation: &Evaluation) {
        for (letter, status) in evaluation.letters() {
            self.record(letter, status);
        }
    }

    /// All 26 entries in alphabetical order
    pub fn entries(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        (b'A'..=b'Z').map(char::from).zip(self.statuses.iter().copied())
    }
}

fn index_of(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};
    use LetterStatus::{Absent, Correct, Present, Unset};

    fn apply(map: &mut KeyboardStatusMap, guess: &str, target: &str) {
        let evaluation = evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap());
        map.apply(&evaluation);
    }

    #[test]
    fn starts_neutral() {
        let map = KeyboardStatusMap::new();
        assert_eq!(map.entries().count(), 26);
        assert!(map.entries().all(|(_, s)| s == Unset));
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }

    #[test]
    fn correct_is_sticky() {
        let mut map = KeyboardStatusMap::new();
        apply(&mut map, "watch", "watch");
        assert_eq!(map.get(b'W'), Correct);

        // W misplaced on a later guess does not downgrade it
        apply(&mut map, "crown", "watch");
        assert_eq!(map.get(b'W'), Correct);
        assert_eq!(map.get(b'C'), Correct);
        assert_eq!(map.get(b'R'), Absent);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut map = KeyboardStatusMap::new();
        apply(&mut map, "chats", "watch");
        assert_eq!(map.get(b'A'), Present);
        apply(&mut map, "water", "watch");
        assert_eq!(map.get(b'A'), Correct);
    }

    #[test]
    fn no_shared_letters_stay_absent() {
        let mut map = KeyboardStatusMap::new();
        apply(&mut map, "blimp", "watch");
        for letter in *b"BLIMP" {
            assert_eq!(map.get(letter), Absent);
        }
        assert!(map.entries().all(|(_, s)| s <= Absent));
    }

    #[test]
    fn monotonic_over_any_sequence() {
        let guesses = ["chats", "water", "ttttt", "blimp", "hatch", "watch"];
        let mut map = KeyboardStatusMap::new();
        let mut previous = map.clone();
        for guess in guesses {
            apply(&mut map, guess, "watch");
            for ((_, before), (_, after)) in previous.entries().zip(map.entries()) {
                assert!(after >= before);
            }
            previous = map.clone();
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut map = KeyboardStatusMap::new();
        map.record(b'q', Present);
        assert_eq!(map.get(b'Q'), Present);
        assert_eq!(map.get(b'1'), Unset);
    }
}

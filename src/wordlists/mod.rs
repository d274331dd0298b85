//! Word lists for the game
//!
//! Provides the ordered, versioned list of target words and the embedded
//! dictionary of accepted guesses.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT, TARGETS_VERSION};

use crate::core::Word;

/// Ordered sequence of target words plus the revision tag it was published under
///
/// Order defines progression. Duplicates are allowed and are distinct entries
/// by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    version: String,
}

impl WordList {
    /// Create a word list from words and a version tag
    #[must_use]
    pub fn new(words: Vec<Word>, version: impl Into<String>) -> Self {
        Self {
            words,
            version: version.into(),
        }
    }

    /// The word list compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::wordlists::{TARGETS_COUNT, WordList};
    ///
    /// let list = WordList::embedded();
    /// assert_eq!(list.len(), TARGETS_COUNT);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(TARGETS), TARGETS_VERSION)
    }

    /// Version tag of this list
    #[inline]
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Target word at `index`, if in range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// All words in progression order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Index of the last entry, or 0 for an empty list
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.words.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for target in TARGETS {
            assert!(
                allowed_set.contains(target),
                "Target '{target}' not in allowed list"
            );
        }
    }

    #[test]
    fn embedded_list_is_versioned() {
        let list = WordList::embedded();
        assert!(!list.is_empty());
        assert_eq!(list.version(), TARGETS_VERSION);
        assert_ne!(TARGETS_VERSION, "");
        assert_eq!(list.last_index(), list.len() - 1);
    }

    #[test]
    fn duplicates_are_distinct_entries() {
        let words = loader::words_from_slice(&["crane", "slate", "crane"]);
        let list = WordList::new(words, "dup");
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), list.get(2));
        assert!(list.get(3).is_none());
    }

    #[test]
    fn empty_list_last_index() {
        let list = WordList::new(Vec::new(), "empty");
        assert!(list.is_empty());
        assert_eq!(list.last_index(), 0);
    }
}

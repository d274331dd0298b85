//! Word list loading utilities
//!
//! Provides functions to load target lists and dictionaries from files or use
//! embedded constants.

use super::WordList;
use crate::core::Word;
use rustc_hash::FxHasher;
use std::fs;
use std::hash::Hasher;
use std::io;
use std::path::Path;

/// Load a versioned target list from a file
///
/// One word per line. Blank lines and `#` comments are skipped, invalid
/// entries are dropped. A `# version: <tag>` header sets the version tag;
/// without one the tag is derived from the list contents, so editing the
/// file still invalidates stored progress.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::wordlists::loader::load_word_list;
///
/// let list = load_word_list("data/targets.txt").unwrap();
/// println!("Loaded {} words (version {})", list.len(), list.version());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse a versioned target list from text
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    let mut version = None;
    let mut words = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(comment) = trimmed.strip_prefix('#') {
            if let Some(tag) = comment.trim().strip_prefix("version:") {
                version = Some(tag.trim().to_string());
            }
            continue;
        }
        if let Ok(word) = Word::new(trimmed) {
            words.push(word);
        }
    }

    let version = version.unwrap_or_else(|| content_version(&words));
    WordList::new(words, version)
}

/// Load a dictionary of accepted guesses from a file
///
/// Returns lowercase words, skipping blank lines, comments and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .map(|word| word.text().to_ascii_lowercase())
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_engine::wordlists::loader::words_from_slice;
/// use wordle_engine::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn content_version(words: &[Word]) -> String {
    let mut hasher = FxHasher::default();
    for word in words {
        hasher.write(word.chars());
    }
    format!("h{:016x}", hasher.finish())
}

//! Word-validity checking
//!
//! The controller asks an injected [`WordValidator`] whether a guess is a real
//! word. Every failure mode, including an unreachable or slow validator,
//! collapses into [`Validation::Invalid`].

use rustc_hash::FxHashSet;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Outcome of a validity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The word is recognized
    Valid,
    /// The word is unknown, or the check could not be completed
    Invalid,
}

impl Validation {
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Validation {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

/// Capability that decides whether a guess is a real word
///
/// Receives the guess lowercased.
pub trait WordValidator {
    fn validate(&self, word: &str) -> Validation;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> Validation,
{
    fn validate(&self, word: &str) -> Validation {
        self(word)
    }
}

/// Offline validator backed by a word set
#[derive(Debug, Clone, Default)]
pub struct DictionaryValidator {
    words: FxHashSet<String>,
}

impl DictionaryValidator {
    /// Build from any collection of words; entries are lowercased
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(crate::wordlists::ALLOWED)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for DictionaryValidator {
    fn validate(&self, word: &str) -> Validation {
        self.words.contains(&word.to_ascii_lowercase()).into()
    }
}

/// Bounds another validator with a deadline
///
/// The inner check runs on a worker thread. If it has not answered within the
/// timeout the guess counts as invalid and the worker's late answer is dropped.
///
/// A timed-out worker is not cancelled: it keeps running until the inner
/// check returns. An inner validator that never returns leaks one thread per
/// guess, so wrap only checks that eventually finish.
#[derive(Debug, Clone)]
pub struct TimeoutValidator<V> {
    inner: Arc<V>,
    timeout: Duration,
}

impl<V> TimeoutValidator<V>
where
    V: WordValidator + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(inner: V, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<V> WordValidator for TimeoutValidator<V>
where
    V: WordValidator + Send + Sync + 'static,
{
    fn validate(&self, word: &str) -> Validation {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let word_owned = word.to_string();

        let spawned = thread::Builder::new()
            .name("word-validator".to_string())
            .spawn(move || {
                // Receiver may already be gone after a timeout
                let _ = tx.send(inner.validate(&word_owned));
            });
        if let Err(e) = spawned {
            log::warn!("could not start validator thread: {e}");
            return Validation::Invalid;
        }

        match rx.recv_timeout(self.timeout) {
            Ok(outcome) => outcome,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                log::warn!("validation of {word:?} timed out after {:?}", self.timeout);
                Validation::Invalid
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                log::warn!("validator for {word:?} stopped without answering");
                Validation::Invalid
            }
        }
    }
}

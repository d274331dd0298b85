//! Progress summary command
//!
//! Reports how far the player got on every word of the list.

use crate::core::GameState;
use crate::session::{GameStateStore, stored_device_id};
use crate::storage::KeyValueStore;
use crate::wordlists::WordList;

/// How a single word stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOutcome {
    /// No board saved
    Unplayed,
    /// Started, not finished
    InProgress { rows_scored: usize },
    /// Guessed correctly on guess number `guesses`
    Solved { guesses: usize },
    /// All attempts used
    Failed,
}

impl WordOutcome {
    #[must_use]
    pub fn from_state(state: Option<&GameState>) -> Self {
        match state {
            None => Self::Unplayed,
            Some(state) if state.is_solved() => Self::Solved {
                guesses: state.rows_scored(),
            },
            Some(state) if state.can_advance => Self::Failed,
            Some(state) => Self::InProgress {
                rows_scored: state.rows_scored(),
            },
        }
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Failed)
    }
}

/// Progress on one list entry
#[derive(Debug, Clone)]
pub struct WordProgress {
    pub index: usize,
    pub outcome: WordOutcome,
    /// The target, only revealed once the word is finished
    pub revealed: Option<String>,
}

/// Progress over the whole list
#[derive(Debug, Clone)]
pub struct ProgressReport {
    pub version: String,
    pub current_index: usize,
    pub words: Vec<WordProgress>,
}

impl ProgressReport {
    #[must_use]
    pub fn finished(&self) -> usize {
        self.words.iter().filter(|w| w.outcome.is_finished()).count()
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.words
            .iter()
            .filter(|w| matches!(w.outcome, WordOutcome::Solved { .. }))
            .count()
    }
}

/// Build a progress report for one device
pub fn collect_progress<S: KeyValueStore>(
    store: &GameStateStore<S>,
    device_id: &str,
    list: &WordList,
    current_index: usize,
) -> ProgressReport {
    let words = list
        .words()
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let outcome = WordOutcome::from_state(store.load(device_id, index).as_ref());
            WordProgress {
                index,
                outcome,
                revealed: outcome.is_finished().then(|| word.text().to_string()),
            }
        })
        .collect();

    ProgressReport {
        version: list.version().to_string(),
        current_index,
        words,
    }
}

/// Build a progress report from whatever this store already holds
///
/// Never writes. A device that has not played yet, or whose saved progress
/// belongs to another list version, reports every word as unplayed and the
/// first word as current, which is what the next session would start with.
pub fn read_progress<S: KeyValueStore>(
    store: &GameStateStore<S>,
    list: &WordList,
) -> ProgressReport {
    let device_id = stored_device_id(store.backend())
        .filter(|id| store.stored_version(id).as_deref() == Some(list.version()));

    let Some(device_id) = device_id else {
        return ProgressReport {
            version: list.version().to_string(),
            current_index: 0,
            words: (0..list.len())
                .map(|index| WordProgress {
                    index,
                    outcome: WordOutcome::Unplayed,
                    revealed: None,
                })
                .collect(),
        };
    };

    let current_index = store
        .last_index(&device_id)
        .map_or(0, |i| i.min(list.last_index()));
    collect_progress(store, &device_id, list, current_index)
}

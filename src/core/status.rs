//! Letter statuses and guess evaluation
//!
//! Each guessed letter is scored as one of:
//! - Absent (letter not in the target)
//! - Present (letter somewhere in the target, wrong position)
//! - Correct (letter in the correct position)
//!
//! Scoring uses a plain membership test for `Present`: every occurrence of a
//! letter that appears anywhere in the target is marked, regardless of how many
//! copies of that letter the target actually holds.

use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Correctness of a single letter
///
/// Variants are declared in ascending rank so that the derived `Ord`
/// gives `Unset < Absent < Present < Correct`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Not yet scored
    #[default]
    Unset,
    /// Not in the target word
    Absent,
    /// In the target word at another position
    Present,
    /// In the target word at this position
    Correct,
}

impl LetterStatus {
    /// Combine a known status with a newly observed one, never lowering the rank
    #[inline]
    #[must_use]
    pub fn upgrade(self, observed: Self) -> Self {
        self.max(observed)
    }

    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unset => '▫',
        }
    }
}

/// Per-position result of scoring one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    guess: [u8; WORD_LENGTH],
    statuses: [LetterStatus; WORD_LENGTH],
}

impl Evaluation {
    /// Statuses in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.statuses
    }

    /// Guessed letters paired with their statuses
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        self.guess.iter().copied().zip(self.statuses.iter().copied())
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Convert evaluation to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses.iter().map(|s| s.emoji()).collect()
    }
}

/// Score `guess` against `target`
///
/// # Examples
/// ```
/// use wordle_engine::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// let evaluation = evaluate(&guess, &target);
///
/// assert_eq!(evaluation.statuses()[2], LetterStatus::Correct);
/// assert_eq!(evaluation.to_emoji(), "⬜⬜🟩⬜🟩");
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Evaluation {
    let mut statuses = [LetterStatus::Absent; WORD_LENGTH];

    for (i, status) in statuses.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == target.char_at(i) {
            *status = LetterStatus::Correct;
        } else if target.has_letter(letter) {
            *status = LetterStatus::Present;
        }
    }

    Evaluation {
        guess: *guess.chars(),
        statuses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> [LetterStatus; WORD_LENGTH] {
        *evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).statuses()
    }

    use LetterStatus::{Absent, Correct, Present, Unset};

    #[test]
    fn status_ordering() {
        assert!(Unset < Absent);
        assert!(Absent < Present);
        assert!(Present < Correct);
    }

    #[test]
    fn upgrade_never_lowers() {
        assert_eq!(Correct.upgrade(Absent), Correct);
        assert_eq!(Correct.upgrade(Present), Correct);
        assert_eq!(Present.upgrade(Absent), Present);
        assert_eq!(Absent.upgrade(Present), Present);
        assert_eq!(Unset.upgrade(Absent), Absent);
    }

    #[test]
    fn all_correct_when_guess_equals_target() {
        for word in ["blend", "watch", "aaaaa", "zzzzz"] {
            let w = Word::new(word).unwrap();
            let evaluation = evaluate(&w, &w);
            assert!(evaluation.is_solved());
            assert_eq!(evaluation.statuses(), &[Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn all_absent_when_no_shared_letters() {
        let statuses = score("blimp", "watch");
        assert_eq!(statuses, [Absent; WORD_LENGTH]);
    }

    #[test]
    fn membership_rule_marks_every_present_letter() {
        // C, H, A, T all appear in WATCH but none in place
        assert_eq!(
            score("chats", "watch"),
            [Present, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn repeated_letters_are_not_rationed() {
        // WATCH has a single T; every misplaced T is still Present
        assert_eq!(
            score("ttttt", "watch"),
            [Present, Present, Correct, Present, Present]
        );

        // SPEED vs ERASE: both Es present even beside the sole S
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn mixed_example() {
        assert_eq!(
            score("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn letters_pair_guess_with_status() {
        let evaluation = evaluate(&Word::new("bland").unwrap(), &Word::new("blend").unwrap());
        let pairs: Vec<_> = evaluation.letters().collect();
        assert_eq!(pairs[0], (b'B', Correct));
        assert_eq!(pairs[2], (b'A', Absent));
        assert_eq!(pairs[4], (b'D', Correct));
        assert!(!evaluation.is_solved());
    }

    #[test]
    fn emoji_rendering() {
        let evaluation = evaluate(&Word::new("chats").unwrap(), &Word::new("watch").unwrap());
        assert_eq!(evaluation.to_emoji(), "🟨🟨🟨🟨⬜");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Correct).unwrap(), "\"correct\"");
        assert_eq!(
            serde_json::from_str::<LetterStatus>("\"present\"").unwrap(),
            Present
        );
    }
}

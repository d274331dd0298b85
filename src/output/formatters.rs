//! Formatting utilities for terminal output

use crate::core::{Cell, LetterStatus, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Format a row of cells as an emoji string, e.g. "🟩🟨⬜⬜🟩"
#[must_use]
pub fn row_to_emoji(row: &[Cell; WORD_LENGTH]) -> String {
    row.iter().map(|cell| cell.status.emoji()).collect()
}

/// Render one cell as a colored, padded letter tile
#[must_use]
pub fn colored_cell(cell: &Cell) -> ColoredString {
    let tile = format!(" {} ", cell.letter.unwrap_or('_'));
    colored_status(&tile, cell.status)
}

/// Color arbitrary text by letter status
#[must_use]
pub fn colored_status(text: &str, status: LetterStatus) -> ColoredString {
    match status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
        LetterStatus::Unset => text.bright_white(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(letter: char, status: LetterStatus) -> Cell {
        Cell {
            letter: Some(letter),
            status,
        }
    }

    #[test]
    fn row_to_emoji_mixed() {
        let row = [
            cell('C', LetterStatus::Present),
            cell('R', LetterStatus::Absent),
            cell('A', LetterStatus::Correct),
            cell('N', LetterStatus::Absent),
            cell('E', LetterStatus::Correct),
        ];
        assert_eq!(row_to_emoji(&row), "🟨⬜🟩⬜🟩");
    }

    #[test]
    fn colored_cell_shows_placeholder_for_empty() {
        colored::control::set_override(false);
        assert_eq!(colored_cell(&Cell::default()).to_string(), " _ ");
        assert_eq!(
            colored_cell(&cell('Q', LetterStatus::Unset)).to_string(),
            " Q "
        );
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_empty_list() {
        assert_eq!(create_progress_bar(0, 0, 4), "░░░░");
    }
}

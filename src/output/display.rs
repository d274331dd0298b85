//! Display functions for boards and command results

use super::formatters::{colored_cell, colored_status, create_progress_bar, row_to_emoji};
use crate::commands::{ProgressReport, WordOutcome};
use crate::core::{GameState, KEYBOARD_ROWS, KeyboardStatusMap, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the guess grid, one colored row per attempt
pub fn print_board(state: &GameState) {
    println!();
    for row in &state.grid {
        let tiles: Vec<String> = row.iter().map(|cell| colored_cell(cell).to_string()).collect();
        println!("   {}", tiles.join(" "));
    }
    println!();
}

/// Print the on-screen keyboard colored by best-known status
pub fn print_keyboard(keyboard: &KeyboardStatusMap) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|letter| {
                colored_status(&char::from(letter).to_string(), keyboard.get(letter)).to_string()
            })
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
    println!();
}

/// Print the emoji summary of every scored row
pub fn print_share_grid(state: &GameState) {
    for row in state.grid.iter().take(state.rows_scored()) {
        println!("   {}", row_to_emoji(row));
    }
}

/// Print a progress report
pub fn print_progress(report: &ProgressReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} (list version {})",
        "PROGRESS".bright_cyan().bold(),
        report.version.bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = report.words.len();
    println!(
        "\n   [{}] {}/{} finished, {} solved\n",
        create_progress_bar(report.finished(), total, 30).green(),
        report.finished(),
        total,
        report.solved()
    );

    for word in &report.words {
        let marker = if word.index == report.current_index {
            "▶".bright_yellow().to_string()
        } else {
            " ".to_string()
        };
        let outcome = match word.outcome {
            WordOutcome::Unplayed => "not started".bright_black().to_string(),
            WordOutcome::InProgress { rows_scored } => {
                format!("in progress ({rows_scored}/{MAX_ATTEMPTS})").yellow().to_string()
            }
            WordOutcome::Solved { guesses } => format!("solved in {guesses}").green().to_string(),
            WordOutcome::Failed => "failed".red().to_string(),
        };
        let revealed = word.revealed.as_deref().unwrap_or("?????");
        println!(" {marker} {:>3}. {revealed}  {outcome}", word.index + 1);
    }
    println!();
}

//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess or a command.

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::output::{print_board, print_keyboard, print_share_grid};
use crate::session::{GameSession, MSG_INCOMPLETE, MSG_INVALID, WordValidator};
use crate::storage::KeyValueStore;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Quit,
    Next,
    Prev,
    Reset,
    Help,
    Guess(String),
}

fn parse_input(line: &str) -> Input {
    match line.trim().to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => Input::Quit,
        ":n" | ":next" => Input::Next,
        ":p" | ":prev" => Input::Prev,
        ":reset" => Input::Reset,
        ":h" | ":help" | "?" => Input::Help,
        other => Input::Guess(other.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S, V>(session: &mut GameSession<S>, validator: &V) -> Result<(), String>
where
    S: KeyValueStore,
    V: WordValidator + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    loop {
        print_position(session);
        print_board(session.state());
        print_keyboard(session.keyboard());
        println!("   {}\n", session.message().bright_white().bold());

        let Some(line) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::Next => {
                if !session.next_word() {
                    println!("{}", "Can't move forward yet.".red());
                }
            }
            Input::Prev => {
                if !session.prev_word() {
                    println!("{}", "Already at the first word.".red());
                }
            }
            Input::Reset => session.reset_word(),
            Input::Help => print_help(),
            Input::Guess(word) => {
                if session.phase().is_terminal() {
                    println!("{}", "This word is finished. Use :next or :prev.".yellow());
                    continue;
                }
                play_guess(session, validator, &word);
                if session.phase().is_terminal() {
                    print_share_grid(session.state());
                }
            }
        }
    }
}

/// Replace the current row with `word` and submit it
///
/// Input that could never fill the row as typed (too long, or containing
/// anything but letters) is rejected without touching the board.
fn play_guess<S, V>(session: &mut GameSession<S>, validator: &V, word: &str)
where
    S: KeyValueStore,
    V: WordValidator + ?Sized,
{
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        session.reject_input(MSG_INVALID);
        return;
    }
    if word.len() > WORD_LENGTH {
        session.reject_input(MSG_INCOMPLETE);
        return;
    }

    while session.backspace() {}
    for letter in word.chars() {
        session.key_press(letter);
    }

    let Some(pending) = session.enter() else {
        return;
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Checking {}...", pending.word().to_uppercase()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = validator.validate(pending.word());
    spinner.finish_and_clear();

    session.complete_validation(pending, outcome);
}

fn print_position<S: KeyValueStore>(session: &GameSession<S>) {
    let state = session.state();
    let attempt = (state.current_row + 1).min(MAX_ATTEMPTS);
    println!(
        "{}",
        format!(
            "──── Word {}/{} · attempt {attempt}/{MAX_ATTEMPTS} ────",
            session.word_index() + 1,
            session.word_list().len()
        )
        .cyan()
    );
}

fn print_help() {
    println!("Type a 5-letter guess and press Enter.");
    println!("  🟩 right letter, right spot   🟨 in the word   ⬜ not in the word");
    println!("Commands: ':next', ':prev', ':reset', ':help', ':quit'\n");
}

/// Get user input with a prompt; `None` on end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

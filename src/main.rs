//! Wordle - CLI
//!
//! Play through a fixed word list in a TUI or line mode, with progress kept
//! per device in a local JSON file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_engine::{
    commands::{read_progress, run_simple},
    output::print_progress,
    session::{DictionaryValidator, GameSession, GameStateStore, SessionConfig, TimeoutValidator},
    storage::{FileStore, KeyValueStore, MemoryStore},
    wordlists::{
        WordList,
        loader::{load_dictionary, load_word_list},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Wordle over a fixed word list with resumable progress",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Progress file (default: per-user data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Target word list, one word per line, optional '# version: <tag>' header
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary of accepted guesses (default: built-in list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Allow moving to the next word before the current one is finished
    #[arg(long, global = true)]
    no_gate: bool,

    /// Give up on a word check after this many milliseconds
    #[arg(long, global = true, default_value = "3000")]
    timeout_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Show progress across the whole word list
    Status,

    /// Clear the current word's board
    Reset {
        /// Erase every saved board and start over from the first word
        #[arg(short, long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();

    let list = load_targets(cli.wordlist.as_deref())?;
    let config = SessionConfig::new(!cli.no_gate, Duration::from_millis(cli.timeout_ms));
    let store = open_store(cli.store);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Reporting must not create or reconcile anything in the store
    if matches!(command, Commands::Status) {
        print_progress(&read_progress(&GameStateStore::new(store), &list));
        return Ok(());
    }

    let mut session =
        GameSession::start(store, list, config).context("Failed to start game session")?;

    match command {
        Commands::Play => {
            use wordle_engine::interactive::{App, run_tui};

            let validator = load_validator(cli.dictionary.as_deref(), config)?;
            run_tui(App::new(session, validator))
        }
        Commands::Simple => {
            let validator = load_validator(cli.dictionary.as_deref(), config)?;
            run_simple(&mut session, &validator).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Status => Ok(()),
        Commands::Reset { all } => {
            if all {
                session.reset_progress();
                println!("All progress cleared.");
            } else {
                session.reset_word();
                println!("Word {} cleared.", session.word_index() + 1);
            }
            Ok(())
        }
    }
}

/// Load the target list from `path`, or the built-in one
fn load_targets(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => load_word_list(path)
            .with_context(|| format!("Failed to load word list from {}", path.display())),
        None => Ok(WordList::embedded()),
    }
}

/// Open the progress store
///
/// Falls back to an in-memory store when no data directory can be found or
/// the progress file cannot be read, so the game stays playable without
/// persistence.
fn open_store(path: Option<PathBuf>) -> Box<dyn KeyValueStore> {
    let Some(path) = path.or_else(FileStore::default_path) else {
        log::warn!("no data directory available; progress will not be saved");
        return Box::new(MemoryStore::new());
    };

    match FileStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!(
                "cannot open progress file {}: {e}; progress will not be saved",
                path.display()
            );
            eprintln!("Warning: progress file {} is unavailable ({e})", path.display());
            Box::new(MemoryStore::new())
        }
    }
}

fn load_validator(
    path: Option<&Path>,
    config: SessionConfig,
) -> Result<TimeoutValidator<DictionaryValidator>> {
    let dictionary = match path {
        Some(path) => DictionaryValidator::new(
            load_dictionary(path)
                .with_context(|| format!("Failed to load dictionary from {}", path.display()))?,
        ),
        None => DictionaryValidator::embedded(),
    };
    log::debug!("dictionary has {} words", dictionary.len());

    Ok(TimeoutValidator::new(
        dictionary,
        config.validation_timeout,
    ))
}

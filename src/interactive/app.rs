//! TUI application state and logic

use crate::session::{GameSession, WordValidator};
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Backspace,
    Submit,
    Next,
    Prev,
    ResetWord,
    ToggleHelp,
    Quit,
    None,
}

impl Action {
    /// Map a terminal key event to an action
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::ResetWord
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Self::Letter(c),
            KeyCode::Char('?') | KeyCode::F(1) => Self::ToggleHelp,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Submit,
            KeyCode::Right | KeyCode::Tab => Self::Next,
            KeyCode::Left | KeyCode::BackTab => Self::Prev,
            KeyCode::Esc => Self::Quit,
            _ => Self::None,
        }
    }
}

/// Application state
pub struct App<S, V> {
    pub session: GameSession<S>,
    pub validator: V,
    pub show_help: bool,
    pub should_quit: bool,
}

impl<S: KeyValueStore, V: WordValidator> App<S, V> {
    #[must_use]
    pub const fn new(session: GameSession<S>, validator: V) -> Self {
        Self {
            session,
            validator,
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply one action to the session
    ///
    /// The TUI loop handles `Submit` itself so it can redraw the checking state
    /// before validating; here it validates in one step.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Letter(c) => {
                self.session.key_press(c);
            }
            Action::Backspace => {
                self.session.backspace();
            }
            Action::Submit => {
                self.session.submit(&self.validator);
            }
            Action::Next => {
                self.session.next_word();
            }
            Action::Prev => {
                self.session.prev_word();
            }
            Action::ResetWord => self.session.reset_word(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, V: WordValidator>(app: App<S, V>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, V>(terminal: &mut Terminal<B>, mut app: App<S, V>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: KeyValueStore,
    V: WordValidator,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match Action::from_key(key) {
                Action::Submit => {
                    if let Some(pending) = app.session.enter() {
                        // Redraw so the board shows the checking state
                        terminal.draw(|f| super::rendering::ui(f, &app))?;
                        let outcome = app.validator.validate(pending.word());
                        app.session.complete_validation(pending, outcome);
                    }
                }
                action => app.handle(action),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionConfig, SessionPhase, Validation};
    use crate::storage::MemoryStore;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn accept_all(_: &str) -> Validation {
        Validation::Valid
    }

    fn app() -> App<MemoryStore, fn(&str) -> Validation> {
        let list = WordList::new(words_from_slice(&["blend", "watch"]), "1");
        let session = GameSession::start(MemoryStore::new(), list, SessionConfig::default())
            .expect("non-empty list");
        App::new(session, accept_all as fn(&str) -> Validation)
    }

    #[test]
    fn key_mapping() {
        assert_eq!(Action::from_key(key(KeyCode::Char('a'))), Action::Letter('a'));
        assert_eq!(Action::from_key(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(Action::from_key(key(KeyCode::Backspace)), Action::Backspace);
        assert_eq!(Action::from_key(key(KeyCode::Right)), Action::Next);
        assert_eq!(Action::from_key(key(KeyCode::Left)), Action::Prev);
        assert_eq!(Action::from_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(Action::from_key(key(KeyCode::Char('1'))), Action::None);
        assert_eq!(
            Action::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn actions_drive_the_session() {
        let mut app = app();
        for c in "blend".chars() {
            app.handle(Action::Letter(c));
        }
        app.handle(Action::Submit);
        assert_eq!(app.session.phase(), SessionPhase::Solved);

        app.handle(Action::Next);
        assert_eq!(app.session.word_index(), 1);
        app.handle(Action::Prev);
        assert_eq!(app.session.word_index(), 0);

        app.handle(Action::ToggleHelp);
        assert!(app.show_help);
        app.handle(Action::Quit);
        assert!(app.should_quit);
    }
}

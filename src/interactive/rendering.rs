//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game screen.

use super::app::App;
use crate::core::{Cell, KEYBOARD_ROWS, LetterStatus, MAX_ATTEMPTS};
use crate::session::{SessionPhase, WordValidator};
use crate::storage::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore, V: WordValidator>(f: &mut Frame, app: &App<S, V>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Min(3),     // Message
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_help {
        let area = f.area();
        render_help(f, area);
    }
}

const fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unset => Style::new().fg(Color::White),
    }
}

fn render_header<S: KeyValueStore, V: WordValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let session = &app.session;
    let title = format!(
        "WORDLE - Word {}/{} (list v{})",
        session.word_index() + 1,
        session.word_list().len(),
        session.word_list().version()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile(cell: &Cell, cursor: bool) -> Span<'static> {
    let letter = cell.letter.unwrap_or(if cursor { '_' } else { '·' });
    let style = status_style(cell.status).add_modifier(Modifier::BOLD);
    Span::styled(format!(" {letter} "), style)
}

fn render_board<S: KeyValueStore, V: WordValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let state = app.session.state();
    let active = !app.session.phase().is_terminal();

    let mut lines = Vec::with_capacity(state.grid.len() * 2);
    for (row_index, row) in state.grid.iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (col_index, cell) in row.iter().enumerate() {
            let cursor =
                active && row_index == state.current_row && col_index == state.current_col;
            if col_index > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile(cell, cursor));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: KeyValueStore, V: WordValidator>(
    f: &mut Frame,
    app: &App<S, V>,
    area: Rect,
) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter)),
                            status_style(keyboard.get(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_message<S: KeyValueStore, V: WordValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let phase = app.session.phase();
    let (text, color) = match phase {
        SessionPhase::Validating => ("Checking...", Color::Cyan),
        SessionPhase::Solved => (app.session.message(), Color::Green),
        SessionPhase::Exhausted => (app.session.message(), Color::Red),
        SessionPhase::Entering | SessionPhase::RowFull => (app.session.message(), Color::White),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status<S: KeyValueStore, V: WordValidator>(f: &mut Frame, app: &App<S, V>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let session = &app.session;
    let attempt = format!(
        "Attempt: {}/{}",
        (session.state().current_row + 1).min(MAX_ATTEMPTS),
        MAX_ATTEMPTS
    );
    f.render_widget(
        Paragraph::new(attempt).alignment(Alignment::Center),
        chunks[0],
    );

    let nav = Line::from(vec![
        nav_span("← Prev", session.can_go_prev()),
        Span::raw("  "),
        nav_span("Next →", session.can_go_next()),
    ]);
    f.render_widget(Paragraph::new(nav).alignment(Alignment::Center), chunks[1]);

    let help = Paragraph::new("Enter: Submit | Ctrl-R: Reset | ?: Help | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn nav_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered(area, 50, 12);
    let lines = vec![
        Line::from("Guess the hidden five-letter word in six tries."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", status_style(LetterStatus::Correct)),
            Span::raw(" right letter, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" A ", status_style(LetterStatus::Present)),
            Span::raw(" letter is in the word"),
        ]),
        Line::from(vec![
            Span::styled(" A ", status_style(LetterStatus::Absent)),
            Span::raw(" letter is not in the word"),
        ]),
        Line::from(""),
        Line::from("←/→ or Shift-Tab/Tab move between words."),
        Line::from("Press ? again to close."),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        ),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

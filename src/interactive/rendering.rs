//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, LetterStatus};
use crate::dictionary::DictionaryProvider;
use crate::engine::GameStatus;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: DictionaryProvider + ?Sized>(f: &mut Frame, app: &App<'_, D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn feedback_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_board<D: DictionaryProvider + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let state = &app.state;
    let row_length = state.config().row_length();
    let mut lines = vec![Line::from("")];

    for row in state.history() {
        let spans: Vec<Span> = row
            .guess
            .letters()
            .iter()
            .zip(row.feedback.as_slice())
            .flat_map(|(&letter, &feedback)| {
                [
                    Span::styled(format!(" {} ", char::from(letter)), feedback_style(Some(feedback))),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for index in state.history().len()..state.config().max_rows() {
        let typed: Vec<char> = if index == state.current_row_index() && !state.status().is_over() {
            state.current_guess().chars().collect()
        } else {
            Vec::new()
        };

        let spans: Vec<Span> = (0..row_length)
            .flat_map(|i| {
                let tile = typed.get(i).map_or_else(
                    || Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    |c| Span::styled(format!("[{c}]"), feedback_style(None).add_modifier(Modifier::BOLD)),
                );
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Board {}/{} ",
                state.current_row_index(),
                state.config().max_rows()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel<D: DictionaryProvider + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app.state.letter_status(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, status: &LetterStatus, area: Rect) {
    let mut lines = vec![Line::from("")];
    for keys in KEYBOARD_ROWS {
        let spans: Vec<Span> = keys
            .chars()
            .flat_map(|key| {
                let style = match status.get(key) {
                    Some(Feedback::Absent) => Style::default().fg(Color::DarkGray),
                    other => feedback_style(other),
                };
                [Span::styled(format!(" {key} "), style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<D: DictionaryProvider + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<D: DictionaryProvider + ?Sized>(f: &mut Frame, app: &App<'_, D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.state.status() {
        GameStatus::InProgress => format!("Tries left: {}", app.state.remaining_rows()),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of tries".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!("Streak: {}", app.stats.current_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if app.is_game_over() {
        "q: Quit | n/Enter: New Game"
    } else {
        "Esc: Quit | Enter: Submit | ^N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

//! TUI application state and logic

use crate::dictionary::DictionaryProvider;
use crate::engine::{GameConfig, GameState, GameStatus, SessionStats, SubmitResult};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, D: DictionaryProvider + ?Sized> {
    pub dictionary: &'a D,
    pub config: GameConfig,
    pub state: GameState,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl<'a, D: DictionaryProvider + ?Sized> App<'a, D> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no secret of the configured length can be chosen.
    pub fn new(dictionary: &'a D, config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let (state, source) = GameState::start_with_rng(dictionary, config.clone(), &mut rng)?;

        let mut app = Self {
            dictionary,
            config,
            state,
            messages: Vec::new(),
            stats: SessionStats::default(),
            should_quit: false,
            rng,
        };

        app.add_message(
            &format!(
                "Welcome! Guess the {}-letter word in {} tries.",
                app.config.row_length(),
                app.config.max_rows()
            ),
            MessageStyle::Info,
        );
        if let Some(warning) = source.warning() {
            app.add_message(&warning, MessageStyle::Warning);
        }

        Ok(app)
    }

    /// Discard the current game and start another
    pub fn new_game(&mut self) {
        match GameState::start_with_rng(self.dictionary, self.config.clone(), &mut self.rng) {
            Ok((state, source)) => {
                self.state = state;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                if let Some(warning) = source.warning() {
                    self.add_message(&warning, MessageStyle::Warning);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn type_letter(&mut self, letter: char) {
        self.state.append_letter(letter);
    }

    pub fn delete_letter(&mut self) {
        self.state.delete_last_letter();
    }

    pub fn submit(&mut self) {
        match self.state.submit_guess(self.dictionary) {
            SubmitResult::Rejected(reason) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
            SubmitResult::Accepted { outcome, .. } if outcome.is_terminal() => {
                self.stats.record(&self.state);
                if let Some(summary) = self.state.summary(self.dictionary) {
                    let style = if summary.status == GameStatus::Won {
                        MessageStyle::Success
                    } else {
                        MessageStyle::Error
                    };
                    self.add_message(&summary.headline(), style);
                    if let Some(meaning) = summary.meaning() {
                        self.add_message(&meaning, MessageStyle::Info);
                    }
                }
                self.add_message("Press Enter or 'n' to play again, 'q' to quit.", MessageStyle::Info);
            }
            SubmitResult::Accepted { .. } => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.status().is_over()
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.is_game_over() => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: DictionaryProvider + ?Sized>(app: App<'_, D>) -> Result<()> {
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

fn run_app<B, D>(terminal: &mut Terminal<B>, mut app: App<'_, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: DictionaryProvider + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

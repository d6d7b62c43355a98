//! TUI application state and logic

use crate::core::Color;
use crate::engine::{Game, GameConfig, GameStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Wraps one `Game` and the presentation-only state around it: messages,
/// session statistics, quit flag. Everything shown on the board is re-read
/// from the engine's queries after each key press.
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, kept outside the engine
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by attempts used; slot 0 is unused
    pub attempt_distribution: Vec<usize>,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let distribution = vec![0; config.max_attempts() + 1];
        let mut game = Game::new(config);
        game.start();

        Self {
            game,
            messages: vec![
                Message {
                    text: "I picked a secret code. Break it!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Pick colors with their keys, Enter submits, Backspace removes."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                attempt_distribution: distribution,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Append a color to the current guess
    pub fn select(&mut self, color: Color) {
        if self.game.status().is_over() {
            self.add_message("Game over - press 'n' for a new game.", MessageStyle::Info);
            return;
        }
        if self.game.is_submitable() {
            self.add_message("Row is full - Enter submits, Backspace edits.", MessageStyle::Info);
            return;
        }
        self.game.select(color);
    }

    /// Remove the last selected color
    pub fn deselect(&mut self) {
        self.game.deselect();
    }

    /// Submit the current row and react to the outcome
    pub fn submit_guess(&mut self) {
        if self.game.status().is_over() {
            self.add_message("Game over - press 'n' for a new game.", MessageStyle::Info);
            return;
        }
        if !self.game.is_submitable() {
            self.add_message(
                &format!("Fill all {} slots first!", self.game.code_length()),
                MessageStyle::Error,
            );
            return;
        }

        self.game.submit();

        match self.game.status() {
            GameStatus::Won => {
                let attempts = self.game.attempts_committed();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.attempt_distribution.get_mut(attempts) {
                    *slot += 1;
                }

                let celebration = match attempts {
                    1 => "🏆 FIRST TRY! Unbelievable!",
                    2 => "🔥 MAGNIFICENT! Two attempts!",
                    3 => "✨ SPLENDID! Three attempts!",
                    _ => "🎉 CODE BROKEN!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.add_message("💥 Out of attempts! The code is revealed.", MessageStyle::Error);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress | GameStatus::Idle => {
                let left = self.game.max_attempts() - self.game.attempts_committed();
                self.add_message(
                    &format!("{left} {} remaining", if left == 1 { "attempt" } else { "attempts" }),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Start over with a fresh goal
    pub fn new_game(&mut self) {
        self.game.start();
        self.messages.clear();
        self.add_message("New game started! The code awaits.", MessageStyle::Info);
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

    /// Map a pressed key to a palette color
    ///
    /// Accepts a color's key letter or its 1-based palette position.
    #[must_use]
    pub fn color_for_key(&self, key: char) -> Option<Color> {
        let palette = self.game.palette();

        if let Some(digit) = key.to_digit(10) {
            let index = usize::try_from(digit).ok()?.checked_sub(1)?;
            return palette.get(index).copied();
        }

        Color::from_key(key).filter(|color| palette.contains(color))
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => {
                    app.new_game();
                }
                KeyCode::Backspace => {
                    app.deselect();
                }
                KeyCode::Enter => {
                    app.submit_guess();
                }
                KeyCode::Char(c) => {
                    if let Some(color) = app.color_for_key(c) {
                        app.select(color);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::game::{GameEngine, Outcome, Statistics};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'d> {
    pub dictionary: &'d Dictionary,
    pub game: GameEngine<'d>,
    pub rng: StdRng,
    /// Next grid row to fill
    pub row: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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
    Error,
}

impl<'d> App<'d> {
    /// Create the app with its first game
    ///
    /// # Errors
    ///
    /// Returns an error if `secret` is not a possible secret, or if the
    /// dictionary has no secrets to draw from.
    pub fn new(dictionary: &'d Dictionary, secret: Option<&str>, mut rng: StdRng) -> Result<Self> {
        let game = match secret {
            Some(word) => GameEngine::new(dictionary, word)?,
            None => GameEngine::with_random_secret(dictionary, &mut rng)?,
        };

        let welcome = format!(
            "Welcome! Guess the {}-letter word in {} tries.",
            game.cols(),
            game.rows()
        );

        Ok(Self {
            dictionary,
            game,
            rng,
            row: 0,
            input_buffer: String::new(),
            messages: vec![Message {
                text: welcome,
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Type a letter into the current guess
    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < self.game.cols()
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess for the current row
    pub fn submit_guess(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }
        if self.input_buffer.len() != self.game.cols() {
            self.add_message(
                &format!("Guess must be exactly {} letters!", self.game.cols()),
                MessageStyle::Error,
            );
            return;
        }

        let guess = std::mem::take(&mut self.input_buffer);
        let summary = match self.game.evaluate_guess(&guess) {
            Ok(Some(feedback)) => format!(
                "{guess}: {} in place, {} elsewhere",
                feedback.count_in_position(),
                feedback.count_in_word()
            ),
            Ok(None) => {
                self.add_message(&format!("{guess} is not in the word list"), MessageStyle::Error);
                self.input_buffer = guess;
                return;
            }
            Err(err) => {
                debug!(%err, "guess refused");
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.game.process_guess(&guess, self.row) {
            Ok(_) => {
                self.row += 1;
                self.add_message(&summary, MessageStyle::Info);
                if let Some(outcome) = Outcome::of(&self.game, self.row) {
                    self.finish_game(outcome);
                }
            }
            Err(err) => {
                debug!(%err, "guess refused");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self, outcome: Outcome) {
        self.stats.record(outcome);
        self.input_mode = InputMode::GameOver;

        match outcome {
            Outcome::Won(guesses) => {
                let celebration = match guesses {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            Outcome::Lost => {
                let text = format!("Out of guesses! The word was {}", self.game.secret_word());
                self.add_message(&text, MessageStyle::Error);
            }
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new game with a random secret
    pub fn new_game(&mut self) {
        match GameEngine::with_random_secret(self.dictionary, &mut self.rng) {
            Ok(game) => {
                self.game = game;
                self.row = 0;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Char('n')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::GameOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Guessing, KeyCode::Char(c)) => app.push_char(c),
                (InputMode::Guessing, KeyCode::Backspace) => app.pop_char(),
                (InputMode::Guessing, KeyCode::Enter) => app.submit_guess(),
                _ => {}
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
    use crate::core::Status;
    use rand::SeedableRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["crane", "slate", "react", "moist", "plumb", "ghost", "towel"],
            ["crane", "slate"],
        )
        .unwrap()
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(dictionary, Some("CRANE"), StdRng::seed_from_u64(9)).unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn typing_is_uppercased_and_limited() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "slat3es");
        assert_eq!(app.input_buffer, "SLATE");
        app.pop_char();
        assert_eq!(app.input_buffer, "SLAT");
    }

    #[test]
    fn short_guess_is_refused() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "sla");
        app.submit_guess();
        assert_eq!(app.row, 0);
        assert_eq!(app.input_buffer, "SLA");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn unknown_word_keeps_input() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "zzzzz");
        app.submit_guess();
        assert_eq!(app.row, 0);
        assert_eq!(app.input_buffer, "ZZZZZ");
        assert!(app.messages.last().unwrap().text.contains("not in the word list"));
    }

    #[test]
    fn accepted_guess_fills_row() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "slate");
        app.submit_guess();
        assert_eq!(app.row, 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(
            app.game.grid_letter_status(0, 2).unwrap(),
            Status::InPosition
        );
        assert_eq!(
            app.messages.last().unwrap().text,
            "SLATE: 2 in place, 0 elsewhere"
        );
    }

    #[test]
    fn win_then_new_game() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "crane");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);

        // Typing is ignored once the game is over
        app.push_char('a');
        assert!(app.input_buffer.is_empty());

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.row, 0);
        assert!(!app.game.is_over());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn loss_reveals_word() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for word in ["slate", "moist", "plumb", "ghost", "towel", "react"] {
            type_word(&mut app, word);
            app.submit_guess();
        }
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("The word was CRANE"))
        );
    }

    #[test]
    fn messages_are_capped() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}

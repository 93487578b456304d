//! Game session engine
//!
//! Owns the board of one session and drives its state machine:
//!
//! ```text
//! InProgress --guess == secret--> WonGame
//! InProgress --last row used----> ExhaustedGuesses
//! ```
//!
//! Both terminal states are final for the lifetime of the session.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use super::evaluation::{Feedback, score};
use crate::core::{Alphabet, Grid, Status};
use crate::error::{GameError, Result};
use crate::wordlists::Dictionary;

/// Default number of guesses per game
pub const ROWS: usize = 6;

/// Default word length
pub const COLS: usize = crate::wordlists::DEFAULT_WORD_LEN;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    InProgress,
    /// The secret word was guessed
    WonGame,
    /// The last row was used without guessing the secret
    ExhaustedGuesses,
}

impl GameState {
    /// Whether no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::WonGame => "won",
            Self::ExhaustedGuesses => "out of guesses",
        })
    }
}

/// One game session
///
/// The engine owns the session's [`Alphabet`] and [`Grid`] and borrows the
/// [`Dictionary`] guesses are validated against. The caller chooses which
/// grid row each guess is written to.
///
/// # Examples
/// ```
/// use wolfle::game::{GameEngine, GameState};
/// use wolfle::wordlists::Dictionary;
///
/// let dictionary = Dictionary::embedded().unwrap();
/// let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();
///
/// assert!(!game.process_guess("XXXXX", 0).unwrap()); // not a word
/// assert!(game.process_guess("REACT", 0).unwrap());
/// assert!(game.process_guess("CRANE", 1).unwrap());
/// assert_eq!(game.state(), GameState::WonGame);
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine<'d> {
    dictionary: &'d Dictionary,
    secret: String,
    alphabet: Alphabet,
    grid: Grid,
    state: GameState,
}

impl<'d> GameEngine<'d> {
    /// Start a game of [`ROWS`] guesses with an explicit secret word
    ///
    /// # Errors
    /// Returns [`GameError::SecretNotInList`] if `secret` is not exactly one
    /// of the dictionary's possible secrets.
    pub fn new(dictionary: &'d Dictionary, secret: &str) -> Result<Self> {
        Self::with_rows(dictionary, secret, ROWS)
    }

    /// Start a game with an explicit secret and a custom number of rows
    ///
    /// The grid has one column per letter of the dictionary's words.
    ///
    /// # Errors
    /// Returns [`GameError::SecretNotInList`] if `secret` is not a possible
    /// secret, or [`GameError::InvalidDimensions`] if `rows` is zero.
    pub fn with_rows(dictionary: &'d Dictionary, secret: &str, rows: usize) -> Result<Self> {
        if !dictionary.is_secret(secret) {
            return Err(GameError::SecretNotInList(secret.to_string()));
        }

        let grid = Grid::new(rows, dictionary.word_len())?;
        info!(rows, cols = grid.cols(), "new game started");

        Ok(Self {
            dictionary,
            secret: secret.to_string(),
            alphabet: Alphabet::new(),
            grid,
            state: GameState::InProgress,
        })
    }

    /// Start a game of [`ROWS`] guesses with a secret drawn from `rng`
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] if the dictionary has no possible
    /// secrets.
    pub fn with_random_secret<R: Rng + ?Sized>(
        dictionary: &'d Dictionary,
        rng: &mut R,
    ) -> Result<Self> {
        let secret = dictionary
            .choose_secret(rng)
            .ok_or(GameError::EmptyWordList)?;
        Self::new(dictionary, secret)
    }

    /// Score a guess without changing the board
    ///
    /// Returns `Ok(None)` when `guess` is not exactly an allowed word. Lookup
    /// is case-sensitive against the uppercase dictionary, so lowercase,
    /// padded or empty input is rejected: the caller should ask for another
    /// guess.
    ///
    /// # Errors
    /// Fails only if an allowed word holds a character outside `A`-`Z`,
    /// which [`Dictionary`] construction rules out.
    pub fn evaluate_guess(&self, guess: &str) -> Result<Option<Feedback>> {
        if !self.dictionary.is_allowed(guess) {
            debug!(%guess, "rejected guess not in dictionary");
            return Ok(None);
        }

        let feedback = score(&self.secret, guess)?;
        debug!(%guess, feedback = %feedback, "evaluated guess");
        Ok(Some(feedback))
    }

    /// Score a guess and record it in grid row `row`
    ///
    /// Each column is written to the grid as-is and merged into the alphabet
    /// (see [`Alphabet::update_status`]). Guessing the secret wins the game;
    /// otherwise using the last row ends it. Once the game is over its state
    /// never changes, though further guesses are still recorded.
    ///
    /// Returns `Ok(false)`, with nothing changed, if the guess is not an
    /// allowed word.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidRow`] if `row` is outside the grid.
    /// Nothing is changed on error.
    pub fn process_guess(&mut self, guess: &str, row: usize) -> Result<bool> {
        if row >= self.grid.rows() {
            return Err(GameError::InvalidRow {
                row,
                rows: self.grid.rows(),
            });
        }

        let Some(feedback) = self.evaluate_guess(guess)? else {
            return Ok(false);
        };

        // Resolve every alphabet slot before touching the board
        let indices = feedback
            .letters()
            .iter()
            .map(|letter| Alphabet::index_of(letter.character()))
            .collect::<Result<Vec<_>>>()?;

        for (col, (letter, index)) in feedback.letters().iter().zip(indices).enumerate() {
            self.grid
                .update_cell(row, col, letter.character(), letter.status())?;
            self.alphabet.update_status(index, letter.status())?;
        }

        if self.state.is_over() {
            debug!(state = %self.state, "guess recorded after game end");
        } else if guess == self.secret {
            self.state = GameState::WonGame;
            info!(row, "secret word guessed");
        } else if row == self.grid.rows() - 1 {
            self.state = GameState::ExhaustedGuesses;
            info!(secret = %self.secret, "out of guesses");
        }

        Ok(true)
    }

    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &str {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Whether the secret word has been guessed
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.state, GameState::WonGame)
    }

    /// Whether the last row was used without a win
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, GameState::ExhaustedGuesses)
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Alphabet status of the letter at `index` (`0` is `A`)
    ///
    /// # Errors
    /// Returns [`GameError::InvalidIndex`] if `index >= 26`.
    pub fn letter_status(&self, index: usize) -> Result<Status> {
        self.alphabet.status_at(index)
    }

    /// Grid status at `(row, col)`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCoordinates`] if the cell is outside the grid.
    pub fn grid_letter_status(&self, row: usize, col: usize) -> Result<Status> {
        self.grid.status_at(row, col)
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }
}

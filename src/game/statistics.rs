//! Win/loss tally across the games of one program run

use super::engine::{GameEngine, GameState};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved after this many accepted guesses
    Won(usize),
    Lost,
}

/// Games played, games won and the guess distribution of wins
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins that took `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished game
    pub fn record(&mut self, outcome: Outcome) {
        self.total_games += 1;
        if let Outcome::Won(guesses) = outcome {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }

    /// Percentage of games won, `0.0` before any game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl Outcome {
    /// Outcome of a finished game, `None` while it is still in progress
    ///
    /// `guesses` is the number of accepted guesses the player made.
    #[must_use]
    pub fn of(game: &GameEngine<'_>, guesses: usize) -> Option<Self> {
        match game.state() {
            GameState::InProgress => None,
            GameState::WonGame => Some(Self::Won(guesses)),
            GameState::ExhaustedGuesses => Some(Self::Lost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::new();
        stats.record(Outcome::Won(3));
        stats.record(Outcome::Won(3));
        stats.record(Outcome::Won(6));
        stats.record(Outcome::Lost);

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[6], 1);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn outcome_follows_engine_state() {
        let dictionary = Dictionary::new(["crane", "slate"], ["crane"]).unwrap();
        let mut game = GameEngine::with_rows(&dictionary, "CRANE", 2).unwrap();
        assert_eq!(Outcome::of(&game, 0), None);

        game.process_guess("SLATE", 0).unwrap();
        assert_eq!(Outcome::of(&game, 1), None);

        game.process_guess("CRANE", 1).unwrap();
        assert_eq!(Outcome::of(&game, 2), Some(Outcome::Won(2)));
    }

    #[test]
    fn exhausted_game_is_lost() {
        let dictionary = Dictionary::new(["crane", "slate"], ["crane"]).unwrap();
        let mut game = GameEngine::with_rows(&dictionary, "CRANE", 1).unwrap();
        game.process_guess("SLATE", 0).unwrap();
        assert_eq!(Outcome::of(&game, 1), Some(Outcome::Lost));
    }
}

//! Game rules and session state
//!
//! Guess scoring, the engine that applies scored guesses to the board, and
//! the tally of finished games.

mod engine;
mod evaluation;
mod statistics;

pub use engine::{COLS, GameEngine, GameState, ROWS};
pub use evaluation::{Feedback, score};
pub use statistics::{Outcome, Statistics};

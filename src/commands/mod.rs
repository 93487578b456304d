//! Command implementations

pub mod play;

pub use play::{PlayConfig, play_game, run_play};

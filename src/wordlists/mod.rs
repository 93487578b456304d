//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, file loading for
//! custom lists, and the [`Dictionary`] the engine validates guesses against.

pub mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{DEFAULT_WORD_LEN, Dictionary};
pub use embedded::{ALLOWED, ALLOWED_COUNT, SECRETS, SECRETS_COUNT};

//! Error types for the game engine
//!
//! Every variant except [`GameError::WordListIo`] is a precondition violation
//! detected synchronously at the call site. A guess missing from the
//! dictionary is *not* an error: it is reported as a rejected guess.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// The errors that `wolfle` can produce.
#[derive(Debug, Error)]
pub enum GameError {
    /// Only `A`-`Z` and the `_` placeholder may be stored in a letter cell.
    #[error("invalid letter {0:?}: expected A-Z or '_'")]
    InvalidCharacter(char),

    #[error("alphabet index {0} is out of range 0..{max}", max = crate::core::Alphabet::LEN)]
    InvalidIndex(usize),

    #[error("grid cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    InvalidCoordinates {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("grid row {row} is out of range 0..{rows}")]
    InvalidRow { row: usize, rows: usize },

    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("\"{0}\" is not in the list of possible secret words")]
    SecretNotInList(String),

    #[error("word list contains no usable words")]
    EmptyWordList,

    /// A word list file could not be read.
    #[error("could not read word list {}", .path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GameError {
    /// Whether this error is a precondition violation on the caller's input.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::WordListIo { .. })
    }
}

//! Word list loading utilities
//!
//! Reads plain-text word lists: one word per line, blank lines ignored.

use std::fs;
use std::path::Path;

use crate::error::{GameError, Result};

/// Load the words from a file
///
/// Lines are trimmed and blank lines skipped. Words are returned as written;
/// validation and case normalization happen in
/// [`Dictionary::new`](super::Dictionary::new).
///
/// # Errors
///
/// Returns [`GameError::WordListIo`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wolfle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secrets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordListIo {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = words_from_text(&content);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split text into words, one per non-blank line
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

//! Guess scoring
//!
//! Classifies each letter of a guess against the secret word.
//!
//! Each guessed letter is judged on its own: it is [`Status::InPosition`] if
//! the secret has the same letter in the same column, otherwise
//! [`Status::InWord`] if the secret contains that letter anywhere, otherwise
//! [`Status::NotInWord`]. Repeated letters are *not* budgeted against the
//! number of occurrences in the secret, so guessing `SPOOL` against a secret
//! with a single `O` marks both `O`s as present.

use std::fmt;

use crate::core::{Letter, Status};
use crate::error::Result;

/// Per-column classification of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: Vec<Letter>,
}

impl Feedback {
    /// The scored letters, one per column
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Status of each column, left to right
    pub fn statuses(&self) -> impl Iterator<Item = Status> + '_ {
        self.letters.iter().map(Letter::status)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(Letter::character).collect()
    }

    /// Whether every column is [`Status::InPosition`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses().all(|status| status == Status::InPosition)
    }

    /// Number of columns marked [`Status::InPosition`]
    #[must_use]
    pub fn count_in_position(&self) -> usize {
        self.statuses()
            .filter(|&status| status == Status::InPosition)
            .count()
    }

    /// Number of columns marked [`Status::InWord`]
    #[must_use]
    pub fn count_in_word(&self) -> usize {
        self.statuses()
            .filter(|&status| status == Status::InWord)
            .count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wolfle::game::score;
    ///
    /// let feedback = score("CRANE", "REACT").unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟨🟨🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(Status::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    /// `G`/`Y`/`-` symbols, e.g. `YYYY-`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.statuses() {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret`
///
/// Both words must already be uppercase and of equal length; dictionary
/// membership is checked by the caller. Pure: nothing is mutated.
///
/// # Errors
/// Returns [`GameError::InvalidCharacter`](crate::GameError::InvalidCharacter)
/// if `guess` contains anything but `A`-`Z`.
///
/// # Examples
/// ```
/// use wolfle::core::Status::*;
/// use wolfle::game::score;
///
/// let feedback = score("CRANE", "CRANE").unwrap();
/// assert!(feedback.is_solved());
///
/// let feedback = score("CRANE", "REACT").unwrap();
/// let statuses: Vec<_> = feedback.statuses().collect();
/// assert_eq!(statuses, [InWord, InWord, InPosition, InWord, NotInWord]);
/// ```
pub fn score(secret: &str, guess: &str) -> Result<Feedback> {
    debug_assert_eq!(secret.len(), guess.len(), "words must have equal length");

    let letters = guess
        .chars()
        .zip(secret.chars())
        .map(|(guessed, expected)| {
            let status = if guessed == expected {
                Status::InPosition
            } else if secret.contains(guessed) {
                Status::InWord
            } else {
                Status::NotInWord
            };
            Letter::with_status(guessed, status)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Feedback { letters })
}

//! Alphabet status tracker
//!
//! Tracks the best-known status of each of the 26 letters across all guesses
//! of a session, as shown on the on-screen keyboard.

use std::fmt;

use super::letter::{Letter, Status};
use crate::error::{GameError, Result};

/// The 26 letters `A`-`Z`, each with a merged status
///
/// Index `i` always holds the character `'A' + i`; only statuses change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: [Letter; Alphabet::LEN],
}

impl Alphabet {
    /// Number of letters tracked
    pub const LEN: usize = 26;

    /// Create an alphabet with every letter [`Status::NotGuessed`]
    #[must_use]
    pub fn new() -> Self {
        let letters = std::array::from_fn(|i| Letter::nth(i as u8));
        Self { letters }
    }

    /// Index of an uppercase letter (`'A'` is 0)
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCharacter`] for anything but `A`-`Z`.
    ///
    /// # Examples
    /// ```
    /// use wolfle::core::Alphabet;
    ///
    /// assert_eq!(Alphabet::index_of('A').unwrap(), 0);
    /// assert_eq!(Alphabet::index_of('Z').unwrap(), 25);
    /// assert!(Alphabet::index_of('_').is_err());
    /// ```
    pub fn index_of(character: char) -> Result<usize> {
        if character.is_ascii_uppercase() {
            Ok(character as usize - 'A' as usize)
        } else {
            Err(GameError::InvalidCharacter(character))
        }
    }

    /// All 26 cells, in alphabetical order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; Self::LEN] {
        &self.letters
    }

    /// Character stored at `index`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidIndex`] if `index >= 26`.
    pub fn character_at(&self, index: usize) -> Result<char> {
        self.get(index).map(Letter::character)
    }

    /// Status stored at `index`
    ///
    /// # Errors
    /// Returns [`GameError::InvalidIndex`] if `index >= 26`.
    pub fn status_at(&self, index: usize) -> Result<Status> {
        self.get(index).map(Letter::status)
    }

    /// Merge a newly observed status into the letter at `index`
    ///
    /// The merge only ever improves what is shown:
    /// - a [`Status::NotGuessed`] letter takes `status` as-is;
    /// - an [`Status::InWord`] letter upgrades to [`Status::InPosition`];
    /// - every other combination is ignored.
    ///
    /// A letter marked [`Status::NotInWord`] therefore keeps that status for
    /// the rest of the session, even if a later guess reports it present.
    ///
    /// # Errors
    /// Returns [`GameError::InvalidIndex`] if `index >= 26`.
    ///
    /// # Examples
    /// ```
    /// use wolfle::core::{Alphabet, Status};
    ///
    /// let mut alphabet = Alphabet::new();
    /// alphabet.update_status(4, Status::InWord).unwrap();
    /// alphabet.update_status(4, Status::InPosition).unwrap();
    /// assert_eq!(alphabet.status_at(4).unwrap(), Status::InPosition);
    ///
    /// alphabet.update_status(4, Status::NotInWord).unwrap();
    /// assert_eq!(alphabet.status_at(4).unwrap(), Status::InPosition);
    /// ```
    pub fn update_status(&mut self, index: usize, status: Status) -> Result<()> {
        let letter = self
            .letters
            .get_mut(index)
            .ok_or(GameError::InvalidIndex(index))?;

        match (letter.status(), status) {
            (Status::NotGuessed, _) | (Status::InWord, Status::InPosition) => {
                letter.set_status(status);
            }
            _ => {}
        }

        Ok(())
    }

    fn get(&self, index: usize) -> Result<&Letter> {
        self.letters.get(index).ok_or(GameError::InvalidIndex(index))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            writeln!(f, "{letter}")?;
        }
        Ok(())
    }
}

//! A single letter cell
//!
//! A [`Letter`] pairs a character (`A`-`Z`, or `_` for an empty cell) with the
//! [`Status`] the game has learned about it.

use std::fmt;

use crate::error::{GameError, Result};

/// Placeholder character for a cell that has not been written yet.
pub const PLACEHOLDER: char = '_';

/// What the game knows about a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The letter has not been guessed yet
    #[default]
    NotGuessed,
    /// Guessed, and absent from the secret word
    NotInWord,
    /// Present in the secret word, but not at this position
    InWord,
    /// Present in the secret word at this position
    InPosition,
}

impl Status {
    /// All statuses, in code order
    pub const ALL: [Self; 4] = [
        Self::NotGuessed,
        Self::NotInWord,
        Self::InWord,
        Self::InPosition,
    ];

    /// Name of the status, as used in debugging output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NotGuessed => "NotGuessed",
            Self::NotInWord => "NotInWord",
            Self::InWord => "InWord",
            Self::InPosition => "InPosition",
        }
    }

    /// Single-character form: `.` not guessed, `-` absent, `Y` misplaced, `G` placed
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::NotGuessed => '.',
            Self::NotInWord => '-',
            Self::InWord => 'Y',
            Self::InPosition => 'G',
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NotGuessed => '⬛',
            Self::NotInWord => '⬜',
            Self::InWord => '🟨',
            Self::InPosition => '🟩',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A character cell with its status
///
/// The character is always `A`-`Z` or [`PLACEHOLDER`]; both setters reject
/// anything else, so a `Letter` can never hold an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    character: char,
    status: Status,
}

impl Letter {
    /// Create a letter with status [`Status::NotGuessed`]
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCharacter`] unless `character` is `A`-`Z`
    /// or `_`.
    ///
    /// # Examples
    /// ```
    /// use wolfle::core::{Letter, Status};
    ///
    /// let letter = Letter::new('Q').unwrap();
    /// assert_eq!(letter.character(), 'Q');
    /// assert_eq!(letter.status(), Status::NotGuessed);
    ///
    /// assert!(Letter::new('q').is_err());
    /// ```
    pub fn new(character: char) -> Result<Self> {
        Self::with_status(character, Status::NotGuessed)
    }

    /// Create a letter with an explicit status
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCharacter`] unless `character` is `A`-`Z`
    /// or `_`.
    pub fn with_status(character: char, status: Status) -> Result<Self> {
        let mut letter = Self::default();
        letter.set_character(character)?;
        letter.set_status(status);
        Ok(letter)
    }

    /// The letter `'A' + index`, not yet guessed
    ///
    /// # Panics
    /// Panics in debug mode if `index >= 26`
    pub(crate) const fn nth(index: u8) -> Self {
        debug_assert!(index < 26, "Alphabet index must be < 26");
        Self {
            character: (b'A' + index) as char,
            status: Status::NotGuessed,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether this cell still holds the placeholder
    #[inline]
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.character == PLACEHOLDER
    }

    /// Replace the character
    ///
    /// # Errors
    /// Returns [`GameError::InvalidCharacter`] unless `character` is `A`-`Z`
    /// or `_`. The letter is left unchanged on error.
    pub fn set_character(&mut self, character: char) -> Result<()> {
        if !is_valid_character(character) {
            return Err(GameError::InvalidCharacter(character));
        }
        self.character = character;
        Ok(())
    }

    /// Replace the status
    #[inline]
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

impl Default for Letter {
    /// An empty cell: `('_', NotGuessed)`
    fn default() -> Self {
        Self {
            character: PLACEHOLDER,
            status: Status::NotGuessed,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.character, self.status)
    }
}

/// `A`-`Z` or the placeholder
#[inline]
#[must_use]
pub const fn is_valid_character(character: char) -> bool {
    character.is_ascii_uppercase() || character == PLACEHOLDER
}

//! The allowed-guess and possible-secret word lists
//!
//! A [`Dictionary`] answers two questions for the engine: may this word be
//! guessed, and may it be the secret. It also picks random secrets through a
//! caller-supplied [`Rng`].

use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::{ALLOWED, SECRETS, loader::load_from_file};
use crate::error::{GameError, Result};

/// Length of the words in the embedded lists
pub const DEFAULT_WORD_LEN: usize = 5;

/// Validated, uppercase word lists
///
/// Every secret is also an allowed guess.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_len: usize,
    allowed: FxHashSet<String>,
    secrets: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary of five-letter words
    ///
    /// Words are trimmed and uppercased. Entries that are not exactly five
    /// ASCII letters are skipped with a warning, and duplicates are dropped.
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] if no allowed word survives
    /// validation.
    ///
    /// # Examples
    /// ```
    /// use wolfle::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["crane", "react", "oops"], ["CRANE"]).unwrap();
    /// assert!(dictionary.is_allowed("REACT"));
    /// assert!(!dictionary.is_allowed("OOPS"));
    /// assert!(dictionary.is_secret("CRANE"));
    /// ```
    pub fn new<A, S>(allowed: A, secrets: S) -> Result<Self>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self::with_word_len(DEFAULT_WORD_LEN, allowed, secrets)
    }

    /// Build a dictionary of words of length `word_len`
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordList`] if no allowed word survives
    /// validation.
    pub fn with_word_len<A, S>(word_len: usize, allowed: A, secrets: S) -> Result<Self>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut allowed_set = FxHashSet::default();
        for word in allowed {
            if let Some(word) = normalize(word.as_ref(), word_len) {
                allowed_set.insert(word);
            }
        }

        let mut seen = FxHashSet::default();
        let mut secret_list = Vec::new();
        for word in secrets {
            if let Some(word) = normalize(word.as_ref(), word_len)
                && seen.insert(word.clone())
            {
                allowed_set.insert(word.clone());
                secret_list.push(word);
            }
        }

        if allowed_set.is_empty() {
            return Err(GameError::EmptyWordList);
        }

        debug!(
            allowed = allowed_set.len(),
            secrets = secret_list.len(),
            word_len,
            "built dictionary"
        );

        Ok(Self {
            word_len,
            allowed: allowed_set,
            secrets: secret_list,
        })
    }

    /// The word lists compiled into the crate
    ///
    /// # Errors
    /// Only fails if the embedded lists are empty, which the build prevents
    /// in practice.
    pub fn embedded() -> Result<Self> {
        Self::new(ALLOWED.iter(), SECRETS.iter())
    }

    /// Load both word lists from files
    ///
    /// # Errors
    /// Returns [`GameError::WordListIo`] if either file cannot be read, or
    /// [`GameError::EmptyWordList`] if the allowed list has no valid word.
    pub fn from_files(allowed: impl AsRef<Path>, secrets: impl AsRef<Path>) -> Result<Self> {
        let allowed = load_from_file(allowed)?;
        let secrets = load_from_file(secrets)?;
        Self::new(allowed, secrets)
    }

    /// Length every word in this dictionary has
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Whether `word` may be guessed (exact, uppercase match)
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &str) -> bool {
        self.allowed.contains(word)
    }

    /// Whether `word` may be the secret (exact, uppercase match)
    #[must_use]
    pub fn is_secret(&self, word: &str) -> bool {
        self.secrets.iter().any(|secret| secret == word)
    }

    /// Possible secrets, in list order
    #[inline]
    #[must_use]
    pub fn secrets(&self) -> &[String] {
        &self.secrets
    }

    /// Number of allowed guesses (secrets included)
    #[inline]
    #[must_use]
    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }

    /// Pick a secret uniformly at random
    ///
    /// Returns `None` if there are no possible secrets.
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.secrets.choose(rng).map(String::as_str)
    }
}

/// Trim and uppercase `word`, or `None` if it is not `word_len` ASCII letters
fn normalize(word: &str, word_len: usize) -> Option<String> {
    let word = word.trim().to_ascii_uppercase();
    if word.len() == word_len && word.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(word)
    } else {
        warn!(word = %word, word_len, "skipping malformed word list entry");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SECRETS_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(["crane", "react", "slate"], ["CRANE", "SLATE"]).unwrap()
    }

    #[test]
    fn words_are_normalized() {
        let dictionary = Dictionary::new([" crane ", "ReAcT"], ["crane"]).unwrap();
        assert!(dictionary.is_allowed("CRANE"));
        assert!(dictionary.is_allowed("REACT"));
        assert!(!dictionary.is_allowed("crane"));
        assert_eq!(dictionary.secrets(), ["CRANE"]);
    }

    #[test]
    fn malformed_entries_skipped() {
        let dictionary =
            Dictionary::new(["crane", "toolong", "abc", "cr4ne", "slaté"], ["oops"]).unwrap();
        assert_eq!(dictionary.allowed_len(), 1);
        assert!(dictionary.secrets().is_empty());
    }

    #[test]
    fn secrets_are_allowed_guesses() {
        let dictionary = Dictionary::new(["crane"], ["moist"]).unwrap();
        assert!(dictionary.is_allowed("MOIST"));
        assert!(dictionary.is_secret("MOIST"));
        assert!(!dictionary.is_secret("CRANE"));
    }

    #[test]
    fn duplicate_secrets_dropped() {
        let dictionary = Dictionary::new(["crane"], ["crane", "CRANE", "slate"]).unwrap();
        assert_eq!(dictionary.secrets(), ["CRANE", "SLATE"]);
    }

    #[test]
    fn empty_allowed_list_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Dictionary::new(empty, empty),
            Err(GameError::EmptyWordList)
        ));
        assert!(Dictionary::new(["no"], empty).is_err());
    }

    #[test]
    fn custom_word_length() {
        let dictionary = Dictionary::with_word_len(3, ["cat", "crane"], ["dog"]).unwrap();
        assert_eq!(dictionary.word_len(), 3);
        assert!(dictionary.is_allowed("CAT"));
        assert!(!dictionary.is_allowed("CRANE"));
    }

    #[test]
    fn choose_secret_is_deterministic_with_seed() {
        let dictionary = small();
        let a = dictionary
            .choose_secret(&mut StdRng::seed_from_u64(7))
            .map(ToString::to_string);
        let b = dictionary
            .choose_secret(&mut StdRng::seed_from_u64(7))
            .map(ToString::to_string);
        assert_eq!(a, b);
        assert!(dictionary.is_secret(&a.unwrap()));
    }

    #[test]
    fn choose_secret_from_empty_list() {
        let empty: [&str; 0] = [];
        let dictionary = Dictionary::new(["crane"], empty).unwrap();
        assert!(dictionary.choose_secret(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn embedded_lists_load() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.word_len(), DEFAULT_WORD_LEN);
        assert_eq!(dictionary.secrets().len(), SECRETS_COUNT);
        assert!(dictionary.is_secret("CRANE"));
        assert!(dictionary.is_allowed("REACT"));
    }

    #[test]
    fn from_files_round_trip() {
        let dir = std::env::temp_dir();
        let id = std::process::id();
        let allowed = dir.join(format!("wolfle-allowed-{id}.txt"));
        let secrets = dir.join(format!("wolfle-secrets-{id}.txt"));
        std::fs::write(&allowed, "crane\nreact\n").unwrap();
        std::fs::write(&secrets, "crane\n").unwrap();

        let dictionary = Dictionary::from_files(&allowed, &secrets).unwrap();
        std::fs::remove_file(&allowed).unwrap();
        std::fs::remove_file(&secrets).unwrap();

        assert!(dictionary.is_allowed("REACT"));
        assert_eq!(dictionary.secrets(), ["CRANE"]);
    }
}

//! Vocabulary word representation
//!
//! A `Word` is a 5-letter lowercase word with a stable identifier and a
//! per-letter multiplicity table used by the feedback encoder.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Size of the Latin alphabet the words are drawn from
pub const ALPHABET_SIZE: usize = 26;

/// Stable identifier of a word inside one vocabulary
///
/// Identifiers are contiguous from zero across the solution and guess lists,
/// so they double as indices into the feedback cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The identifier as a slice index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// A 5-letter word with its identifier and letter multiplicities
///
/// Equality and hashing look at the identifier only: two words with the same
/// text but different identifiers are different vocabulary entries.
#[derive(Debug, Clone)]
pub struct Word {
    id: WordId,
    text: String,
    letters: [u8; WORD_LENGTH],
    counts: [u8; ALPHABET_SIZE],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Word, WordId};
    ///
    /// let word = Word::new(WordId::new(0), "Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(word.count_of(b'a'), 1);
    ///
    /// assert!(Word::new(WordId::new(1), "too long").is_err());
    /// assert!(Word::new(WordId::new(2), "sh0rt").is_err());
    /// ```
    pub fn new(id: WordId, text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &letters {
            counts[letter_index(letter)] += 1;
        }

        Ok(Self {
            id,
            text,
            letters,
            counts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> WordId {
        self.id
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Multiplicity of every letter, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.counts
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }
}

/// Position of a lowercase ASCII letter in the alphabet
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

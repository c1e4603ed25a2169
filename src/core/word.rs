//! Canonical word representation
//!
//! Every word entering the engine passes through [`Word::new`], which is the single
//! place where casing is normalised. Internally all letters are uppercase ASCII bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A validated word made of ASCII letters, stored in canonical (uppercase) form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the result is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: trimmed.to_ascii_uppercase(),
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// Build a word from letters that are already canonical
    ///
    /// Callers guarantee every byte is an uppercase ASCII letter.
    pub(crate) fn from_canonical(letters: &[u8]) -> Self {
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Canonicalise a single letter, or `None` if it is not an ASCII letter
    #[inline]
    #[must_use]
    pub fn canonical_letter(letter: char) -> Option<u8> {
        if letter.is_ascii_alphabetic() {
            // ASCII, so the cast is lossless
            Some(letter.to_ascii_uppercase() as u8)
        } else {
            None
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of each letter in the word
    ///
    /// Used by feedback scoring to track how many of each letter are still unclaimed.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_case_normalized() {
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("crane").unwrap());
        assert_eq!(Word::new("  slate\n").unwrap().text(), "SLATE");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("oxygen").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert_eq!(
            Word::with_length("crane", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn canonical_letter() {
        assert_eq!(Word::canonical_letter('a'), Some(b'A'));
        assert_eq!(Word::canonical_letter('Z'), Some(b'Z'));
        assert_eq!(Word::canonical_letter('1'), None);
        assert_eq!(Word::canonical_letter('é'), None);
        assert_eq!(Word::canonical_letter(' '), None);
    }

    #[test]
    fn letter_counts_with_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
        assert_eq!(counts.len(), 4);

        let counts = Word::new(&"z".repeat(256)).unwrap().letter_counts();
        assert_eq!(counts.get(&b'Z'), Some(&256));
    }

    #[test]
    fn from_canonical_round_trips_text() {
        let word = Word::from_canonical(b"ABBEY");
        assert_eq!(word, Word::new("abbey").unwrap());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}

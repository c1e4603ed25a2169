//! Dictionaries of valid words and their definitions
//!
//! The engine only talks to a dictionary through [`DictionaryProvider`]. Where the
//! words come from (embedded list, JSON file, text file) is the loader's business.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::io;
use thiserror::Error;

/// Lookup contract the game engine needs from a word source
pub trait DictionaryProvider {
    /// Definition of `word`, case-insensitive
    ///
    /// `Some("")` means the word is valid but has no definition; `None` means the
    /// word is not in the dictionary.
    fn lookup(&self, word: &str) -> Option<&str>;

    /// All words with exactly `length` letters, in canonical case
    fn words_of_length(&self, length: usize) -> Vec<&str>;

    /// Whether `word` is a valid guess
    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory word to definition map
///
/// Keys are canonical uppercase words; definitions may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: FxHashMap<String, String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from `(word, definition)` pairs
    ///
    /// Entries that are not valid words are skipped. A later duplicate replaces
    /// an earlier definition only if it is non-empty.
    pub fn from_entries<I, W, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, D)>,
        W: AsRef<str>,
        D: Into<String>,
    {
        let mut dictionary = Self::new();
        for (word, definition) in entries {
            dictionary.insert(word, definition);
        }
        dictionary
    }

    /// Build a dictionary of words without definitions
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::from_entries(words.into_iter().map(|w| (w, String::new())))
    }

    /// Add a word; returns false if the text is not a valid word
    pub fn insert(&mut self, word: impl AsRef<str>, definition: impl Into<String>) -> bool {
        let Ok(word) = Word::new(word) else {
            return false;
        };
        let definition = definition.into().trim().to_string();

        let entry = self.entries.entry(word.text().to_string()).or_default();
        if !definition.is_empty() {
            *entry = definition;
        }
        true
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.entries.keys().map(String::len).collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}

impl DictionaryProvider for Dictionary {
    fn lookup(&self, word: &str) -> Option<&str> {
        let word = Word::new(word).ok()?;
        self.entries.get(word.text()).map(String::as_str)
    }

    fn words_of_length(&self, length: usize) -> Vec<&str> {
        // Sorted so that seeded secret selection is reproducible
        let mut words: Vec<&str> = self
            .entries
            .keys()
            .filter(|w| w.len() == length)
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let dict = Dictionary::from_entries([("apple", "A round fruit")]);
        assert_eq!(dict.lookup("APPLE"), Some("A round fruit"));
        assert_eq!(dict.lookup("apple"), Some("A round fruit"));
        assert_eq!(dict.lookup(" ApPlE "), Some("A round fruit"));
        assert_eq!(dict.lookup("grape"), None);
    }

    #[test]
    fn word_without_definition_is_still_valid() {
        let dict = Dictionary::from_words(["crane"]);
        assert_eq!(dict.lookup("crane"), Some(""));
        assert!(dict.contains("CRANE"));
        assert!(!dict.contains("slate"));
    }

    #[test]
    fn lookup_rejects_non_words() {
        let dict = Dictionary::from_words(["crane"]);
        assert_eq!(dict.lookup(""), None);
        assert_eq!(dict.lookup("cr4ne"), None);
    }

    #[test]
    fn invalid_entries_skipped() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("crane", ""));
        assert!(!dict.insert("two words", "nope"));
        assert!(!dict.insert("", "nope"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn duplicate_keeps_non_empty_definition() {
        let dict = Dictionary::from_entries([
            ("crane", "A wading bird"),
            ("CRANE", ""),
        ]);
        assert_eq!(dict.lookup("crane"), Some("A wading bird"));

        let dict = Dictionary::from_entries([("crane", ""), ("crane", "A lifting machine")]);
        assert_eq!(dict.lookup("crane"), Some("A lifting machine"));
    }

    #[test]
    fn words_of_length_filters_and_sorts() {
        let dict = Dictionary::from_words(["slate", "cat", "crane", "oxygen", "adieu"]);
        assert_eq!(dict.words_of_length(5), vec!["ADIEU", "CRANE", "SLATE"]);
        assert_eq!(dict.words_of_length(3), vec!["CAT"]);
        assert!(dict.words_of_length(7).is_empty());
        assert_eq!(dict.lengths(), vec![3, 5, 6]);
    }
}

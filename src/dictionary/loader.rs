//! Dictionary loading utilities
//!
//! Supported sources:
//! - the embedded word list compiled in by `build.rs`
//! - JSON: an object mapping words to definitions (`null` allowed), an object
//!   mapping words to `{"definition": ...}`, or a plain array of words
//! - text: one word per line, optionally followed by a tab and a definition;
//!   blank lines and lines starting with `#` are ignored
//!
//! Entries that are not valid words are skipped rather than failing the load.

use super::{Dictionary, DictionaryError, WORDS};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDictionary {
    Map(BTreeMap<String, JsonEntry>),
    List(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Definition(String),
    Detailed { definition: Option<String> },
    Missing,
}

impl JsonEntry {
    fn into_definition(self) -> String {
        match self {
            Self::Definition(text) => text,
            Self::Detailed { definition } => definition.unwrap_or_default(),
            Self::Missing => String::new(),
        }
    }
}

/// The word list compiled into the binary
///
/// # Examples
/// ```
/// use wordle_game::dictionary::{DictionaryProvider, loader::embedded};
///
/// let dict = embedded();
/// assert!(dict.contains("apple"));
/// ```
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_entries(WORDS.iter().copied())
}

/// Load a dictionary from a file, choosing the format by extension
///
/// Files ending in `.json` are parsed as JSON, everything else as text.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::Json` if a `.json` file is malformed.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        from_json_str(&content)
    } else {
        Ok(from_text(&content))
    }
}

/// Parse a JSON dictionary
///
/// # Errors
///
/// Returns `DictionaryError::Json` if the input is not one of the supported shapes.
///
/// # Examples
/// ```
/// use wordle_game::dictionary::{DictionaryProvider, loader::from_json_str};
///
/// let dict = from_json_str(r#"{"apple": "A round fruit", "crane": null}"#).unwrap();
/// assert_eq!(dict.lookup("APPLE"), Some("A round fruit"));
/// assert_eq!(dict.lookup("crane"), Some(""));
/// ```
pub fn from_json_str(json: &str) -> Result<Dictionary, DictionaryError> {
    let parsed: JsonDictionary = serde_json::from_str(json)?;

    let dictionary = match parsed {
        JsonDictionary::Map(map) => Dictionary::from_entries(
            map.into_iter()
                .map(|(word, entry)| (word, entry.into_definition())),
        ),
        JsonDictionary::List(words) => Dictionary::from_words(words),
    };

    Ok(dictionary)
}

/// Parse a text dictionary: `word` or `word<TAB>definition` per line
#[must_use]
pub fn from_text(text: &str) -> Dictionary {
    let entries = text.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        match trimmed.split_once('\t') {
            Some((word, definition)) => Some((word.to_string(), definition.to_string())),
            None => Some((trimmed.to_string(), String::new())),
        }
    });

    Dictionary::from_entries(entries)
}

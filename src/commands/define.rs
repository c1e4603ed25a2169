//! Dictionary lookup command

use crate::core::Word;
use crate::dictionary::DictionaryProvider;

/// Result of looking a word up
#[derive(Debug)]
pub struct DefineResult {
    pub word: Word,
    /// Whether the word is a valid guess
    pub known: bool,
    pub definition: Option<String>,
}

/// Look `word` up in `dictionary`
///
/// # Errors
///
/// Returns an error if `word` is not a valid word.
pub fn define_word<D>(word: &str, dictionary: &D) -> Result<DefineResult, String>
where
    D: DictionaryProvider + ?Sized,
{
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let entry = dictionary.lookup(word.text());

    Ok(DefineResult {
        known: entry.is_some(),
        definition: entry.filter(|d| !d.is_empty()).map(str::to_string),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    #[test]
    fn define_known_word() {
        let dict = Dictionary::from_entries([("apple", "A round fruit"), ("crane", "")]);

        let apple = define_word("Apple", &dict).unwrap();
        assert!(apple.known);
        assert_eq!(apple.definition.as_deref(), Some("A round fruit"));

        let crane = define_word("crane", &dict).unwrap();
        assert!(crane.known);
        assert_eq!(crane.definition, None);
    }

    #[test]
    fn define_unknown_word() {
        let dict = Dictionary::from_words(["apple"]);
        let result = define_word("grape", &dict).unwrap();
        assert!(!result.known);
        assert_eq!(result.word.text(), "GRAPE");
    }

    #[test]
    fn define_invalid_word() {
        let dict = Dictionary::new();
        assert!(define_word("gr8", &dict).is_err());
    }
}

//! Dictionary lookups
//!
//! The `Dictionary` trait is the seam between the validation logic and
//! whatever decides word realness: the embedded word list in production, a
//! fixed fake in tests, or any external spellcheck service.

use super::DICTIONARY;
use rustc_hash::FxHashSet;

/// Decides whether a string is a real word in a given language
///
/// Implementations must be deterministic for a fixed word/language pair.
/// A backend with an error channel (e.g. a remote service) adapts by
/// returning `false` on failure, so unknown always means rejected.
pub trait Dictionary {
    /// Check whether `word` is a real word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

/// Dictionary backed by an in-memory word set for one language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: FxHashSet<String>,
    language: String,
}

impl WordListDictionary {
    /// Build a dictionary from an iterator of words
    ///
    /// Words are stored as given; callers supply lowercase lists.
    pub fn new<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            language: language.into(),
        }
    }

    /// The embedded English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::new(DICTIONARY.iter().copied(), "en")
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        // Fail closed on a language this list does not carry
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_listed_words() {
        let dict = WordListDictionary::new(["silk", "worm"], "en");
        assert!(dict.is_real_word("silk", "en"));
        assert!(dict.is_real_word("worm", "en"));
    }

    #[test]
    fn rejects_unlisted_words() {
        let dict = WordListDictionary::new(["silk"], "en");
        assert!(!dict.is_real_word("slorp", "en"));
        assert!(!dict.is_real_word("", "en"));
    }

    #[test]
    fn fails_closed_on_other_languages() {
        let dict = WordListDictionary::new(["silk"], "en");
        assert!(!dict.is_real_word("silk", "fr"));
    }

    #[test]
    fn lookup_is_deterministic() {
        let dict = WordListDictionary::new(["silk"], "en");
        for _ in 0..3 {
            assert!(dict.is_real_word("silk", "en"));
            assert!(!dict.is_real_word("worm", "en"));
        }
    }

    #[test]
    fn english_dictionary_is_populated() {
        let dict = WordListDictionary::english();
        assert!(!dict.is_empty());
        assert!(dict.is_real_word("silk", "en"));
        assert!(!dict.is_real_word("silk", "de"));
    }

    #[test]
    fn duplicate_words_collapse() {
        let dict = WordListDictionary::new(["silk", "silk"], "en");
        assert_eq!(dict.len(), 1);
    }
}

//! Derivation solver command
//!
//! Sweeps the dictionary for every word derivable from a root: spellable from
//! its letters, not containing the root, and long enough to play. Realness is
//! implied by sweeping dictionary entries only.

use crate::core::LetterPool;
use crate::game::{MIN_WORD_LEN, normalize, points_for};
use rayon::prelude::*;

/// One playable word found for a root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    pub word: String,
    pub points: u32,
}

/// Result of sweeping the dictionary for a root
pub struct SolveResult {
    /// Normalized root word
    pub root: String,
    /// Playable words, highest points first, then alphabetical
    pub derivations: Vec<Derivation>,
    /// Sum of points over all derivations
    pub total_points: u32,
    /// Size of the dictionary that was swept
    pub dictionary_size: usize,
}

/// Find every dictionary word derivable from `raw_root`
#[must_use]
pub fn solve_root(raw_root: &str, dictionary_words: &[String]) -> SolveResult {
    let root = normalize(raw_root);
    let pool = LetterPool::from_word(&root);

    let mut derivations: Vec<Derivation> = dictionary_words
        .par_iter()
        .filter(|word| {
            word.chars().count() >= MIN_WORD_LEN
                && !word.contains(&root)
                && pool.can_spell(word)
        })
        .map(|word| Derivation {
            word: word.clone(),
            points: points_for(word),
        })
        .collect();

    derivations.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));
    derivations.dedup();

    let total_points = derivations.iter().map(|d| d.points).sum();

    SolveResult {
        root,
        total_points,
        dictionary_size: dictionary_words.len(),
        derivations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::validate;
    use crate::wordlists::WordListDictionary;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_spellable_words_only() {
        let dictionary = words(&["silk", "worms", "mills", "word", "milk"]);
        let result = solve_root("silkworm", &dictionary);

        let found: Vec<&str> = result.derivations.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(found, ["milk", "silk", "worms"]);
    }

    #[test]
    fn skips_short_words() {
        let dictionary = words(&["irk", "ilk", "silk"]);
        let result = solve_root("silkworm", &dictionary);

        assert_eq!(result.derivations.len(), 1);
        assert_eq!(result.derivations[0].word, "silk");
    }

    #[test]
    fn skips_words_containing_the_root() {
        let dictionary = words(&["silkworm", "silkworms", "silk"]);
        let result = solve_root("silkworm", &dictionary);

        let found: Vec<&str> = result.derivations.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(found, ["silk"]);
    }

    #[test]
    fn orders_by_points_then_alphabetically() {
        let dictionary = words(&["rims", "limos", "kilos", "silos"]);
        let result = solve_root("smirkoils", &dictionary);

        // Five-letter words and four-letter words all score 1; alphabetical
        let found: Vec<&str> = result.derivations.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(found, ["kilos", "limos", "rims", "silos"]);
    }

    #[test]
    fn total_points_sums_derivations() {
        let dictionary = words(&["silk", "worms"]);
        let result = solve_root("silkworm", &dictionary);

        assert_eq!(result.total_points, 2);
        assert_eq!(result.dictionary_size, 2);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let result = solve_root("silkworm", &[]);
        assert!(result.derivations.is_empty());
        assert_eq!(result.total_points, 0);
    }

    #[test]
    fn normalizes_the_root() {
        let dictionary = words(&["silk"]);
        let result = solve_root("  SILKWORM\n", &dictionary);
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.derivations.len(), 1);
    }

    #[test]
    fn every_derivation_passes_session_validation() {
        let list = &["silk", "worms", "milk", "work", "slim", "mills", "word"];
        let dictionary = words(list);
        let oracle = WordListDictionary::new(list.iter().copied(), "en");

        let result = solve_root("silkworm", &dictionary);
        assert!(!result.derivations.is_empty());

        for derivation in &result.derivations {
            assert_eq!(
                validate(&derivation.word, "silkworm", &[], &oracle),
                Ok(()),
                "derivation '{}' failed validation",
                derivation.word
            );
        }
    }
}

//! Candidate validation
//!
//! Classifies a normalized candidate against the current session and a
//! dictionary, returning `Ok` or exactly one rejection reason. The checks run
//! in a fixed order so the first failing check decides the user-visible
//! message.

use super::scoring::MIN_WORD_LEN;
use crate::core::{LetterPool, Rejection};
use crate::wordlists::Dictionary;

/// Language tag passed to the dictionary for every lookup
pub const LANGUAGE: &str = "en";

/// Normalize raw player input for validation
///
/// Trims surrounding whitespace (including newlines) and lowercases. Applied
/// exactly once per submission; applying it again changes nothing.
///
/// # Examples
/// ```
/// use word_scramble::game::normalize;
///
/// assert_eq!(normalize("  SiLk\n"), "silk");
/// assert_eq!(normalize(&normalize("  SiLk\n")), "silk");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate a normalized candidate against the session state
///
/// Check order, first failure wins:
/// 1. empty input
/// 2. already accepted this session
/// 3. contains the root word (covers submitting the root itself)
/// 4. spellable from the root's letters
/// 5. real word per the dictionary
/// 6. at least [`MIN_WORD_LEN`] characters
///
/// # Errors
/// Returns the [`Rejection`] for the first failing check.
///
/// # Examples
/// ```
/// use word_scramble::game::validate;
/// use word_scramble::wordlists::WordListDictionary;
///
/// let dict = WordListDictionary::new(["silk"], "en");
/// assert!(validate("silk", "silkworm", &[], &dict).is_ok());
/// assert!(validate("silky", "silkworm", &[], &dict).is_err());
/// ```
pub fn validate(
    candidate: &str,
    root: &str,
    used: &[String],
    dictionary: &impl Dictionary,
) -> Result<(), Rejection> {
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }

    if used.iter().any(|word| word == candidate) {
        return Err(Rejection::AlreadyUsed);
    }

    // Broad on purpose: any candidate containing the root counts as the root
    if candidate.contains(root) {
        return Err(Rejection::AlreadyUsed);
    }

    if !LetterPool::from_word(root).can_spell(candidate) {
        return Err(Rejection::NotPossible {
            root: root.to_string(),
        });
    }

    if !dictionary.is_real_word(candidate, LANGUAGE) {
        return Err(Rejection::NotRecognized);
    }

    if candidate.chars().count() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }

    Ok(())
}

//! Game session state and transitions
//!
//! A session owns the current root word, the accepted words in
//! most-recent-first order, and the running score. `submit` is the only
//! state-mutating entry point besides `reset`.

use super::scoring::points_for;
use super::validator::{normalize, validate};
use crate::core::Rejection;
use crate::wordlists::{Dictionary, RootSource};

/// Root used when the source has no words to offer
pub const FALLBACK_ROOT: &str = "silkworm";

/// Outcome of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The word was accepted and scored
    Accepted {
        /// The normalized word that was accepted
        word: String,
        /// Points awarded for this word
        points: u32,
        /// Total session score after acceptance
        score: u32,
    },
    /// The word was turned down; session state is unchanged
    Rejected(Rejection),
}

/// One game in progress: root word, accepted words, score
///
/// A session always has a root word: construction draws one, so there is no
/// observable "not started" state. Callers serialize access; the session
/// itself does no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    root: String,
    used: Vec<String>,
    score: u32,
}

impl GameSession {
    /// Start a session with a root drawn from `source`
    ///
    /// Falls back to [`FALLBACK_ROOT`] when the source is empty.
    #[must_use]
    pub fn start(source: &impl RootSource) -> Self {
        Self {
            root: source.pick().unwrap_or_else(|| FALLBACK_ROOT.to_string()),
            used: Vec::new(),
            score: 0,
        }
    }

    /// Restart in place: clear accepted words, zero the score, draw a new root
    ///
    /// All three fields are replaced before this returns; no intermediate
    /// state is observable.
    pub fn reset(&mut self, source: &impl RootSource) {
        self.used.clear();
        self.score = 0;
        self.root = source.pick().unwrap_or_else(|| FALLBACK_ROOT.to_string());
    }

    /// Submit a raw candidate word
    ///
    /// Normalizes the input once, validates it, and on acceptance prepends it
    /// to the word list and adds its points to the score. A rejection leaves
    /// the session untouched.
    pub fn submit(&mut self, raw: &str, dictionary: &impl Dictionary) -> SubmitResult {
        let candidate = normalize(raw);

        match validate(&candidate, &self.root, &self.used, dictionary) {
            Ok(()) => {
                let points = points_for(&candidate);
                self.used.insert(0, candidate.clone());
                self.score += points;
                SubmitResult::Accepted {
                    word: candidate,
                    points,
                    score: self.score,
                }
            }
            Err(rejection) => SubmitResult::Rejected(rejection),
        }
    }

    /// The session's root word
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used
    }

    /// Current score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{RootList, WordListDictionary};

    fn fixed_root(word: &str) -> RootList {
        RootList::new(vec![word.to_string()])
    }

    fn dict(words: &[&str]) -> WordListDictionary {
        WordListDictionary::new(words.iter().copied(), "en")
    }

    #[test]
    fn start_draws_a_root_and_zeroes_state() {
        let session = GameSession::start(&fixed_root("silkworm"));
        assert_eq!(session.root(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn start_with_empty_source_uses_fallback() {
        let session = GameSession::start(&RootList::new(Vec::new()));
        assert_eq!(session.root(), FALLBACK_ROOT);
    }

    #[test]
    fn accepted_word_is_prepended_and_scored() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);

        let result = session.submit("silk", &dictionary);
        assert_eq!(
            result,
            SubmitResult::Accepted {
                word: "silk".to_string(),
                points: 1,
                score: 1,
            }
        );
        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn submission_is_normalized_once() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);

        let result = session.submit("  SILK\n", &dictionary);
        assert!(matches!(result, SubmitResult::Accepted { word, .. } if word == "silk"));
    }

    #[test]
    fn resubmitting_the_same_word_is_rejected() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);

        session.submit("silk", &dictionary);
        let result = session.submit("silk", &dictionary);

        assert_eq!(result, SubmitResult::Rejected(Rejection::AlreadyUsed));
        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn case_variants_count_as_the_same_word() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);

        session.submit("silk", &dictionary);
        let result = session.submit("SILK", &dictionary);

        assert_eq!(result, SubmitResult::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);
        session.submit("silk", &dictionary);

        let before = session.clone();
        for raw in ["", "silk", "silkworm", "mills", "wilk", "irk"] {
            let result = session.submit(raw, &dictionary);
            assert!(matches!(result, SubmitResult::Rejected(_)), "raw: {raw:?}");
            assert_eq!(session, before, "raw: {raw:?}");
        }
    }

    #[test]
    fn words_accumulate_most_recent_first() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk", "worms"]);

        session.submit("silk", &dictionary);
        session.submit("worms", &dictionary);

        assert_eq!(session.used_words(), ["worms", "silk"]);
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn long_words_score_double() {
        // Root with enough letters for a six-letter find
        let mut session = GameSession::start(&fixed_root("sterling"));
        let dictionary = dict(&["single"]);

        let result = session.submit("single", &dictionary);
        assert_eq!(
            result,
            SubmitResult::Accepted {
                word: "single".to_string(),
                points: 2,
                score: 2,
            }
        );
    }

    #[test]
    fn submitting_the_root_is_rejected() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silkworm"]);

        let result = session.submit("silkworm", &dictionary);
        assert_eq!(result, SubmitResult::Rejected(Rejection::AlreadyUsed));
    }

    #[test]
    fn reset_clears_words_and_score() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk"]);
        session.submit("silk", &dictionary);

        session.reset(&fixed_root("keyboard"));

        assert_eq!(session.root(), "keyboard");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn reset_with_empty_source_uses_fallback() {
        let mut session = GameSession::start(&fixed_root("keyboard"));
        session.reset(&RootList::new(Vec::new()));
        assert_eq!(session.root(), FALLBACK_ROOT);
    }

    #[test]
    fn score_never_decreases_within_a_session() {
        let mut session = GameSession::start(&fixed_root("silkworm"));
        let dictionary = dict(&["silk", "worms", "milk"]);

        let mut last = 0;
        for raw in ["silk", "nope", "worms", "worms", "milk", ""] {
            session.submit(raw, &dictionary);
            assert!(session.score() >= last);
            last = session.score();
        }
        assert_eq!(last, 3);
    }
}

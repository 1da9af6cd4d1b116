//! Single-word check command
//!
//! Validates one candidate against a root word as if it were the first
//! submission of a fresh session.

use crate::core::Rejection;
use crate::game::{normalize, points_for, validate};
use crate::wordlists::Dictionary;

/// Result of checking a candidate against a root
pub struct CheckResult {
    /// Normalized root word
    pub root: String,
    /// Normalized candidate
    pub candidate: String,
    /// Points the word would earn, or the rejection reason
    pub verdict: Result<u32, Rejection>,
}

/// Check a raw candidate against a raw root with an empty session
#[must_use]
pub fn check_word(raw_root: &str, raw_candidate: &str, dictionary: &impl Dictionary) -> CheckResult {
    let root = normalize(raw_root);
    let candidate = normalize(raw_candidate);

    let verdict = validate(&candidate, &root, &[], dictionary).map(|()| points_for(&candidate));

    CheckResult {
        root,
        candidate,
        verdict,
    }
}

//! Root word selection
//!
//! The `RootSource` trait is the seam between session setup and wherever root
//! words come from: the embedded list in production, a fixed word in tests.

use super::ROOTS;
use rand::prelude::IndexedRandom;

/// Supplies root words for new game sessions
pub trait RootSource {
    /// Pick one root word, or `None` if the backing list is empty
    fn pick(&self) -> Option<String>;
}

/// Root words held in memory, picked uniformly at random
#[derive(Debug, Clone)]
pub struct RootList {
    words: Vec<String>,
}

impl RootList {
    /// Build a root list from the given words
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The embedded root word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ROOTS.iter().map(ToString::to_string).collect())
    }

    /// Number of root candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no roots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All root candidates, in list order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl RootSource for RootList {
    fn pick(&self) -> Option<String> {
        self.words.choose(&mut rand::rng()).cloned()
    }
}

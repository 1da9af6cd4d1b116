//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external state.
//! All types here are pure, testable, and have clear semantics.

mod letters;
mod verdict;

pub use letters::LetterPool;
pub use verdict::Rejection;

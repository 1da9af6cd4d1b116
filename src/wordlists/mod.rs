//! Word lists for the game
//!
//! Provides the dictionary and root-word capability interfaces, their
//! word-list-backed implementations, and embedded lists compiled into the
//! binary for zero-cost access.

pub mod dictionary;
mod embedded;
pub mod loader;
pub mod roots;

pub use dictionary::{Dictionary, WordListDictionary};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOTS, ROOTS_COUNT};
pub use roots::{RootList, RootSource};

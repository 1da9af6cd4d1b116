//! Word Scramble
//!
//! A word-derivation game: draw a root word, then spell as many real words as
//! you can from its letters. Words must be at least 4 letters, must not repeat,
//! must not contain the root, and each root letter is usable once per
//! occurrence. Short finds score 1 point; words longer than 5 letters score 2.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::game::{GameSession, SubmitResult};
//! use word_scramble::wordlists::{RootList, WordListDictionary};
//!
//! let roots = RootList::new(vec!["silkworm".to_string()]);
//! let dictionary = WordListDictionary::new(["silk"], "en");
//!
//! let mut session = GameSession::start(&roots);
//! match session.submit("silk", &dictionary) {
//!     SubmitResult::Accepted { points, score, .. } => {
//!         assert_eq!(points, 1);
//!         assert_eq!(score, 1);
//!     }
//!     SubmitResult::Rejected(reason) => panic!("rejected: {reason}"),
//! }
//! ```

pub mod commands;
pub mod core;
pub mod game;
pub mod interactive;
pub mod output;
pub mod wordlists;

//! Game rules and session state
//!
//! This module holds the decision logic of the game: candidate validation,
//! the scoring policy, and the session that ties them together.

pub mod scoring;
pub mod session;
pub mod validator;

pub use scoring::{LONG_WORD_LEN, MIN_WORD_LEN, points_for};
pub use session::{FALLBACK_ROOT, GameSession, SubmitResult};
pub use validator::{LANGUAGE, normalize, validate};

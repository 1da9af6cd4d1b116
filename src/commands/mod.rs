//! Command implementations

pub mod check;
pub mod rank;
pub mod simple;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use rank::{RankStatistics, RootRanking, print_rank_statistics, rank_roots};
pub use simple::run_simple;
pub use solve::{Derivation, SolveResult, solve_root};

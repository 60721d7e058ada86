//! Command implementations

pub mod check;
pub mod play;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use play::{GuessError, apply_guess, run_play};
pub use stats::{DictionaryStats, dictionary_stats};

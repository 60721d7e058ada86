//! Word check command
//!
//! Reports how a word normalizes and whether the dictionary accepts it.

use crate::core::normalize;
use crate::dictionary::DictionaryIndex;

/// Result of checking a word
pub struct CheckResult {
    pub input: String,
    pub normalized: String,
    pub length: usize,
    /// Dictionary spelling of the matching entry, if any
    pub entry: Option<String>,
    pub playable: bool,
}

/// Look a word up in the dictionary
#[must_use]
pub fn check_word(word: &str, dictionary: &DictionaryIndex) -> CheckResult {
    let input = word.trim().to_string();
    let entry = dictionary.lookup(&input);

    CheckResult {
        normalized: normalize(&input),
        length: input.chars().count(),
        entry: entry.map(|e| e.display_word().to_string()),
        playable: entry.is_some_and(|e| e.is_playable()),
        input,
    }
}

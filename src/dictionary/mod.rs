//! Word dictionary
//!
//! An immutable, accent-insensitive index built once from a word source and
//! shared by every game session.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use index::{
    DictionaryEntry, DictionaryError, DictionaryIndex, LengthBounds, MAX_LENGTH, MIN_LENGTH,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_have_no_surrounding_whitespace() {
        for &word in WORDS {
            assert_eq!(word, word.trim(), "Word {word:?} is not trimmed");
            assert!(!word.is_empty());
        }
    }

    #[test]
    fn embedded_words_are_playable_lengths() {
        let index = DictionaryIndex::embedded();
        assert_eq!(index.len(), WORDS_COUNT, "embedded list has duplicates or bad lengths");
        assert_eq!(index.playable_count(), WORDS_COUNT);
        for length in MIN_LENGTH..=MAX_LENGTH {
            assert!(
                index.count_by_length().contains_key(&length),
                "no embedded word of length {length}"
            );
        }
    }
}

//! Dictionary statistics command

use crate::core::normalize;
use crate::dictionary::{DictionaryIndex, LengthBounds};
use rustc_hash::FxHashMap;

/// Summary of a dictionary
pub struct DictionaryStats {
    pub total: usize,
    pub playable: usize,
    pub bounds: LengthBounds,
    /// (length, playable words) in increasing length
    pub by_length: Vec<(usize, usize)>,
    /// (letter, occurrences) over playable words, most frequent first
    pub letter_frequency: Vec<(char, usize)>,
}

/// Compute statistics over every entry of `dictionary`
#[must_use]
pub fn dictionary_stats(dictionary: &DictionaryIndex) -> DictionaryStats {
    let mut frequency: FxHashMap<char, usize> = FxHashMap::default();
    for entry in dictionary.entries().filter(|e| e.is_playable()) {
        for ch in normalize(entry.display_word()).chars() {
            *frequency.entry(ch).or_insert(0) += 1;
        }
    }

    let mut letter_frequency: Vec<(char, usize)> = frequency.into_iter().collect();
    letter_frequency.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    DictionaryStats {
        total: dictionary.len(),
        playable: dictionary.playable_count(),
        bounds: dictionary.bounds(),
        by_length: dictionary.count_by_length().into_iter().collect(),
        letter_frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_entries_and_lengths() {
        let dictionary = DictionaryIndex::build(["table", "tapis", "chaise", "week-end", "chat"]);
        let stats = dictionary_stats(&dictionary);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.playable, 3);
        assert_eq!(stats.by_length, vec![(5, 2), (6, 1)]);
    }

    #[test]
    fn stats_letter_frequency_sorted() {
        let dictionary = DictionaryIndex::build(["aaaab", "ébbbc"]);
        let stats = dictionary_stats(&dictionary);

        assert_eq!(stats.letter_frequency[0], ('a', 4));
        assert_eq!(stats.letter_frequency[1], ('b', 4));
        assert_eq!(stats.letter_frequency[2], ('c', 1));
        assert_eq!(stats.letter_frequency[3], ('e', 1));
    }

    #[test]
    fn stats_of_empty_dictionary() {
        let stats = dictionary_stats(&DictionaryIndex::build(Vec::<&str>::new()));
        assert_eq!(stats.total, 0);
        assert!(stats.by_length.is_empty());
        assert!(stats.letter_frequency.is_empty());
    }
}

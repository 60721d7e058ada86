//! Immutable, accent-insensitive word index
//!
//! Built once from a word source, then shared read-only between sessions.

use crate::core::{NormalizedKey, collation_key, is_playable_form, normalize};
use log::{debug, info};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Default shortest retained word
pub const MIN_LENGTH: usize = 5;
/// Default longest retained word
pub const MAX_LENGTH: usize = 8;

/// Inclusive range of retained word lengths, in code points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }

    /// Number of distinct lengths in the range (0 when `min > max`)
    #[must_use]
    pub const fn span(&self) -> usize {
        if self.min > self.max {
            0
        } else {
            self.max - self.min + 1
        }
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::new(MIN_LENGTH, MAX_LENGTH)
    }
}

/// Dictionary failures
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("unable to open dictionary {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to read dictionary: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
    #[error("no playable word of length {length} in dictionary")]
    NoWordFound { length: usize },
}

/// A retained dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    display_word: String,
    is_playable: bool,
    letter_count: usize,
}

impl DictionaryEntry {
    /// Spelling as found in the source
    #[inline]
    #[must_use]
    pub fn display_word(&self) -> &str {
        &self.display_word
    }

    /// Whether the word can be drawn or guessed
    #[inline]
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.is_playable
    }

    /// Length of the display word in code points
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.display_word.chars().count()
    }

    /// Number of board cells the word takes once normalized
    ///
    /// Differs from [`char_len`](Self::char_len) for ligatures: "sœur" has
    /// four code points but five letters.
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_count
    }
}

/// Ordered mapping from collation key to dictionary entry
#[derive(Debug, Clone)]
pub struct DictionaryIndex {
    entries: BTreeMap<NormalizedKey, DictionaryEntry>,
    bounds: LengthBounds,
}

impl DictionaryIndex {
    /// Build an index keeping words of the default 5..=8 lengths
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["Élan", "forêt", "chat", "table"]);
    /// assert_eq!(index.len(), 2); // "Élan" and "chat" are too short
    /// assert!(index.exists("FORET"));
    /// assert!(!index.exists("chat"));
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with_bounds(words, LengthBounds::default())
    }

    /// Build an index keeping words whose length is within `bounds`
    ///
    /// Lines are trimmed. When two lines share a key, the last one wins.
    pub fn build_with_bounds<I, S>(words: I, bounds: LengthBounds) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();
        let total = lines.len();

        // Keys are computed in parallel; collect() keeps the source order so
        // the sequential insert below stays deterministic.
        let keyed: Vec<(NormalizedKey, DictionaryEntry)> = lines
            .into_par_iter()
            .filter(|line| !line.is_empty() && bounds.contains(line.chars().count()))
            .map(|line| {
                let canonical = normalize(&line);
                (
                    collation_key(&line),
                    DictionaryEntry {
                        is_playable: is_playable_form(&canonical),
                        letter_count: canonical.chars().count(),
                        display_word: line,
                    },
                )
            })
            .collect();

        let retained = keyed.len();
        let mut entries = BTreeMap::new();
        for (key, entry) in keyed {
            entries.insert(key, entry);
        }

        info!(
            "dictionary built: {} entries from {total} lines ({retained} in {}..={} letters)",
            entries.len(),
            bounds.min,
            bounds.max
        );

        Self { entries, bounds }
    }

    /// Length bounds applied at build time
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// Number of retained entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that can be drawn or guessed
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_playable).count()
    }

    /// Entries in key order
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values()
    }

    /// Find the entry matching `word`, ignoring case and diacritics
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&collation_key(word))
    }

    /// Check whether `word` is an accepted guess
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        self.lookup(word).is_some_and(DictionaryEntry::is_playable)
    }

    /// Playable entry count per letter count
    #[must_use]
    pub fn count_by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.entries.values().filter(|e| e.is_playable) {
            *counts.entry(entry.letter_count).or_insert(0) += 1;
        }
        counts
    }

    /// Draw a playable word of `length` letters
    ///
    /// Letters are counted on the normalized form, so the drawn word always
    /// fills a board of `length` columns.
    ///
    /// A random offset into the key order is picked; the first matching entry
    /// at or after the offset is returned, wrapping around to the start.
    ///
    /// # Errors
    /// Returns `DictionaryError::NoWordFound` if no playable entry has that length.
    pub fn random_playable_word<R: Rng>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<&DictionaryEntry, DictionaryError> {
        if self.entries.is_empty() {
            return Err(DictionaryError::NoWordFound { length });
        }

        let offset = rng.random_range(0..self.entries.len());
        let matches = |entry: &&DictionaryEntry| entry.is_playable && entry.letter_count == length;

        let found = self
            .entries
            .values()
            .skip(offset)
            .find(matches)
            .or_else(|| self.entries.values().take(offset).find(matches));

        match found {
            Some(entry) => {
                debug!("drew a {length}-letter word from offset {offset}");
                Ok(entry)
            }
            None => Err(DictionaryError::NoWordFound { length }),
        }
    }
}

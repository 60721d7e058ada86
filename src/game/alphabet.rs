//! Per-letter summary of everything learned so far

use crate::core::{ALPHABET_LEN, LetterState, SecretWord, alphabet_index};

/// What is known about one letter of the alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetEntry {
    character: char,
    state: LetterState,
    positions: Vec<usize>,
    found: usize,
}

impl AlphabetEntry {
    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Best feedback received for this letter across all rows
    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }

    /// Zero-based positions of this letter in the secret word
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Occurrences credited during the last validated row
    #[inline]
    #[must_use]
    pub const fn found_count(&self) -> usize {
        self.found
    }

    pub(crate) fn credit_well_placed(&mut self) {
        self.state = LetterState::WellPlaced;
        self.found += 1;
    }

    /// Credit a misplaced occurrence if any is left uncredited
    ///
    /// Returns the state the board cell gets. The entry state never moves
    /// down: `WellPlaced` stays, and `NotPresent` only replaces `Unknown`.
    pub(crate) fn credit_misplaced(&mut self) -> LetterState {
        if self.found < self.positions.len() {
            self.found += 1;
            if self.state != LetterState::WellPlaced {
                self.state = LetterState::Present;
            }
            LetterState::Present
        } else {
            if self.state == LetterState::Unknown {
                self.state = LetterState::NotPresent;
            }
            LetterState::NotPresent
        }
    }
}

/// The 26 alphabet entries, indexed by letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTracker {
    entries: [AlphabetEntry; ALPHABET_LEN],
}

impl AlphabetTracker {
    pub(crate) fn new(secret: &SecretWord) -> Self {
        let entries = std::array::from_fn(|i| {
            let letter = b'a' + i as u8;
            AlphabetEntry {
                character: char::from(letter),
                state: LetterState::Unknown,
                positions: secret.positions_of(letter).to_vec(),
                found: 0,
            }
        });
        Self { entries }
    }

    /// Entries from `a` to `z`
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[AlphabetEntry] {
        &self.entries
    }

    /// Entry for `ch`, case-insensitive; `None` outside `a`..=`z`
    #[must_use]
    pub fn entry(&self, ch: char) -> Option<&AlphabetEntry> {
        let lower = ch.to_ascii_lowercase();
        lower
            .is_ascii_lowercase()
            .then(|| &self.entries[alphabet_index(lower as u8)])
    }

    /// State of `ch`, `Unknown` for characters outside the alphabet
    #[must_use]
    pub fn state_of(&self, ch: char) -> LetterState {
        self.entry(ch).map_or(LetterState::Unknown, AlphabetEntry::state)
    }

    /// Score `guess` against the canonical `secret`, updating letter states
    ///
    /// Exact matches are credited first, then misplaced letters left to
    /// right until each letter's occurrence count is used up. Both slices
    /// must hold `a`..=`z` bytes and have the same length.
    pub(crate) fn score(&mut self, secret: &[u8], guess: &[u8]) -> Vec<LetterState> {
        debug_assert_eq!(secret.len(), guess.len());
        self.reset_found();

        let mut states = vec![LetterState::Unknown; guess.len()];

        // First pass: exact matches
        for (col, (&letter, &expected)) in guess.iter().zip(secret).enumerate() {
            if letter == expected {
                states[col] = LetterState::WellPlaced;
                self.entry_mut(letter).credit_well_placed();
            }
        }

        // Second pass: misplaced letters
        for (col, &letter) in guess.iter().enumerate() {
            if states[col] != LetterState::WellPlaced {
                states[col] = self.entry_mut(letter).credit_misplaced();
            }
        }

        states
    }

    pub(crate) fn reset_found(&mut self) {
        for entry in &mut self.entries {
            entry.found = 0;
        }
    }

    pub(crate) fn entry_mut(&mut self, letter: u8) -> &mut AlphabetEntry {
        &mut self.entries[alphabet_index(letter)]
    }
}

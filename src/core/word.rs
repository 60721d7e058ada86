//! Secret word representation
//!
//! A `SecretWord` keeps the dictionary spelling for display and the canonical
//! form used for letter-by-letter scoring, along with letter position indices
//! for duplicate handling.

use super::normalize::{is_playable_form, normalize};
use std::fmt;
use thiserror::Error;

/// Number of letters a board can hold
pub const ALPHABET_LEN: usize = 26;

/// Slot of an `a`..=`z` byte in a 26-entry table
///
/// # Panics
/// Panics in debug mode if `letter` is not an ASCII lowercase letter
#[inline]
#[must_use]
pub const fn alphabet_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// Error type for words that cannot be used as a secret
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("secret word is empty")]
    Empty,
    #[error("secret word {0:?} contains letters outside a-z once normalized")]
    NotPlayable(String),
}

/// The word the player has to find
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    display: String,
    canonical: String,
    positions: [Vec<usize>; ALPHABET_LEN],
}

impl SecretWord {
    /// Canonicalize a dictionary spelling into a secret word
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or its canonical form holds
    /// anything but `a`..=`z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::SecretWord;
    ///
    /// let word = SecretWord::new("Forêt").unwrap();
    /// assert_eq!(word.canonical(), "foret");
    /// assert_eq!(word.display(), "Forêt");
    /// assert_eq!(word.positions_of(b'e'), &[3]);
    ///
    /// assert!(SecretWord::new("porte-clé").is_err());
    /// ```
    pub fn new(display: impl Into<String>) -> Result<Self, WordError> {
        let display: String = display.into().trim().to_string();
        if display.is_empty() {
            return Err(WordError::Empty);
        }

        let canonical = normalize(&display);
        if !is_playable_form(&canonical) {
            return Err(WordError::NotPlayable(display));
        }

        let mut positions: [Vec<usize>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        for (i, &ch) in canonical.as_bytes().iter().enumerate() {
            positions[alphabet_index(ch)].push(i);
        }

        Ok(Self {
            display,
            canonical,
            positions,
        })
    }

    /// Original dictionary spelling
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Lowercase, diacritic-free form compared against guesses
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Canonical form as bytes, all in `a`..=`z`
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.canonical.as_bytes()
    }

    /// Number of board columns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Always false, construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// First canonical letter, revealed on every row
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.bytes()[0]
    }

    /// All positions where a letter appears
    ///
    /// Returns an empty slice for letters that do not appear or are outside `a`..=`z`.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        if letter.is_ascii_lowercase() {
            &self.positions[alphabet_index(letter)]
        } else {
            &[]
        }
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_word_keeps_both_forms() {
        let word = SecretWord::new("Élève").unwrap();
        assert_eq!(word.display(), "Élève");
        assert_eq!(word.canonical(), "eleve");
        assert_eq!(word.len(), 5);
        assert_eq!(word.first_letter(), b'e');
    }

    #[test]
    fn secret_word_trims_input() {
        let word = SecretWord::new("  table\r").unwrap();
        assert_eq!(word.display(), "table");
        assert_eq!(word.canonical(), "table");
    }

    #[test]
    fn secret_word_rejects_empty() {
        assert_eq!(SecretWord::new(""), Err(WordError::Empty));
        assert_eq!(SecretWord::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn secret_word_rejects_non_letters() {
        assert!(matches!(
            SecretWord::new("aujourd'hui"),
            Err(WordError::NotPlayable(_))
        ));
        assert!(SecretWord::new("tab1e").is_err());
    }

    #[test]
    fn positions_of_duplicates() {
        let word = SecretWord::new("melee").unwrap();
        assert_eq!(word.positions_of(b'e'), &[1, 3, 4]);
        assert_eq!(word.positions_of(b'm'), &[0]);
        assert_eq!(word.positions_of(b'l'), &[2]);
        assert_eq!(word.positions_of(b'z'), &[]);
        assert_eq!(word.positions_of(b'.'), &[]);
    }

    #[test]
    fn bytes_hold_canonical_form() {
        let word = SecretWord::new("Crâne").unwrap();
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.first_letter(), b'c');
    }

    #[test]
    fn alphabet_index_bounds() {
        assert_eq!(alphabet_index(b'a'), 0);
        assert_eq!(alphabet_index(b'z'), 25);
    }
}

//! Board letters and their feedback state

use std::fmt;

/// Character marking an unfilled board cell
pub const SENTINEL: char = '.';

/// Feedback attached to a letter, on the board or in the alphabet summary
///
/// Variants are declared from least to most informative, so the derived
/// ordering can be used to compare how much is known about a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterState {
    /// Not scored yet
    #[default]
    Unknown,
    /// Letter does not occur (or all its occurrences are already credited)
    NotPresent,
    /// Letter occurs elsewhere in the secret word
    Present,
    /// Letter is at the right position
    WellPlaced,
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    character: char,
    state: LetterState,
}

impl Letter {
    /// An unfilled cell
    pub const EMPTY: Self = Self {
        character: SENTINEL,
        state: LetterState::Unknown,
    };

    /// A filled, not yet scored cell
    #[inline]
    #[must_use]
    pub const fn new(character: char) -> Self {
        Self {
            character,
            state: LetterState::Unknown,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterState {
        self.state
    }

    /// Whether the cell still holds the sentinel
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.character == SENTINEL
    }

    #[inline]
    pub(crate) const fn set_state(&mut self, state: LetterState) {
        self.state = state;
    }
}

impl Default for Letter {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character)
    }
}

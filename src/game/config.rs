//! Session configuration

use super::error::SessionError;
use crate::dictionary::LengthBounds;

/// Default number of attempts
pub const DEFAULT_ROWS: usize = 6;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of attempts
    pub rows: usize,
    /// Range the secret word length is drawn from
    pub lengths: LengthBounds,
    /// Fixed secret word bypassing dictionary selection
    pub forced_word: Option<String>,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub const fn with_lengths(mut self, lengths: LengthBounds) -> Self {
        self.lengths = lengths;
        self
    }

    #[must_use]
    pub fn with_forced_word(mut self, word: impl Into<String>) -> Self {
        self.forced_word = Some(word.into());
        self
    }

    /// Check the configuration can produce a game
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfig` if there are no rows, or the
    /// length range is empty or starts at zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.rows == 0 {
            return Err(SessionError::InvalidConfig(
                "at least one row is required".to_string(),
            ));
        }
        if self.lengths.min == 0 || self.lengths.span() == 0 {
            return Err(SessionError::InvalidConfig(format!(
                "word length range {}..={} is empty",
                self.lengths.min, self.lengths.max
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            lengths: LengthBounds::default(),
            forced_word: None,
        }
    }
}

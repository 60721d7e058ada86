//! Game error taxonomy
//!
//! `ValidationError` is recoverable: the row is left as typed and the player
//! may edit it. `SessionError` aborts session creation.

use crate::core::WordError;
use thiserror::Error;

/// Reasons a row submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("row has unfilled cells")]
    LineIncomplete,
    #[error("word is not in the dictionary")]
    WordUnknown,
}

/// Reasons a session cannot be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no playable word of length {length} in dictionary")]
    NoWordFound { length: usize },
    #[error("invalid secret word: {0}")]
    InvalidSecretWord(#[from] WordError),
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}

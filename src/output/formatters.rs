//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::{Board, Row, ValidationError};

/// Format a letter state as an emoji square
#[must_use]
pub const fn state_to_emoji(state: LetterState) -> char {
    match state {
        LetterState::WellPlaced => '🟩',
        LetterState::Present => '🟨',
        LetterState::NotPresent => '⬜',
        LetterState::Unknown => '·',
    }
}

/// Format a row's feedback as an emoji string
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.letters()
        .iter()
        .map(|letter| state_to_emoji(letter.state()))
        .collect()
}

/// Emoji grid of every scored row, one line per row
///
/// Rows still holding unscored letters are left out, so the grid can be
/// shared without revealing any letter.
#[must_use]
pub fn board_to_emoji(board: &Board) -> String {
    board
        .rows()
        .iter()
        .filter(|row| {
            row.letters()
                .iter()
                .all(|letter| letter.state() != LetterState::Unknown)
        })
        .map(row_to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Player-facing text for a rejected row
#[must_use]
pub const fn validation_message(error: ValidationError) -> &'static str {
    match error {
        ValidationError::LineIncomplete => "Fill every letter before submitting.",
        ValidationError::WordUnknown => "This word is not in the dictionary.",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Terminal output formatting
//!
//! Display utilities for the game board and command results.

pub mod display;
pub mod formatters;

pub use display::{print_alphabet, print_board, print_check_result, print_outcome, print_stats};
pub use formatters::{board_to_emoji, validation_message};

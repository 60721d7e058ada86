//! Wordle Rules
//!
//! Rules engine for a Wordle-style word game: accent- and case-insensitive
//! dictionary lookup, secret word selection and duplicate-aware row scoring.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_rules::core::LetterState;
//! use wordle_rules::dictionary::DictionaryIndex;
//! use wordle_rules::game::{GameConfig, GameSession, GameState};
//!
//! // Build the shared dictionary once
//! let dictionary = Arc::new(DictionaryIndex::build(["forêt", "fleur", "table"]));
//!
//! // Start a game; the first letter is revealed
//! let mut session = GameSession::with_word(dictionary, &GameConfig::default(), "Forêt").unwrap();
//!
//! for ch in "leur".chars() {
//!     session.add_letter(ch);
//! }
//! session.validate().unwrap();
//!
//! let board = session.board_snapshot();
//! assert_eq!(board.rows()[0].letters()[0].state(), LetterState::WellPlaced);
//! assert_eq!(session.game_state(), GameState::Continue);
//! ```

// Core domain types
pub mod core;

// Word dictionary
pub mod dictionary;

// Game session and state
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

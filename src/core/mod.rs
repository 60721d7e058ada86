//! Core domain types for the game
//!
//! Pure text normalization, letters and the secret word. Nothing here holds
//! mutable game state.

mod letter;
mod normalize;
mod word;

pub use letter::{Letter, LetterState, SENTINEL};
pub use normalize::{NormalizedKey, collation_key, is_playable_form, normalize, normalize_letter};
pub use word::{ALPHABET_LEN, SecretWord, WordError, alphabet_index};

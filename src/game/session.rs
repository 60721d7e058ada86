//! Game session: the row validation state machine
//!
//! A session owns the secret word, the board and the alphabet summary. The
//! dictionary is shared read-only through an `Arc`.
//!
//! ```
//! use std::sync::Arc;
//! use wordle_rules::dictionary::DictionaryIndex;
//! use wordle_rules::game::{GameConfig, GameSession, GameState};
//!
//! let dictionary = Arc::new(DictionaryIndex::build(["table", "tapis", "lapin"]));
//! let mut session = GameSession::with_word(dictionary, &GameConfig::default(), "table").unwrap();
//!
//! for ch in "able".chars() {
//!     session.add_letter(ch);
//! }
//! session.validate().unwrap();
//! assert_eq!(session.game_state(), GameState::Won);
//! ```

use super::alphabet::AlphabetTracker;
use super::board::{Board, Row};
use super::config::GameConfig;
use super::error::{SessionError, ValidationError};
use crate::core::{Letter, LetterState, SecretWord, normalize_letter};
use crate::dictionary::DictionaryIndex;
use log::{debug, info, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::sync::Arc;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Continue,
    Won,
    Lost,
}

/// One game, from the first row to a win or a loss
pub struct GameSession {
    dictionary: Arc<DictionaryIndex>,
    secret: SecretWord,
    board: Board,
    alphabet: AlphabetTracker,
    current_row: usize,
    state: GameState,
}

impl GameSession {
    /// Start a game with a secret word drawn from the dictionary
    ///
    /// A forced word in `config` bypasses the draw. Otherwise a length is
    /// picked at random from the configured range; when the dictionary has no
    /// playable word of that length the other lengths are tried in random
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfig` for an unusable configuration,
    /// `SessionError::NoWordFound` if no length in the range has a playable
    /// word and `SessionError::InvalidSecretWord` if a forced word is not
    /// playable.
    pub fn new<R: Rng>(
        dictionary: Arc<DictionaryIndex>,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        if let Some(word) = &config.forced_word {
            debug!("using forced secret word");
            return Self::with_word(dictionary, config, word);
        }

        let mut lengths: Vec<usize> = (config.lengths.min..=config.lengths.max).collect();
        lengths.shuffle(rng);

        let mut last_error = SessionError::NoWordFound {
            length: config.lengths.min,
        };
        for length in lengths {
            match Self::with_length(Arc::clone(&dictionary), config, length, rng) {
                Ok(session) => return Ok(session),
                Err(err @ SessionError::NoWordFound { .. }) => {
                    debug!("{err}, trying another length");
                    last_error = err;
                }
                Err(err) => return Err(err),
            }
        }

        Err(last_error)
    }

    /// Start a game with a secret word of exactly `length` letters
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoWordFound` if the dictionary has no playable
    /// word of that length.
    pub fn with_length<R: Rng>(
        dictionary: Arc<DictionaryIndex>,
        config: &GameConfig,
        length: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let display = match dictionary.random_playable_word(length, rng) {
            Ok(entry) => entry.display_word().to_string(),
            Err(err) => {
                debug!("{err}");
                return Err(SessionError::NoWordFound { length });
            }
        };

        let secret = SecretWord::new(display)?;
        Ok(Self::start(dictionary, config, secret))
    }

    /// Start a game with a fixed secret word
    ///
    /// The word goes through the same canonicalization as dictionary words
    /// but does not need to be in the dictionary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidSecretWord` if the word is empty or not
    /// made of plain letters once normalized.
    pub fn with_word(
        dictionary: Arc<DictionaryIndex>,
        config: &GameConfig,
        word: &str,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        let secret = SecretWord::new(word)?;
        Ok(Self::start(dictionary, config, secret))
    }

    fn start(dictionary: Arc<DictionaryIndex>, config: &GameConfig, secret: SecretWord) -> Self {
        debug!(
            "new session: {}-letter word, {} rows",
            secret.len(),
            config.rows
        );
        trace!("secret word: {}", secret.display());

        let board = Board::new(config.rows, secret.len(), char::from(secret.first_letter()));
        let alphabet = AlphabetTracker::new(&secret);

        Self {
            dictionary,
            secret,
            board,
            alphabet,
            current_row: 0,
            state: GameState::Continue,
        }
    }

    fn accepts_input(&self) -> bool {
        self.state == GameState::Continue && self.current_row < self.board.len()
    }

    /// Type a letter in the first free cell of the current row
    ///
    /// The letter is normalized first; anything that does not reduce to a
    /// single `a`..=`z` letter is ignored, as is input on a full row.
    pub fn add_letter(&mut self, ch: char) {
        if !self.accepts_input() {
            return;
        }
        let Some(letter) = normalize_letter(ch) else {
            trace!("ignoring input {ch:?}");
            return;
        };

        let row = self.board.row_mut(self.current_row);
        if let Some(col) = row.first_empty() {
            row.set(col, Letter::new(char::from(letter)));
        }
    }

    /// Erase the last typed letter of the current row
    ///
    /// Column 0 holds the revealed first letter and is never erased.
    pub fn remove_letter(&mut self) {
        if !self.accepts_input() {
            return;
        }

        let row = self.board.row_mut(self.current_row);
        if let Some(col) = row.last_erasable() {
            row.set(col, Letter::EMPTY);
        }
    }

    /// Submit the current row
    ///
    /// Scores every cell, updates the alphabet summary and moves to the next
    /// row, or ends the game. Does nothing once the game is over.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LineIncomplete` if a cell is unfilled and
    /// `ValidationError::WordUnknown` if the word is not in the dictionary.
    /// In both cases nothing is modified.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if !self.accepts_input() {
            return Ok(());
        }

        let row = &self.board.rows()[self.current_row];
        if !row.is_complete() {
            return Err(ValidationError::LineIncomplete);
        }

        let candidate = row.word();
        if !self.dictionary.exists(&candidate) {
            debug!("rejected unknown word on row {}", self.current_row);
            return Err(ValidationError::WordUnknown);
        }

        // Board letters are always a-z: add_letter normalizes its input and
        // column 0 comes from the canonical secret word.
        let states = self.alphabet.score(self.secret.bytes(), candidate.as_bytes());
        let row = self.board.row_mut(self.current_row);
        for (col, &state) in states.iter().enumerate() {
            row.set_state(col, state);
        }

        if states.iter().all(|&state| state == LetterState::WellPlaced) {
            info!("game won on row {}", self.current_row + 1);
            self.state = GameState::Won;
            return Ok(());
        }

        self.current_row += 1;
        if self.current_row < self.board.len() {
            self.board
                .reveal_first_letter(self.current_row, char::from(self.secret.first_letter()));
        } else {
            info!("game lost after {} rows", self.board.len());
            self.state = GameState::Lost;
        }

        Ok(())
    }

    /// Zero-based index of the row being played
    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn game_state(&self) -> GameState {
        self.state
    }

    /// Whether the game reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Continue
    }

    /// Secret word in its dictionary spelling
    ///
    /// Meant to be shown to the player once the game is lost.
    #[inline]
    #[must_use]
    pub fn secret_word_display(&self) -> &str {
        self.secret.display()
    }

    /// Secret word in its dictionary spelling, only once the game is lost
    #[must_use]
    pub fn revealed_word(&self) -> Option<&str> {
        (self.state == GameState::Lost).then(|| self.secret.display())
    }

    /// First letter of the secret word, revealed in column 0 of every row
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        char::from(self.secret.first_letter())
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    /// Rows left to play, the current one included
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        if self.is_over() {
            0
        } else {
            self.board.len().saturating_sub(self.current_row)
        }
    }

    /// Copy of the row being played, `None` once all rows are used
    #[must_use]
    pub fn current_row_letters(&self) -> Option<Row> {
        self.board.row(self.current_row).cloned()
    }

    /// Independent copy of the board
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Independent copy of the alphabet summary
    #[must_use]
    pub fn alphabet_snapshot(&self) -> AlphabetTracker {
        self.alphabet.clone()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("word_length", &self.secret.len())
            .field("current_row", &self.current_row)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

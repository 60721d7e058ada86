//! Interactive play mode
//!
//! Line-based game loop: each line typed replaces the letters of the current
//! row and is submitted.

use crate::core::{is_playable_form, normalize};
use crate::dictionary::DictionaryIndex;
use crate::game::{GameConfig, GameSession, ValidationError};
use crate::output::{print_alphabet, print_board, print_outcome, validation_message};
use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;

/// What a line of player input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput<'a> {
    Quit,
    NewGame,
    Guess(&'a str),
}

impl<'a> PlayerInput<'a> {
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            _ => Self::Guess(line),
        }
    }
}

/// Reasons a typed guess never reaches the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("use plain letters only")]
    NotLetters,
    #[error("the word has {expected} letters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("the word starts with '{0}'")]
    WrongFirstLetter(char),
    #[error(transparent)]
    Rejected(#[from] ValidationError),
}

/// Replace the current row with `guess` and submit it
///
/// The revealed first letter may be typed or omitted. Any other letter count
/// is refused before the row is touched.
///
/// # Errors
///
/// Returns a `GuessError` for a guess that does not fit the row, or the
/// `ValidationError` from [`GameSession::validate`].
pub fn apply_guess(session: &mut GameSession, guess: &str) -> Result<(), GuessError> {
    if session.is_over() {
        return Ok(());
    }

    let canonical = normalize(guess.trim());
    if !is_playable_form(&canonical) {
        return Err(GuessError::NotLetters);
    }

    let width = session.word_length();
    let first = session.first_letter();
    let letters = match canonical.len() {
        found if found == width => {
            if !canonical.starts_with(first) {
                return Err(GuessError::WrongFirstLetter(first));
            }
            &canonical[1..]
        }
        found if found + 1 == width => canonical.as_str(),
        found => {
            return Err(GuessError::WrongLength {
                expected: width,
                found,
            });
        }
    };

    while session
        .current_row_letters()
        .is_some_and(|row| !row.is_empty_after_hint())
    {
        session.remove_letter();
    }
    for ch in letters.chars() {
        session.add_letter(ch);
    }
    session.validate().map_err(GuessError::from)
}

/// Run the interactive game loop on stdin
///
/// # Errors
///
/// Returns an error if a session cannot be created or stdin/stdout fail.
pub fn run_play<R: Rng>(
    dictionary: &Arc<DictionaryIndex>,
    config: &GameConfig,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════╗");
    println!("║                 Find the word!                   ║");
    println!("╚══════════════════════════════════════════════════╝\n");
    println!("  {} letter at the right place", " A ".black().on_green());
    println!("  {} letter elsewhere in the word", " A ".black().on_yellow());
    println!("  {} letter not in the word", " A ".white().on_bright_black());
    println!("\nCommands: 'new' for a new game, 'quit' to exit\n");

    let mut session = GameSession::new(Arc::clone(dictionary), config, rng)?;

    loop {
        print_board(&session.board_snapshot());

        if session.is_over() {
            print_outcome(&session);
            match read_input("Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    session = GameSession::new(Arc::clone(dictionary), config, rng)?;
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        println!(
            "{} letters, attempt {}/{}",
            session.word_length(),
            session.current_row() + 1,
            session.rows()
        );
        let Some(line) = read_input("Your guess")? else {
            return Ok(());
        };

        match PlayerInput::parse(&line) {
            PlayerInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayerInput::NewGame => {
                debug!("abandoning game on row {}", session.current_row());
                session = GameSession::new(Arc::clone(dictionary), config, rng)?;
                println!("\n🔄 New game started!");
            }
            PlayerInput::Guess(guess) => match apply_guess(&mut session, guess) {
                Ok(()) => print_alphabet(&session.alphabet_snapshot()),
                Err(GuessError::Rejected(err)) => println!("{}", validation_message(err).red()),
                Err(err) => println!("{}", err.to_string().red()),
            },
        }
    }
}

/// Prompt and read one line, `None` at end of input
fn read_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

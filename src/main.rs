//! Wordle Rules - CLI
//!
//! Play a Wordle-style game in the terminal, or inspect a dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::sync::Arc;
use wordle_rules::{
    commands::{check_word, dictionary_stats, run_play},
    dictionary::{DictionaryIndex, LengthBounds, MAX_LENGTH, MIN_LENGTH},
    game::{DEFAULT_ROWS, GameConfig},
    output::{print_check_result, print_stats},
};

#[derive(Parser)]
#[command(
    name = "wordle_rules",
    about = "Wordle-style word game with accent-insensitive dictionaries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Number of attempts
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Shortest word kept in the dictionary and drawn as a secret
    #[arg(long, global = true, default_value_t = MIN_LENGTH)]
    min_length: usize,

    /// Longest word kept in the dictionary and drawn as a secret
    #[arg(long, global = true, default_value_t = MAX_LENGTH)]
    max_length: usize,

    /// Fixed secret word instead of a random draw
    #[arg(short, long, global = true, env = "WORDLE_RULES_WORD")]
    word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play,

    /// Check whether a word is accepted by the dictionary
    Check {
        /// Word to look up
        word: String,
    },

    /// Show dictionary statistics
    Stats,
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str, bounds: LengthBounds) -> Result<DictionaryIndex> {
    match source {
        "embedded" => Ok(DictionaryIndex::embedded_with_bounds(bounds)),
        path => DictionaryIndex::from_path_with_bounds(path, bounds)
            .with_context(|| format!("failed to load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bounds = LengthBounds::new(cli.min_length, cli.max_length);
    let dictionary = Arc::new(load_dictionary(&cli.dictionary, bounds)?);
    info!("loaded {} dictionary entries", dictionary.len());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut config = GameConfig::new().with_rows(cli.rows).with_lengths(bounds);
            if let Some(word) = cli.word {
                config = config.with_forced_word(word);
            }
            run_play(&dictionary, &config, &mut rand::rng())
        }
        Commands::Check { word } => {
            print_check_result(&check_word(&word, &dictionary));
            Ok(())
        }
        Commands::Stats => {
            print_stats(&dictionary_stats(&dictionary));
            Ok(())
        }
    }
}

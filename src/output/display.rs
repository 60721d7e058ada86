//! Display functions for the game and command results

use super::formatters::{board_to_emoji, create_progress_bar};
use crate::commands::{CheckResult, DictionaryStats};
use crate::core::{Letter, LetterState};
use crate::game::{AlphabetTracker, Board, GameSession, GameState};
use colored::{ColoredString, Colorize};

/// Color a board cell by its feedback
#[must_use]
pub fn colorize_letter(letter: &Letter) -> ColoredString {
    let text = format!(" {} ", letter.character().to_ascii_uppercase());
    match letter.state() {
        LetterState::WellPlaced => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::NotPresent => text.white().on_bright_black(),
        LetterState::Unknown => text.bright_white(),
    }
}

/// Print the board, one row per line
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        let cells: Vec<String> = row
            .letters()
            .iter()
            .map(|letter| colorize_letter(letter).to_string())
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}

/// Print the alphabet summary on a single line
pub fn print_alphabet(alphabet: &AlphabetTracker) {
    let letters: Vec<String> = alphabet
        .entries()
        .iter()
        .map(|entry| {
            let ch = entry.character().to_ascii_uppercase().to_string();
            match entry.state() {
                LetterState::WellPlaced => ch.green().bold().to_string(),
                LetterState::Present => ch.yellow().bold().to_string(),
                LetterState::NotPresent => ch.bright_black().strikethrough().to_string(),
                LetterState::Unknown => ch,
            }
        })
        .collect();
    println!("  {}", letters.join(" "));
}

/// Print the end-of-game banner
pub fn print_outcome(session: &GameSession) {
    println!("{}", "═".repeat(50).bright_cyan());
    match session.game_state() {
        GameState::Won => {
            let attempts = session.current_row() + 1;
            println!(
                "{}",
                format!(
                    "🎉 Found in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameState::Lost => {
            println!(
                "{} {}",
                "❌ Out of attempts. The word was".red().bold(),
                session
                    .revealed_word()
                    .unwrap_or_default()
                    .to_uppercase()
                    .bright_yellow()
                    .bold()
            );
        }
        GameState::Continue => {}
    }

    let grid = board_to_emoji(&session.board_snapshot());
    if !grid.is_empty() {
        println!("\n{grid}");
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(50).cyan());
    println!("Word:       {}", result.input.bright_yellow().bold());
    println!("Normalized: {}", result.normalized);
    println!("Length:     {}", result.length);

    match &result.entry {
        Some(display) if result.playable => {
            println!("{} (as {})", "✅ Accepted guess".green().bold(), display);
        }
        Some(display) => {
            println!(
                "{} (as {}, not typeable on the board)",
                "⚠️  In dictionary but not playable".yellow().bold(),
                display
            );
        }
        None => println!("{}", "❌ Not in dictionary".red().bold()),
    }
    println!("{}", "─".repeat(50).cyan());
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {}", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\nEntries:  {} ({} playable)",
        stats.total.to_string().bright_white().bold(),
        stats.playable.to_string().green()
    );
    println!("Lengths:  {}..={}", stats.bounds.min, stats.bounds.max);

    println!("\n{}", "By length:".bold());
    let max_count = stats.by_length.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for &(length, count) in &stats.by_length {
        println!(
            "  {length:>2} letters  {} {count}",
            create_progress_bar(count as f64, max_count as f64, 30).cyan()
        );
    }

    println!("\n{}", "Letter frequency:".bold());
    let max_freq = stats
        .letter_frequency
        .first()
        .map_or(0, |&(_, count)| count);
    for &(letter, count) in stats.letter_frequency.iter().take(10) {
        println!(
            "  {}  {} {count}",
            letter.to_ascii_uppercase(),
            create_progress_bar(count as f64, max_freq as f64, 30).green()
        );
    }
}

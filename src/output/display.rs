//! Display functions for the line-mode front end

use super::formatters::{GAME_TITLE, distribution_bar, share_text};
use crate::core::{Feedback, Game, KeyCap, KeyStatuses, LetterStatus, Statistics, Tile, TileStatus};
use crate::hints::WordInfo;
use colored::{ColoredString, Colorize};

/// Render one tile as a coloured three-character cell
fn tile_cell(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.unwrap_or('·'));
    match tile.status {
        TileStatus::Correct => text.white().on_green().bold(),
        TileStatus::Present => text.white().on_yellow().bold(),
        TileStatus::Absent => text.bright_black().on_black(),
        TileStatus::Tbd => text.bright_white().bold(),
        TileStatus::Empty => text.bright_black(),
    }
}

/// Print the title banner
pub fn print_banner(word_length: usize, max_rows: usize) {
    println!("\n{}", "═".repeat(50).magenta());
    println!(" ♥ {} ♥", GAME_TITLE.bright_magenta().bold());
    println!("{}", "═".repeat(50).magenta());
    println!("\nGuess the {word_length}-letter word in {max_rows} tries.");
    println!("Commands: 'hint', 'new', 'quit'\n");
}

/// Print every row of the board, with pending input overlaid
pub fn print_board(game: &Game) {
    let state = game.state();
    for row in 0..state.board().row_count() {
        let cells: Vec<String> = (0..state.board().column_count())
            .map(|col| tile_cell(game.display_tile(row, col)).to_string())
            .collect();
        println!("   {}", cells.join(" "));
    }
    println!();
}

/// Print a single guess with its feedback, e.g. for the `check` command
pub fn print_feedback(guess: &str, feedback: &Feedback) {
    let cells: Vec<String> = guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| {
            let tile = Tile::new(letter.to_ascii_uppercase(), TileStatus::from(status));
            tile_cell(tile).to_string()
        })
        .collect();
    println!("\n   {}", cells.join(" "));
    println!("   {}", feedback.to_emoji());

    let verdict = if feedback.is_perfect() {
        "Solved!".green().bold()
    } else {
        format!(
            "{} correct, {} present, {} absent",
            feedback.count_correct(),
            feedback.count_present(),
            feedback
                .statuses()
                .iter()
                .filter(|&&s| s == LetterStatus::Absent)
                .count()
        )
        .normal()
    };
    println!("   {verdict}\n");
}

/// Print the keyboard coloured by best known status
pub fn print_keyboard(layout: &[Vec<KeyCap>], statuses: &KeyStatuses) {
    for (i, row) in layout.iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&key| {
                let label = key.label();
                match statuses.for_key(key) {
                    TileStatus::Correct => label.white().on_green().to_string(),
                    TileStatus::Present => label.white().on_yellow().to_string(),
                    TileStatus::Absent => label.bright_black().to_string(),
                    TileStatus::Empty | TileStatus::Tbd => label.normal().to_string(),
                }
            })
            .collect();
        println!("{}{}", " ".repeat(i * 2 + 3), keys.join(" "));
    }
    println!();
}

/// Print a transient or final game message
pub fn print_message(message: &str) {
    if !message.is_empty() {
        println!("   {}\n", message.bright_magenta().bold());
    }
}

/// Print a hint
pub fn print_hint(hint: &str) {
    println!("   {} \"{}\"\n", "♥".magenta(), hint.italic());
}

/// Print the end-of-game summary with word details and share text
pub fn print_game_over(game: &Game, info: &WordInfo, stats: &Statistics) {
    println!("{}", "─".repeat(50).cyan());
    println!(
        " {} {}",
        info.word.bright_yellow().bold(),
        format!(": {}", info.definition).normal()
    );
    println!("   \"{}\"", info.example.italic());
    if let Some(etymology) = &info.etymology {
        println!("   {}", etymology.bright_black());
    }
    println!("{}", "─".repeat(50).cyan());
    println!("\n{}\n", share_text(game.state()));
    print_statistics(stats);
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "📊 Played: {}  Won: {}  Win rate: {:.0}%  Streak: {} (best {})",
        stats.played,
        stats.won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            distribution_bar(count, max, 20).green()
        );
    }
    println!();
}

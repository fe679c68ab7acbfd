//! Simple line-mode game
//!
//! Text-based game on stdin/stdout without the TUI

use crate::config::ResolvedConfig;
use crate::core::{Game, GameStatus, Statistics, keyboard_layout};
use crate::hints::{hint_or_fallback, opening_hint, provider_from_config, word_info_or_fallback};
use crate::output::{
    print_banner, print_board, print_game_over, print_hint, print_keyboard, print_message,
};
use anyhow::Result;
use log::info;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleInput {
    Quit,
    New,
    Hint,
    Guess(String),
}

impl SimpleInput {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::New,
            "hint" | "?" => Self::Hint,
            _ => Self::Guess(trimmed.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the configured target does not fit the board or if
/// reading stdin / writing stdout fails.
pub fn run_simple(config: &ResolvedConfig) -> Result<()> {
    let mut game =
        Game::new(config.rules, config.target.clone())?.with_win_message(&config.win_message);
    let provider = provider_from_config(config);
    let layout = keyboard_layout(&config.keyboard);
    let mut stats = Statistics::default();

    info!("Simple mode started");
    print_banner(config.rules.word_length, config.rules.max_rows);
    if let Some(hint) = opening_hint(config, provider.as_ref(), game.state().target()) {
        print_hint(&hint);
    }

    loop {
        print_board(&game);
        print_keyboard(&layout, &game.key_statuses());

        let Some(line) = get_user_input("Guess")? else {
            println!();
            return Ok(());
        };

        match SimpleInput::parse(&line) {
            SimpleInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleInput::New => {
                game.restart();
                println!("\n🔄 New game started!\n");
            }
            SimpleInput::Hint => {
                let hint = hint_or_fallback(
                    provider.as_ref(),
                    game.state().target(),
                    &game.guesses(),
                    &config.fallback_hint,
                );
                print_hint(&hint);
            }
            SimpleInput::Guess(guess) => match game.enter_guess(&guess) {
                Ok(outcome) if outcome.status.is_over() => {
                    stats.record(game.state());
                    print_board(&game);
                    print_message(game.state().message());
                    if outcome.status == GameStatus::Lost {
                        println!("   Next time!\n");
                    }
                    let word_info = word_info_or_fallback(provider.as_ref(), game.state().target());
                    print_game_over(&game, &word_info, &stats);

                    match get_user_input("Play again? (y/n)")? {
                        Some(answer) if answer.eq_ignore_ascii_case("y") => {
                            game.restart();
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    println!("\n   ❌ {e}\n");
                    game.clear_transient_message();
                }
            },
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

//! Anniverswordle - CLI
//!
//! Six-letter word game with TUI and line modes.

use anniverswordle::{
    commands::{check_guess, run_simple},
    config::{Overrides, ResolvedConfig, load_config, resolve},
    interactive::{App, run_tui},
    output::print_feedback,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anniverswordle",
    about = "Guess the six-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target word, overriding config and environment
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Number of guess rows
    #[arg(short, long, global = true)]
    rows: Option<usize>,

    /// Log file path
    #[arg(long, global = true, default_value = "anniverswordle.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Check one guess against the target
    Check {
        /// The guess to evaluate
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize file logger; the TUI owns the terminal so nothing goes to stderr
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&cli.log_file) {
        let _ = WriteLogger::init(cli.log_level, log_config, log_file);
    }

    let config = load_settings(&cli)?;
    log::info!(
        "Anniverswordle starting: {} letters, {} rows",
        config.rules.word_length,
        config.rules.max_rows
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(config)?),
        Commands::Simple => run_simple(&config),
        Commands::Check { guess } => run_check_command(&config, &guess),
    }
}

fn load_settings(cli: &Cli) -> Result<ResolvedConfig> {
    let file = load_config(cli.config.as_deref())?;
    let overrides = Overrides::from_cli_and_env(cli.target.clone(), cli.rows);
    Ok(resolve(&file, &overrides)?)
}

fn run_check_command(config: &ResolvedConfig, guess: &str) -> Result<()> {
    let result = check_guess(&config.target, guess)?;
    print_feedback(result.guess.text(), &result.feedback);
    Ok(())
}

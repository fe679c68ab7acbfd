//! Anniverswordle
//!
//! A six-letter word-guessing game with a terminal UI, a line-mode front end and
//! optional hints.
//!
//! # Quick Start
//!
//! ```rust
//! use anniverswordle::core::{Game, GameStatus, Rules, Word};
//!
//! let mut game = Game::new(Rules::default(), Word::new("gossip").unwrap()).unwrap();
//! game.enter_guess("player").unwrap();
//! let outcome = game.enter_guess("gossip").unwrap();
//!
//! assert_eq!(outcome.status, GameStatus::Won);
//! assert_eq!(game.state().current_row(), 2);
//! ```

// Core domain types and game rules
pub mod core;

// Layered configuration
pub mod config;

// Hint providers and the asynchronous hint channel
pub mod hints;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

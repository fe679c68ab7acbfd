//! Core domain types for the game
//!
//! Pure and deterministic: no I/O, no terminal, no threads.

mod board;
mod feedback;
mod game;
mod keyboard;
mod stats;
mod word;

pub use board::{Board, Tile, TileStatus};
pub use feedback::{Feedback, LetterStatus, evaluate};
pub use game::{
    DEFAULT_WIN_MESSAGE, Game, GameError, GameState, GameStatus, Key, MAX_ROW_LIMIT, MAX_ROWS,
    MAX_WORD_LENGTH, NOT_ENOUGH_LETTERS, Rules, RulesError, SubmitError, SubmitOutcome,
    WORD_LENGTH,
};
pub use keyboard::{KEYBOARD_ROWS, KeyCap, KeyStatuses, keyboard_layout};
pub use stats::Statistics;
pub use word::{Word, WordError};

//! Terminal output formatting
//!
//! Display utilities for the line-mode front end and share text.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_feedback, print_game_over, print_hint, print_keyboard,
    print_message, print_statistics,
};
pub use formatters::{GAME_TITLE, share_text, tile_emoji};

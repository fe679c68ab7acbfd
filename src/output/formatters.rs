//! Formatting utilities for terminal output

use crate::core::{GameState, GameStatus, TileStatus};

/// Title used in share text and headers
pub const GAME_TITLE: &str = "ANNIVERSWORDLE";

/// Emoji for a tile status; empty and pending tiles are black squares
#[must_use]
pub const fn tile_emoji(status: TileStatus) -> char {
    match status {
        TileStatus::Correct => '🟩',
        TileStatus::Present => '🟨',
        TileStatus::Absent => '⬜',
        TileStatus::Empty | TileStatus::Tbd => '⬛',
    }
}

/// Spoiler-free share text for a finished or running game
///
/// ```text
/// ANNIVERSWORDLE 3/6
///
/// 🟨⬜⬜⬜⬜⬜
/// ⬜⬜🟨⬜🟨⬜
/// 🟩🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let max_rows = state.board().row_count();
    let score = match state.status() {
        GameStatus::Won => state.current_row().to_string(),
        GameStatus::Lost | GameStatus::Playing => "X".to_string(),
    };

    let mut text = format!("{GAME_TITLE} {score}/{max_rows}\n");
    for row in state.board().rows().take(state.current_row()) {
        text.push('\n');
        text.extend(row.iter().map(|tile| tile_emoji(tile.status)));
    }
    text
}

/// Guess distribution bar scaled to `width`
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count * width).div_ceil(max).min(width);
    "█".repeat(filled)
}

//! Keyboard layout and key colouring
//!
//! [`KeyStatuses`] is recomputed from the board whenever it is needed; it is a view,
//! not game state.

use super::{GameState, TileStatus};
use rustc_hash::FxHashMap;

/// Default letter rows, top to bottom
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Delete,
}

impl KeyCap {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

/// Build keyboard rows from letter rows
///
/// `ENTER` is placed before and `DEL` after the letters of the last row.
/// Non-letters are dropped and letters are uppercased.
#[must_use]
pub fn keyboard_layout<S: AsRef<str>>(rows: &[S]) -> Vec<Vec<KeyCap>> {
    let last = rows.len().saturating_sub(1);
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let letters = row
                .as_ref()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| KeyCap::Letter(c.to_ascii_uppercase()));
            if i == last {
                std::iter::once(KeyCap::Enter)
                    .chain(letters)
                    .chain(std::iter::once(KeyCap::Delete))
                    .collect()
            } else {
                letters.collect()
            }
        })
        .collect()
}

/// Best status seen per letter across finalized rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStatuses(FxHashMap<char, TileStatus>);

impl KeyStatuses {
    /// Project the finalized rows of a game
    ///
    /// Precedence is `Correct > Present > Absent > Empty`, independent of row order.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let mut statuses = Self::default();
        for (index, row) in state.board().rows().enumerate() {
            if !state.is_finalized(index) {
                continue;
            }
            for tile in row {
                if let Some(letter) = tile.letter {
                    statuses.merge(letter, tile.status);
                }
            }
        }
        statuses
    }

    fn merge(&mut self, letter: char, status: TileStatus) {
        let entry = self.0.entry(letter).or_insert(TileStatus::Empty);
        if status.rank() > entry.rank() {
            *entry = status;
        }
    }

    /// Status of a letter; `Empty` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> TileStatus {
        self.0
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(TileStatus::Empty)
    }

    /// Status of a key; `ENTER` and `DEL` are always `Empty`
    #[must_use]
    pub fn for_key(&self, key: KeyCap) -> TileStatus {
        match key {
            KeyCap::Letter(c) => self.get(c),
            KeyCap::Enter | KeyCap::Delete => TileStatus::Empty,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//! Board and tile types
//!
//! The board is a fixed grid of tiles created empty at game start. Rows are only
//! ever written whole, when a guess is finalized.

use super::{Feedback, LetterStatus, Word};

/// Display status of a tile
///
/// Ordering follows keyboard precedence: `Correct > Present > Absent > Empty`.
/// `Tbd` marks pending, unsubmitted input and never appears in a finalized row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileStatus {
    Correct,
    Present,
    Absent,
    #[default]
    Empty,
    Tbd,
}

impl TileStatus {
    /// Precedence rank used when merging statuses for the keyboard
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty | Self::Tbd => 0,
        }
    }
}

impl From<LetterStatus> for TileStatus {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Correct,
            LetterStatus::Present => Self::Present,
            LetterStatus::Absent => Self::Absent,
        }
    }
}

/// One letter cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub status: TileStatus,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        status: TileStatus::Empty,
    };

    #[must_use]
    pub const fn new(letter: char, status: TileStatus) -> Self {
        Self {
            letter: Some(letter),
            status,
        }
    }
}

/// Grid of `rows` × `columns` tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
    columns: usize,
}

impl Board {
    /// Create a board filled with empty tiles
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![Tile::EMPTY; columns]; rows],
            columns,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// Get a row, or `None` past the last row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Tile]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Write an evaluated guess into a row; out-of-range rows are left alone
    pub(crate) fn write_row(&mut self, index: usize, guess: &Word, feedback: &Feedback) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        for (tile, (letter, status)) in row
            .iter_mut()
            .zip(guess.bytes().iter().zip(feedback.statuses()))
        {
            *tile = Tile::new(char::from(*letter), (*status).into());
        }
    }

    /// True when no tile holds a letter
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows
            .iter()
            .flatten()
            .all(|tile| *tile == Tile::EMPTY)
    }

    /// Letters of a row as a string, skipping empty tiles
    #[must_use]
    pub fn row_text(&self, index: usize) -> String {
        self.row(index)
            .map(|row| row.iter().filter_map(|tile| tile.letter).collect())
            .unwrap_or_default()
    }
}

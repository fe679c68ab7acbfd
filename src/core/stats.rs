//! Session statistics, kept in memory only

use super::{GameState, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `distribution[n]` counts wins in `n + 1` guesses
    pub distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; games still in progress are ignored
    pub fn record(&mut self, state: &GameState) {
        match state.status() {
            GameStatus::Playing => return,
            GameStatus::Won => {
                self.won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                let index = state.current_row().saturating_sub(1);
                if self.distribution.len() <= index {
                    self.distribution.resize(index + 1, 0);
                }
                self.distribution[index] += 1;
            }
            GameStatus::Lost => self.current_streak = 0,
        }
        self.played += 1;
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

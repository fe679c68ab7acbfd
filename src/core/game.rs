//! Game state machine
//!
//! A [`Game`] owns one [`GameState`] plus the pending input for the active row.
//! Every transition is an explicit method call; front ends re-read the state after
//! each call.

use super::{Board, Feedback, KeyStatuses, Tile, TileStatus, Word, WordError};
use log::{debug, info};
use std::fmt;

/// Default number of letters per word
pub const WORD_LENGTH: usize = 6;

/// Default number of guesses per game
pub const MAX_ROWS: usize = 6;

/// Message shown when submitting an incomplete row
pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";

/// Default message shown on a win
pub const DEFAULT_WIN_MESSAGE: &str = "YAYYYY! You got it!";

/// Longest supported word
pub const MAX_WORD_LENGTH: usize = 12;

/// Most guess rows supported
pub const MAX_ROW_LIMIT: usize = 12;

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub word_length: usize,
    pub max_rows: usize,
}

impl Rules {
    #[must_use]
    pub const fn new(word_length: usize, max_rows: usize) -> Self {
        Self {
            word_length,
            max_rows,
        }
    }
}

impl Rules {
    /// Check both dimensions are within `1..=MAX_WORD_LENGTH` / `1..=MAX_ROW_LIMIT`
    ///
    /// # Errors
    /// Returns the first dimension that is out of range.
    pub const fn check(self) -> Result<(), RulesError> {
        if self.word_length == 0 || self.word_length > MAX_WORD_LENGTH {
            return Err(RulesError::WordLength(self.word_length));
        }
        if self.max_rows == 0 || self.max_rows > MAX_ROW_LIMIT {
            return Err(RulesError::Rows(self.max_rows));
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(WORD_LENGTH, MAX_ROWS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Snapshot of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_row: usize,
    target: Word,
    status: GameStatus,
    message: String,
}

impl GameState {
    fn fresh(rules: Rules, target: Word) -> Self {
        Self {
            board: Board::new(rules.max_rows, rules.word_length),
            current_row: 0,
            target,
            status: GameStatus::Playing,
            message: String::new(),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Number of finalized rows
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether row `index` has been submitted and evaluated
    ///
    /// Every row counts as final once the game is over.
    #[must_use]
    pub const fn is_finalized(&self, index: usize) -> bool {
        index < self.current_row || self.status.is_over()
    }
}

/// A keystroke relevant to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Enter,
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// Reasons a submission is rejected; the board is never changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NotEnoughLetters { have: usize, need: usize },
    InvalidWord(WordError),
    GameOver(GameStatus),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters { .. } => write!(f, "{NOT_ENOUGH_LETTERS}"),
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::GameOver(status) => write!(f, "Game is over ({status:?})"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Board dimensions outside the supported range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    WordLength(usize),
    Rows(usize),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordLength(n) => {
                write!(f, "word length must be between 1 and {MAX_WORD_LENGTH}, got {n}")
            }
            Self::Rows(n) => write!(f, "rows must be between 1 and {MAX_ROW_LIMIT}, got {n}"),
        }
    }
}

impl std::error::Error for RulesError {}

/// Reasons a game cannot be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Rules(RulesError),
    Target(WordError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(e) => write!(f, "invalid board: {e}"),
            Self::Target(e) => write!(f, "invalid target: {e}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<RulesError> for GameError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::Target(e)
    }
}

/// One game session: state, pending input and rules
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    state: GameState,
    pending: String,
    win_message: String,
}

impl Game {
    /// Start a game with the given target
    ///
    /// # Errors
    /// Returns `GameError::Rules` if the board dimensions are out of range and
    /// `GameError::Target` if the target does not have `rules.word_length` letters.
    ///
    /// # Examples
    /// ```
    /// use anniverswordle::core::{Game, GameStatus, Rules, Word};
    ///
    /// let mut game = Game::new(Rules::default(), Word::new("gossip").unwrap()).unwrap();
    /// let outcome = game.enter_guess("gossip").unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// assert_eq!(game.state().current_row(), 1);
    /// ```
    pub fn new(rules: Rules, target: Word) -> Result<Self, GameError> {
        rules.check()?;
        check_target(rules, &target)?;
        Ok(Self {
            rules,
            state: GameState::fresh(rules, target),
            pending: String::new(),
            win_message: DEFAULT_WIN_MESSAGE.to_string(),
        })
    }

    /// Replace the message shown on a win
    #[must_use]
    pub fn with_win_message(mut self, message: impl Into<String>) -> Self {
        self.win_message = message.into();
        self
    }

    /// Reset to an empty board with a new target; valid from any state
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` for a target of the wrong length, in
    /// which case the current game is left untouched.
    pub fn new_game(&mut self, target: Word) -> Result<(), WordError> {
        check_target(self.rules, &target)?;
        info!("New game: {} letters, {} rows", target.len(), self.rules.max_rows);
        self.state = GameState::fresh(self.rules, target);
        self.pending.clear();
        Ok(())
    }

    /// Reset to an empty board keeping the current target
    pub fn restart(&mut self) {
        let target = self.state.target.clone();
        self.state = GameState::fresh(self.rules, target);
        self.pending.clear();
        info!("Game restarted");
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Unsubmitted letters for the active row
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    /// Apply a keystroke to the pending input
    ///
    /// Letters are appended uppercase while the row has room, `Delete` drops the
    /// last letter, anything else is ignored. Returns whether the input changed.
    pub fn edit_input(&mut self, key: Key) -> bool {
        if self.state.status.is_over() {
            return false;
        }
        match key {
            Key::Char(c) if c.is_ascii_alphabetic() && self.pending.len() < self.rules.word_length => {
                self.pending.push(c.to_ascii_uppercase());
                true
            }
            Key::Delete => self.pending.pop().is_some(),
            _ => false,
        }
    }

    /// Submit the pending input as a guess
    ///
    /// # Errors
    /// - `SubmitError::GameOver` once the game is won or lost; nothing changes
    /// - `SubmitError::NotEnoughLetters` when the row is incomplete; only the
    ///   message changes
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.state.status.is_over() {
            return Err(SubmitError::GameOver(self.state.status));
        }

        let need = self.rules.word_length;
        if self.pending.len() != need {
            debug!("Rejected submission of {} letters", self.pending.len());
            self.state.message = NOT_ENOUGH_LETTERS.to_string();
            return Err(SubmitError::NotEnoughLetters {
                have: self.pending.len(),
                need,
            });
        }

        let guess =
            Word::new(std::mem::take(&mut self.pending)).map_err(SubmitError::InvalidWord)?;
        let feedback = Feedback::calculate(&guess, &self.state.target);
        let row = self.state.current_row;
        self.state.board.write_row(row, &guess, &feedback);

        let is_win = guess == self.state.target;
        let is_last_row = row + 1 >= self.rules.max_rows;

        self.state.status = if is_win {
            GameStatus::Won
        } else if is_last_row {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        };
        self.state.current_row += 1;

        self.state.message = match self.state.status {
            GameStatus::Won => self.win_message.clone(),
            GameStatus::Lost => format!("The word was {}", self.state.target),
            GameStatus::Playing => String::new(),
        };

        debug!("Row {row}: {guess} -> {feedback}");
        if self.state.status.is_over() {
            info!(
                "Game over: {:?} after {} guesses",
                self.state.status, self.state.current_row
            );
        }

        Ok(SubmitOutcome {
            row,
            guess,
            feedback,
            status: self.state.status,
        })
    }

    /// Replace the pending input with `guess` and submit it
    ///
    /// # Errors
    /// As [`Game::submit_guess`], plus `SubmitError::InvalidWord` for input with
    /// non-letters or too many letters. Pending input is untouched on those errors.
    pub fn enter_guess(&mut self, guess: &str) -> Result<SubmitOutcome, SubmitError> {
        if self.state.status.is_over() {
            return Err(SubmitError::GameOver(self.state.status));
        }

        let letters = guess.trim().to_ascii_uppercase();
        if !letters.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(SubmitError::InvalidWord(WordError::InvalidCharacters));
        }
        if letters.len() > self.rules.word_length {
            return Err(SubmitError::InvalidWord(WordError::InvalidLength {
                expected: self.rules.word_length,
                actual: letters.len(),
            }));
        }

        self.pending = letters;
        self.submit_guess()
    }

    /// Clear a transient message such as "Not enough letters"
    ///
    /// Win and loss messages stay.
    pub fn clear_transient_message(&mut self) {
        if self.state.status == GameStatus::Playing {
            self.state.message.clear();
        }
    }

    /// Tile to display at a position, with pending input overlaid on the active row
    #[must_use]
    pub fn display_tile(&self, row: usize, column: usize) -> Tile {
        if row == self.state.current_row
            && !self.state.status.is_over()
            && let Some(&letter) = self.pending.as_bytes().get(column)
        {
            return Tile::new(char::from(letter), TileStatus::Tbd);
        }

        self.state
            .board
            .row(row)
            .and_then(|tiles| tiles.get(column))
            .copied()
            .unwrap_or(Tile::EMPTY)
    }

    /// Finalized guesses in order
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        (0..self.state.current_row)
            .map(|i| self.state.board.row_text(i))
            .collect()
    }

    /// Keyboard colouring for the finalized rows
    #[must_use]
    pub fn key_statuses(&self) -> KeyStatuses {
        KeyStatuses::from_state(&self.state)
    }
}

fn check_target(rules: Rules, target: &Word) -> Result<(), WordError> {
    if target.len() == rules.word_length {
        Ok(())
    } else {
        Err(WordError::InvalidLength {
            expected: rules.word_length,
            actual: target.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn game(target: &str) -> Game {
        Game::new(Rules::default(), Word::new(target).unwrap()).unwrap()
    }

    fn type_word(game: &mut Game, word: &str) {
        for c in word.chars() {
            game.edit_input(Key::Char(c));
        }
    }

    #[test]
    fn new_game_is_blank() {
        let g = game("gossip");
        assert!(g.state().board().is_blank());
        assert_eq!(g.state().current_row(), 0);
        assert_eq!(g.status(), GameStatus::Playing);
        assert_eq!(g.state().message(), "");
        assert_eq!(g.pending_input(), "");
    }

    #[test]
    fn target_length_must_match_rules() {
        let err = Game::new(Rules::default(), Word::new("crane").unwrap()).unwrap_err();
        assert_eq!(
            err,
            GameError::Target(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
        assert!(Game::new(Rules::new(5, 6), Word::new("crane").unwrap()).is_ok());
    }

    #[test]
    fn board_dimensions_must_be_in_range() {
        let gossip = Word::new("gossip").unwrap();
        assert_eq!(
            Game::new(Rules::new(6, 0), gossip.clone()).unwrap_err(),
            GameError::Rules(RulesError::Rows(0))
        );
        assert_eq!(
            Game::new(Rules::new(6, MAX_ROW_LIMIT + 1), gossip.clone()).unwrap_err(),
            GameError::Rules(RulesError::Rows(MAX_ROW_LIMIT + 1))
        );
        assert_eq!(
            Game::new(Rules::new(0, 6), gossip.clone()).unwrap_err(),
            GameError::Rules(RulesError::WordLength(0))
        );
        let long = Word::new("A".repeat(MAX_WORD_LENGTH + 1)).unwrap();
        assert_eq!(
            Game::new(Rules::new(MAX_WORD_LENGTH + 1, 6), long).unwrap_err(),
            GameError::Rules(RulesError::WordLength(MAX_WORD_LENGTH + 1))
        );
        assert!(Game::new(Rules::new(6, 1), gossip).is_ok());
    }

    #[test]
    fn repeated_letters_at_max_length() {
        let target = Word::new("A".repeat(MAX_WORD_LENGTH)).unwrap();
        let mut g = Game::new(Rules::new(MAX_WORD_LENGTH, MAX_ROW_LIMIT), target).unwrap();
        let outcome = g.enter_guess(&"a".repeat(MAX_WORD_LENGTH)).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert_eq!(outcome.feedback.count_correct(), MAX_WORD_LENGTH);
    }

    #[test]
    fn edit_input_appends_uppercase_and_caps_length() {
        let mut g = game("gossip");
        type_word(&mut g, "players");
        assert_eq!(g.pending_input(), "PLAYER");
        assert!(!g.edit_input(Key::Char('x')));
    }

    #[test]
    fn edit_input_ignores_non_letters() {
        let mut g = game("gossip");
        assert!(!g.edit_input(Key::Char('1')));
        assert!(!g.edit_input(Key::Char(' ')));
        assert!(!g.edit_input(Key::Enter));
        assert_eq!(g.pending_input(), "");
    }

    #[test]
    fn edit_input_delete() {
        let mut g = game("gossip");
        assert!(!g.edit_input(Key::Delete));
        type_word(&mut g, "ab");
        assert!(g.edit_input(Key::Delete));
        assert_eq!(g.pending_input(), "A");
        assert!(g.state().board().is_blank());
    }

    #[test]
    fn short_submit_does_not_advance() {
        let mut g = game("gossip");
        type_word(&mut g, "goss");
        let err = g.submit_guess().unwrap_err();

        assert_eq!(err, SubmitError::NotEnoughLetters { have: 4, need: 6 });
        assert_eq!(g.state().current_row(), 0);
        assert_eq!(g.status(), GameStatus::Playing);
        assert_eq!(g.state().message(), NOT_ENOUGH_LETTERS);
        assert_eq!(g.pending_input(), "GOSS");
        assert!(g.state().board().is_blank());

        g.clear_transient_message();
        assert_eq!(g.state().message(), "");
    }

    #[test]
    fn submit_writes_row_and_advances() {
        let mut g = game("gossip");
        type_word(&mut g, "player");
        let outcome = g.submit_guess().unwrap();

        assert_eq!(outcome.row, 0);
        assert_eq!(outcome.status, GameStatus::Playing);
        assert_eq!(outcome.feedback.statuses()[0], LetterStatus::Present);
        assert_eq!(g.state().current_row(), 1);
        assert_eq!(g.pending_input(), "");
        assert_eq!(g.state().board().row_text(0), "PLAYER");
        assert_eq!(g.guesses(), vec!["PLAYER".to_string()]);
    }

    #[test]
    fn win_on_any_row_advances_by_one() {
        for misses in 0..MAX_ROWS {
            let mut g = game("gossip");
            for _ in 0..misses {
                g.enter_guess("player").unwrap();
            }
            let outcome = g.enter_guess("gossip").unwrap();
            assert_eq!(outcome.status, GameStatus::Won);
            assert_eq!(g.state().current_row(), misses + 1);
            assert_eq!(g.state().message(), DEFAULT_WIN_MESSAGE);
        }
    }

    #[test]
    fn miss_on_last_row_loses() {
        let mut g = game("gossip");
        for _ in 0..MAX_ROWS - 1 {
            assert_eq!(g.enter_guess("bridge").unwrap().status, GameStatus::Playing);
        }
        let outcome = g.enter_guess("bridge").unwrap();
        assert_eq!(outcome.status, GameStatus::Lost);
        assert_eq!(g.state().current_row(), MAX_ROWS);
        assert_eq!(g.state().message(), "The word was GOSSIP");
    }

    #[test]
    fn terminal_state_is_frozen() {
        let mut g = game("gossip");
        g.enter_guess("gossip").unwrap();
        let before = g.state().clone();

        assert!(!g.edit_input(Key::Char('a')));
        assert!(!g.edit_input(Key::Delete));
        assert_eq!(
            g.submit_guess().unwrap_err(),
            SubmitError::GameOver(GameStatus::Won)
        );
        assert_eq!(
            g.enter_guess("player").unwrap_err(),
            SubmitError::GameOver(GameStatus::Won)
        );
        g.clear_transient_message();

        assert_eq!(g.state(), &before);
        assert_eq!(g.pending_input(), "");
    }

    #[test]
    fn new_game_resets_from_terminal_state() {
        let mut g = game("gossip");
        for _ in 0..MAX_ROWS {
            g.enter_guess("bridge").unwrap();
        }
        assert_eq!(g.status(), GameStatus::Lost);

        g.new_game(Word::new("bridge").unwrap()).unwrap();
        assert!(g.state().board().is_blank());
        assert_eq!(g.state().current_row(), 0);
        assert_eq!(g.status(), GameStatus::Playing);
        assert_eq!(g.state().message(), "");
        assert_eq!(g.state().target().text(), "BRIDGE");
    }

    #[test]
    fn new_game_rejects_wrong_length_and_keeps_state() {
        let mut g = game("gossip");
        g.enter_guess("player").unwrap();
        assert!(g.new_game(Word::new("crane").unwrap()).is_err());
        assert_eq!(g.state().current_row(), 1);
    }

    #[test]
    fn restart_keeps_target_and_clears_pending() {
        let mut g = game("gossip");
        g.enter_guess("player").unwrap();
        type_word(&mut g, "go");
        g.restart();
        assert_eq!(g.state().current_row(), 0);
        assert_eq!(g.pending_input(), "");
        assert_eq!(g.state().target().text(), "GOSSIP");
    }

    #[test]
    fn enter_guess_validation() {
        let mut g = game("gossip");
        assert!(matches!(
            g.enter_guess("go55ip"),
            Err(SubmitError::InvalidWord(WordError::InvalidCharacters))
        ));
        assert!(matches!(
            g.enter_guess("gossiping"),
            Err(SubmitError::InvalidWord(WordError::InvalidLength { .. }))
        ));
        assert_eq!(
            g.enter_guess("go"),
            Err(SubmitError::NotEnoughLetters { have: 2, need: 6 })
        );
        assert_eq!(g.state().current_row(), 0);
    }

    #[test]
    fn display_tile_overlays_pending_input() {
        let mut g = game("gossip");
        g.enter_guess("player").unwrap();
        type_word(&mut g, "br");

        assert_eq!(g.display_tile(0, 0), Tile::new('P', TileStatus::Present));
        assert_eq!(g.display_tile(1, 0), Tile::new('B', TileStatus::Tbd));
        assert_eq!(g.display_tile(1, 1), Tile::new('R', TileStatus::Tbd));
        assert_eq!(g.display_tile(1, 2), Tile::EMPTY);
        assert_eq!(g.display_tile(2, 0), Tile::EMPTY);
        assert_eq!(g.display_tile(99, 99), Tile::EMPTY);
    }

    #[test]
    fn custom_rules_and_win_message() {
        let mut g = Game::new(Rules::new(3, 2), Word::new("cat").unwrap())
            .unwrap()
            .with_win_message("nice");
        g.enter_guess("dog").unwrap();
        assert_eq!(g.enter_guess("cat").unwrap().status, GameStatus::Won);
        assert_eq!(g.state().message(), "nice");
        assert_eq!(g.state().current_row(), 2);
    }
}

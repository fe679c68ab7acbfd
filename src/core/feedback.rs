//! Guess feedback calculation and representation
//!
//! Feedback is one [`LetterStatus`] per position:
//! - Absent (letter not in word, or all its occurrences already used)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::{Word, WordError};
use std::fmt;

/// Evaluation of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, one status per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

impl Feedback {
    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: Mark present-but-wrong-position from the remaining pool,
    ///    left to right
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use anniverswordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("bridge").unwrap();
    /// let answer = Word::new("gossip").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// // B R I(present) D G(present) E
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟨⬜🟨⬜");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must be the same length");

        let mut result = vec![LetterStatus::Absent; guess.len()];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (g, a)) in guess.bytes().iter().zip(answer.bytes()).enumerate() {
            if g == a {
                result[i] = LetterStatus::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but letter still available
        for (i, letter) in guess.bytes().iter().enumerate() {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Statuses in position order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of present-but-misplaced letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            let ch = match status {
                LetterStatus::Correct => 'G',
                LetterStatus::Present => 'Y',
                LetterStatus::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Evaluate a guess against a target, checking both words first
///
/// # Errors
/// Returns `WordError` if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use anniverswordle::core::evaluate;
///
/// let feedback = evaluate("gossip", "GOSSIP").unwrap();
/// assert!(feedback.is_perfect());
///
/// assert!(evaluate("gossip", "crane").is_err());
/// ```
pub fn evaluate(target: &str, guess: &str) -> Result<Feedback, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    if target.len() != guess.len() {
        return Err(WordError::LengthMismatch {
            target: target.len(),
            guess: guess.len(),
        });
    }
    Ok(Feedback::calculate(&guess, &target))
}

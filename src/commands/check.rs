//! One-shot guess check
//!
//! Evaluates a single guess against the configured target.

use crate::core::{Feedback, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if the guess is not a word of the target's length.
pub fn check_guess(target: &Word, guess: &str) -> Result<CheckResult, WordError> {
    let guess = Word::with_length(guess, target.len())?;
    let feedback = Feedback::calculate(&guess, target);
    Ok(CheckResult { guess, feedback })
}

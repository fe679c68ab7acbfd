//! Word representation
//!
//! A Word stores an uppercase ASCII word of any positive length. Board and target
//! lengths are checked against [`Rules`](super::Rules) by the caller.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase ASCII word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    LengthMismatch { target: usize, guess: usize },
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::LengthMismatch { target, guess } => {
                write!(f, "Guess has {guess} letters but the target has {target}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive and stored uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use anniverswordle::core::Word;
    ///
    /// let word = Word::new("gossip").unwrap();
    /// assert_eq!(word.text(), "GOSSIP");
    ///
    /// assert!(Word::new("go55ip").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_ascii_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a new Word and require an exact length
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the length differs, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters; never true for a constructed `Word`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_case() {
        let word = Word::new("gOsSiP").unwrap();
        assert_eq!(word.text(), "GOSSIP");
        assert_eq!(word.bytes(), b"GOSSIP");
        assert_eq!(word.len(), 6);
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  bridge\n").unwrap().text(), "BRIDGE");
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("go55ip"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gos sip"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("gössip"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("player", 6).is_ok());
        assert_eq!(
            Word::with_length("crane", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("gossip").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'G'), Some(&1));
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn word_char_counts_long_runs() {
        let word = Word::new("A".repeat(300)).unwrap();
        assert_eq!(word.char_counts().get(&b'A'), Some(&300));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "bridge".parse().unwrap();
        assert_eq!(format!("{word}"), "BRIDGE");
        assert_eq!(word, Word::new("BRIDGE").unwrap());
    }
}

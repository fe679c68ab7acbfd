//! Hint providers
//!
//! Providers may fail; callers go through [`hint_or_fallback`] and
//! [`word_info_or_fallback`] so a failure never reaches the player.

use crate::core::Word;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hint shown when the provider cannot produce one
pub const DEFAULT_FALLBACK_HINT: &str = "Think of something common in social interactions.";

/// Errors a provider may report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// Hints are switched off
    Disabled,
    /// The provider has nothing for this word
    Unavailable(String),
    /// The provider answered with unusable data
    Malformed(String),
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "hints are disabled"),
            Self::Unavailable(word) => write!(f, "no hint available for {word}"),
            Self::Malformed(msg) => write!(f, "malformed hint data: {msg}"),
        }
    }
}

impl std::error::Error for HintError {}

/// Dictionary-style details about a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub word: String,
    pub definition: String,
    pub example: String,
    pub etymology: Option<String>,
}

impl WordInfo {
    /// Generic details used when a provider fails
    #[must_use]
    pub fn fallback(word: &Word) -> Self {
        Self {
            word: word.text().to_string(),
            definition: format!("A {}-letter word often used in puzzles.", word.len()),
            example: "No example available.".to_string(),
            etymology: None,
        }
    }
}

/// One `[[words]]` entry in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: Option<String>,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub etymology: Option<String>,
}

impl WordEntry {
    /// Built-in entries used when the config lists none
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self {
            word: "GOSSIP".to_string(),
            hint: Some("Something we do; something we watch".to_string()),
            definition: Some(
                "Casual or unconstrained conversation or reports about other people."
                    .to_string(),
            ),
            example: Some("They shared some juicy gossip.".to_string()),
            etymology: Some(
                "Old English godsibb, a godparent; later a close friend one chats with."
                    .to_string(),
            ),
        }]
    }
}

/// Source of hints and word details
pub trait HintProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// A short hint for `target`, given the guesses made so far
    ///
    /// # Errors
    /// Returns `HintError` when no usable hint can be produced.
    fn hint(&self, target: &Word, guesses: &[String]) -> Result<String, HintError>;

    /// Details about `word`
    ///
    /// # Errors
    /// Returns `HintError` when no usable details can be produced.
    fn word_info(&self, word: &Word) -> Result<WordInfo, HintError>;
}

/// Provider backed by a fixed table, usually from the config file
#[derive(Debug, Default, Clone)]
pub struct StaticHints {
    entries: FxHashMap<String, WordEntry>,
}

impl StaticHints {
    /// Build from config entries; entries with invalid words are skipped
    #[must_use]
    pub fn from_entries(entries: &[WordEntry]) -> Self {
        let entries = entries
            .iter()
            .filter_map(|entry| {
                Word::new(&entry.word)
                    .ok()
                    .map(|w| (w.text().to_string(), entry.clone()))
            })
            .collect();
        Self { entries }
    }

    fn entry(&self, word: &Word) -> Result<&WordEntry, HintError> {
        self.entries
            .get(word.text())
            .ok_or_else(|| HintError::Unavailable(word.text().to_string()))
    }
}

impl HintProvider for StaticHints {
    fn name(&self) -> &str {
        "static"
    }

    fn hint(&self, target: &Word, _guesses: &[String]) -> Result<String, HintError> {
        self.entry(target)?
            .hint
            .clone()
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| HintError::Unavailable(target.text().to_string()))
    }

    fn word_info(&self, word: &Word) -> Result<WordInfo, HintError> {
        let entry = self.entry(word)?;
        match (&entry.definition, &entry.example) {
            (Some(definition), Some(example)) => Ok(WordInfo {
                word: word.text().to_string(),
                definition: definition.clone(),
                example: example.clone(),
                etymology: entry.etymology.clone(),
            }),
            _ => Err(HintError::Malformed(format!(
                "{word} needs both a definition and an example"
            ))),
        }
    }
}

/// Provider used when hints are switched off
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledHints;

impl HintProvider for DisabledHints {
    fn name(&self) -> &str {
        "disabled"
    }

    fn hint(&self, _target: &Word, _guesses: &[String]) -> Result<String, HintError> {
        Err(HintError::Disabled)
    }

    fn word_info(&self, _word: &Word) -> Result<WordInfo, HintError> {
        Err(HintError::Disabled)
    }
}

/// Ask for a hint, substituting `fallback` on any error
pub fn hint_or_fallback(
    provider: &dyn HintProvider,
    target: &Word,
    guesses: &[String],
    fallback: &str,
) -> String {
    match provider.hint(target, guesses) {
        Ok(hint) => {
            debug!("Hint from {} provider", provider.name());
            hint
        }
        Err(e) => {
            warn!("Hint from {} provider failed: {e}", provider.name());
            fallback.to_string()
        }
    }
}

/// Ask for word details, substituting [`WordInfo::fallback`] on any error
pub fn word_info_or_fallback(provider: &dyn HintProvider, word: &Word) -> WordInfo {
    provider.word_info(word).unwrap_or_else(|e| {
        warn!("Word info from {} provider failed: {e}", provider.name());
        WordInfo::fallback(word)
    })
}

//! # Configuration
//!
//! Settings resolve in this order: defaults → config file → env vars → CLI flags.
//!
//! The config file lives at `<config dir>/anniverswordle/config.toml`. If it is
//! missing, a commented-out default is generated so all options are discoverable.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{
    DEFAULT_WIN_MESSAGE, KEYBOARD_ROWS, MAX_ROWS, Rules, RulesError, WORD_LENGTH, Word, WordError,
};
use crate::hints::{DEFAULT_FALLBACK_HINT, WordEntry};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub hints: HintConfig,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    pub target_word: Option<String>,
    pub word_length: Option<usize>,
    pub max_rows: Option<usize>,
    pub win_message: Option<String>,
    pub message_duration_ms: Option<u64>,
    pub keyboard: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HintConfig {
    pub enabled: Option<bool>,
    pub initial: Option<String>,
    pub fallback: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TARGET_WORD: &str = "GOSSIP";
pub const DEFAULT_MESSAGE_DURATION_MS: u64 = 1000;
pub const TARGET_ENV_VAR: &str = "ANNIVERSWORDLE_TARGET";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub rules: Rules,
    pub target: Word,
    pub win_message: String,
    pub message_duration: Duration,
    pub keyboard: Vec<String>,
    pub hints_enabled: bool,
    pub initial_hint: Option<String>,
    pub fallback_hint: String,
    pub words: Vec<WordEntry>,
}

/// Values that win over the config file, typically from env vars and CLI flags
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub target_word: Option<String>,
    pub max_rows: Option<usize>,
}

impl Overrides {
    /// CLI values, falling back to environment variables
    #[must_use]
    pub fn from_cli_and_env(cli_target: Option<String>, cli_rows: Option<usize>) -> Self {
        Self {
            target_word: cli_target.or_else(|| std::env::var(TARGET_ENV_VAR).ok()),
            max_rows: cli_rows,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<RulesError> for ConfigError {
    fn from(e: RulesError) -> Self {
        Self::Invalid(e.to_string())
    }
}

impl From<WordError> for ConfigError {
    fn from(e: WordError) -> Self {
        Self::Invalid(format!("target word: {e}"))
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `<config dir>/anniverswordle/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("anniverswordle").join("config.toml"))
}

/// Load config from `path`, or from [`config_path`] when `None`.
///
/// A missing default file is generated and defaults are returned. An explicit
/// path that does not exist is an I/O error.
///
/// # Errors
/// Returns `ConfigError::Io` if the file cannot be read and `ConfigError::Parse`
/// if it is not valid TOML for [`FileConfig`].
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = if let Some(p) = path {
        p.to_path_buf()
    } else {
        let Some(p) = config_path() else {
            warn!("Could not determine config directory, using default config");
            return Ok(FileConfig::default());
        };
        if !p.exists() {
            info!("No config file found, generating default at {}", p.display());
            generate_default_config(&p);
            return Ok(FileConfig::default());
        }
        p
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {config:?}");
    Ok(config)
}

/// Parse a TOML config document
///
/// # Errors
/// Returns `ConfigError::Parse` on malformed TOML or unexpected value types.
pub fn parse_config(contents: &str) -> Result<FileConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Anniverswordle Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# target_word = "GOSSIP"             # Or set ANNIVERSWORDLE_TARGET, or pass --target
# word_length = 6                    # 1 to 12
# max_rows = 6                       # 1 to 12, or pass --rows
# win_message = "YAYYYY! You got it!"
# message_duration_ms = 1000
# keyboard = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"]

# [hints]
# enabled = true
# initial = "Something we do; something we watch"
# fallback = "Think of something common in social interactions."

# [[words]]
# word = "GOSSIP"
# hint = "Something we do; something we watch"
# definition = "Casual conversation about other people."
# example = "They shared some juicy gossip."
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {e}");
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {e}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing defaults → file → overrides.
///
/// # Errors
/// Returns `ConfigError::Invalid` for out-of-range board sizes, a target that is not
/// all letters, or a target whose length differs from the word length.
pub fn resolve(config: &FileConfig, overrides: &Overrides) -> Result<ResolvedConfig, ConfigError> {
    let word_length = config.game.word_length.unwrap_or(WORD_LENGTH);
    let max_rows = overrides
        .max_rows
        .or(config.game.max_rows)
        .unwrap_or(MAX_ROWS);

    let rules = Rules::new(word_length, max_rows);
    rules.check()?;

    let target_text = overrides
        .target_word
        .clone()
        .or_else(|| config.game.target_word.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_WORD.to_string());
    let target = Word::with_length(target_text, word_length)?;

    let keyboard = config
        .game
        .keyboard
        .clone()
        .filter(|rows| !rows.is_empty())
        .unwrap_or_else(|| KEYBOARD_ROWS.iter().map(ToString::to_string).collect());

    let words = if config.words.is_empty() {
        WordEntry::defaults()
    } else {
        config.words.clone()
    };

    Ok(ResolvedConfig {
        rules,
        target,
        win_message: config
            .game
            .win_message
            .clone()
            .unwrap_or_else(|| DEFAULT_WIN_MESSAGE.to_string()),
        message_duration: Duration::from_millis(
            config
                .game
                .message_duration_ms
                .unwrap_or(DEFAULT_MESSAGE_DURATION_MS),
        ),
        keyboard,
        hints_enabled: config.hints.enabled.unwrap_or(true),
        initial_hint: config.hints.initial.clone(),
        fallback_hint: config
            .hints
            .fallback
            .clone()
            .unwrap_or_else(|| DEFAULT_FALLBACK_HINT.to_string()),
        words,
    })
}

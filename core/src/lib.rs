//! typeahead-core
//!
//! Character n-gram word completion and the key-driven input session built
//! on top of it. This crate does no terminal or file I/O apart from reading
//! and writing its own TOML configuration; renderers feed it `KeyEvent`s and
//! draw the `ContentModel` it publishes.
//!
//! Public API:
//! - `NGramModel` - Trained character n-gram model with top-k prefix completion
//! - `InputSession` - Buffer, cursor, suggestion and statistics state machine
//! - `KeyEvent` / `KeyResult` - Input events and their outcome
//! - `ContentModel` - Read-only snapshot for renderers
//! - `Config` - Model order and suggestion settings
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod ngram;
pub use ngram::{NGramModel, END, PAD, SMOOTHING_FLOOR};

pub mod trie;
pub use trie::TrieNode;

pub mod candidate;
pub use candidate::{Candidate, CandidateList};

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod stats;
pub use stats::{StatsSnapshot, TypingStats};

pub mod context;
pub use context::ContentModel;

pub mod key_event;
pub use key_event::{KeyEvent, KeyResult};

pub mod session;
pub use session::InputSession;

/// Generic configuration for model training and suggestion display.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// N-gram order used when training (context length is `order - 1`)
    pub order: usize,

    /// Number of suggestions requested for the current word
    pub suggestion_limit: usize,

    /// Lowercase the current word before prediction.
    /// Known words are always lowercase, so this makes completion
    /// case-insensitive; off by default (prefix is used as typed).
    pub lowercase_prefix: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: 10,
            suggestion_limit: 10,
            lowercase_prefix: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from TOML string. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the values a model or session cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.order < 2 {
            return Err(Error::InvalidOrder { order: self.order });
        }
        if self.suggestion_limit == 0 {
            return Err(Error::InvalidSuggestionLimit);
        }
        Ok(())
    }
}

/// Utility helpers.
pub mod utils {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

    /// Split text into lowercase word tokens.
    ///
    /// A token is a maximal run of word characters (letters, digits,
    /// underscore). Duplicates are kept, in corpus order.
    pub fn tokenize_words(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        WORD_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

//! Error types for the core crate.
//!
//! Almost nothing in the core can fail: prediction, scoring and key handling
//! degrade to empty results instead of erroring. The variants below cover
//! model construction and configuration I/O only.

use thiserror::Error;

/// Errors raised by model construction and configuration handling.
#[derive(Debug, Error)]
pub enum Error {
    #[error("n-gram order must be >= 2 (got {order})")]
    InvalidOrder { order: usize },

    #[error("suggestion limit must be >= 1")]
    InvalidSuggestionLimit,

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

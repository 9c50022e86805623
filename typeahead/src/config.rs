//! Application configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `typeahead_core::Config` (flattened via serde)
//! - The reference text the typing statistics are measured against, given
//!   inline or as a file path
//!
//! # Example
//!
//! ```rust
//! use typeahead::AppConfig;
//!
//! let config = AppConfig::from_toml_str("order = 4\nreference_text = \"sleep well\"").unwrap();
//! assert_eq!(config.base().order, 4);
//! assert_eq!(config.resolve_reference().unwrap(), "sleep well");
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::DEFAULT_REFERENCE_TEXT;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base configuration fields (order, suggestion limit, prefix case)
    #[serde(flatten)]
    pub base: typeahead_core::Config,

    /// Inline reference text
    pub reference_text: Option<String>,

    /// Reference text file; takes precedence over `reference_text`
    pub reference_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from a TOML file. A missing or malformed file is an error.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_toml(p),
            None => Ok(Self::default()),
        }
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &typeahead_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut typeahead_core::Config {
        &mut self.base
    }

    /// The reference text to measure typing against: the file if one is
    /// configured, then the inline text, then the built-in paragraph.
    pub fn resolve_reference(&self) -> Result<String> {
        if let Some(path) = &self.reference_file {
            return crate::corpus::load_reference(path);
        }
        Ok(self
            .reference_text
            .clone()
            .unwrap_or_else(|| DEFAULT_REFERENCE_TEXT.to_string()))
    }
}

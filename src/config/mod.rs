//! Resolver configuration (lexacon.toml)
//!
//! Names the dictionaries to load, in precedence order, and the locale a
//! resolver starts out preferring:
//!
//! ```toml
//! preferred_locale = "es"
//!
//! [[dictionaries]]
//! default_locale = "en"
//! sources = ["common.toml", "app.json"]
//! ```
//!
//! Source paths are resolved relative to the config file's directory.

mod load;

pub use load::load_source;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dictionary::Dictionary;
use crate::error::LexError;
use crate::lex::Lex;
use crate::locale::{PreferredLocale, DEFAULT_PREFERRED_LOCALE};

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported dictionary source format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// One dictionary: a default locale plus the files merged into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Locale used when a locale map lacks the preferred locale
    pub default_locale: String,

    /// Source documents, merged in order (later files win)
    #[serde(default)]
    pub sources: Vec<PathBuf>,
}

/// Resolver configuration from lexacon.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexConfig {
    /// Initial preferred locale of the resolver's own locale context
    #[serde(default = "default_preferred_locale")]
    pub preferred_locale: String,

    /// Dictionaries in precedence order (first match wins)
    #[serde(default)]
    pub dictionaries: Vec<DictionaryConfig>,
}

fn default_preferred_locale() -> String {
    DEFAULT_PREFERRED_LOCALE.to_string()
}

impl LexConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse config from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: LexConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.preferred_locale.is_empty() {
            return Err(ConfigError::ValidationError(
                "'preferred_locale' must not be empty".to_string(),
            ));
        }

        if self.dictionaries.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one dictionary must be defined in 'dictionaries'".to_string(),
            ));
        }

        for (index, dictionary) in self.dictionaries.iter().enumerate() {
            if dictionary.default_locale.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Dictionary {} has an empty 'default_locale'",
                    index
                )));
            }
            if dictionary.sources.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "Dictionary {} must list at least one source",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Load every dictionary and build a resolver.
    ///
    /// Relative source paths are joined onto `base_dir`. The resolver gets
    /// its own [`PreferredLocale`] initialized from `preferred_locale`, so
    /// it does not observe the process-wide context.
    pub fn build(&self, base_dir: &Path) -> Result<Lex, ConfigError> {
        self.validate()?;

        let mut dictionaries = Vec::with_capacity(self.dictionaries.len());
        for dictionary in &self.dictionaries {
            let mut sources = Vec::with_capacity(dictionary.sources.len());
            for source in &dictionary.sources {
                sources.push(load_source(&base_dir.join(source))?);
            }
            dictionaries.push(Dictionary::new(dictionary.default_locale.clone(), sources)?);
        }

        let locale = PreferredLocale::new(self.preferred_locale.clone())?;
        tracing::debug!(
            dictionaries = dictionaries.len(),
            preferred_locale = %self.preferred_locale,
            "built resolver from config"
        );
        Ok(Lex::new(dictionaries)?.with_locale(locale))
    }
}

/// Read a config file and build its resolver, resolving sources relative to
/// the file's directory.
pub fn load_lex(path: &Path) -> Result<Lex, ConfigError> {
    let config = LexConfig::from_file(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    config.build(base_dir)
}

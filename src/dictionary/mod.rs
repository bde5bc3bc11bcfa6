//! Dictionaries: merged entry trees bound to a default locale.

mod source;

pub use source::{flatten_sources, Source};

use lexacon_tree::{get_deep, merge_all, Entry, EntryMap, DEFAULT_SEPARATOR};
use std::sync::Arc;

use crate::error::{validate_locale, LexError};

/// An immutable bundle of merged entries plus the locale used when a locale
/// map has no value for the preferred locale.
///
/// Dictionaries are cheap to clone and can be shared by any number of
/// resolvers. The only way to obtain one is [`Dictionary::new`] (or the
/// parse helpers built on it), so a plain map can never pass for one.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    inner: Arc<DictionaryInner>,
}

#[derive(Debug, PartialEq)]
struct DictionaryInner {
    entries: Entry,
    default_locale: String,
}

impl Dictionary {
    /// Build a dictionary by deep-merging `sources` in order.
    ///
    /// Nested source lists are flattened first and existing dictionaries
    /// contribute their entries. Later sources win on conflicting leaf
    /// paths.
    ///
    /// # Errors
    ///
    /// - [`LexError::InvalidLocale`] if `default_locale` is empty
    /// - [`LexError::NoSources`] if `sources` is empty
    /// - [`LexError::InvalidSource`] if a flattened source is neither a map
    ///   nor a dictionary
    pub fn new<L, I, S>(default_locale: L, sources: I) -> Result<Self, LexError>
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        let default_locale = default_locale.into();
        validate_locale(&default_locale)?;

        let sources: Vec<Source> = sources.into_iter().map(Into::into).collect();
        if sources.is_empty() {
            return Err(LexError::NoSources);
        }

        let entries = merge_sources(sources)?;
        tracing::debug!(
            default_locale = %default_locale,
            keys = entries.len(),
            "built dictionary"
        );

        Ok(Self {
            inner: Arc::new(DictionaryInner {
                entries: Entry::Map(entries),
                default_locale,
            }),
        })
    }

    /// Parse a JSON document into a single-source dictionary.
    pub fn from_json_str(default_locale: impl Into<String>, s: &str) -> Result<Self, LexError> {
        let value: serde_json::Value =
            serde_json::from_str(s).map_err(|e| LexError::Parse(e.to_string()))?;
        Self::new(default_locale, [value])
    }

    /// Parse a TOML document into a single-source dictionary.
    pub fn from_toml_str(default_locale: impl Into<String>, s: &str) -> Result<Self, LexError> {
        let value: serde_json::Value =
            toml::from_str(s).map_err(|e| LexError::Parse(e.to_string()))?;
        Self::new(default_locale, [value])
    }

    /// The merged entry tree. Always a map.
    pub fn entries(&self) -> &Entry {
        &self.inner.entries
    }

    pub fn default_locale(&self) -> &str {
        &self.inner.default_locale
    }

    /// Deep lookup with the default `.` separator, without locale handling.
    pub fn get(&self, path: &str) -> Result<Option<&Entry>, LexError> {
        Ok(get_deep(self.entries(), path, DEFAULT_SEPARATOR)?)
    }

    /// Whether both handles share the same underlying dictionary.
    pub fn ptr_eq(&self, other: &Dictionary) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Flatten, validate and merge sources into one entry map.
pub(crate) fn merge_sources(sources: Vec<Source>) -> Result<EntryMap, LexError> {
    let mut fragments = Vec::new();
    for (index, source) in flatten_sources(sources).into_iter().enumerate() {
        match source {
            Source::Entries(entry @ Entry::Map(_)) => fragments.push(entry),
            Source::Dictionary(dictionary) => fragments.push(dictionary.entries().clone()),
            other => {
                return Err(LexError::InvalidSource {
                    index,
                    kind: other.kind(),
                })
            }
        }
    }
    Ok(merge_all(fragments))
}

//! Error types for dictionary construction and lookup.
//!
//! Every error is an invalid argument raised eagerly by the call that
//! received it. Lookup misses are not errors; see [`crate::Lookup`].

use lexacon_tree::TreeError;

/// Invalid-argument failures from the lexacon API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("locale must be a non-empty string, got {0:?}")]
    InvalidLocale(String),

    #[error("no dictionary sources given")]
    NoSources,

    #[error("source {index} is a {kind}, expected a map or a dictionary")]
    InvalidSource { index: usize, kind: &'static str },

    #[error("no dictionaries provided")]
    NoDictionaries,

    #[error("argument {index} is a {kind}, not a dictionary (use Dictionary::new)")]
    NotADictionary { index: usize, kind: &'static str },

    #[error("lookup key must be a non-empty string")]
    InvalidKey,

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("failed to parse dictionary source: {0}")]
    Parse(String),
}

pub(crate) fn validate_locale(value: &str) -> Result<(), LexError> {
    if lexacon_tree::is_non_empty_string(value) {
        Ok(())
    } else {
        Err(LexError::InvalidLocale(value.to_string()))
    }
}

//! The entry tree value type.

use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::Callable;

/// Keyed children of a map entry.
pub type EntryMap = BTreeMap<String, Entry>;

/// A node in a dictionary entry tree.
///
/// Leaves are text, callables or other scalars. A `Map` is either an interior
/// node or, when it is where a lookup path ends, a locale map keyed by locale
/// identifier. Both share one variant so that merging two fragments that
/// translate the same key into different locales combines them.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Locale-independent text.
    Text(String),
    /// Function producing text.
    Func(Callable),
    /// Number carried over from a JSON/TOML document.
    Number(Number),
    /// Boolean carried over from a JSON/TOML document.
    Bool(bool),
    /// Explicit null.
    Null,
    /// Ordered sequence, addressable by decimal index.
    List(Vec<Entry>),
    /// Mapping of key segments (or locale identifiers) to entries.
    Map(EntryMap),
}

impl Entry {
    /// Build a map entry from key/value pairs.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Entry>,
    {
        Entry::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a callable leaf.
    pub fn func<F>(func: F) -> Self
    where
        F: Fn(&[&dyn Display]) -> String + Send + Sync + 'static,
    {
        Entry::Func(Callable::new(func))
    }

    /// An empty map.
    pub fn empty() -> Self {
        Entry::Map(EntryMap::new())
    }

    /// True for key/value mappings; lists and null are not maps.
    pub fn is_map(&self) -> bool {
        matches!(self, Entry::Map(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Entry::Text(_))
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Entry::Func(_))
    }

    pub fn as_map(&self) -> Option<&EntryMap> {
        match self {
            Entry::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Text(_) => "text",
            Entry::Func(_) => "callable",
            Entry::Number(_) => "number",
            Entry::Bool(_) => "bool",
            Entry::Null => "null",
            Entry::List(_) => "list",
            Entry::Map(_) => "map",
        }
    }
}

/// True iff `value` has at least one character.
pub fn is_non_empty_string(value: &str) -> bool {
    !value.is_empty()
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Entry::Null,
            Value::Bool(b) => Entry::Bool(b),
            Value::Number(n) => Entry::Number(n),
            Value::String(s) => Entry::Text(s),
            Value::Array(items) => Entry::List(items.into_iter().map(Entry::from).collect()),
            Value::Object(map) => {
                Entry::Map(map.into_iter().map(|(k, v)| (k, Entry::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Text(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Text(value)
    }
}

impl From<Callable> for Entry {
    fn from(value: Callable) -> Self {
        Entry::Func(value)
    }
}

impl From<EntryMap> for Entry {
    fn from(value: EntryMap) -> Self {
        Entry::Map(value)
    }
}

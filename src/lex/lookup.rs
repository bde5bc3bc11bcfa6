//! Lookup result types.

use lexacon_tree::Callable;
use std::fmt::Display;

/// A resolved, locale-independent value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Func(&'a Callable),
}

impl<'a> Value<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(text) => Some(*text),
            Value::Func(_) => None,
        }
    }

    pub fn as_func(&self) -> Option<&'a Callable> {
        match self {
            Value::Func(func) => Some(*func),
            Value::Text(_) => None,
        }
    }

    /// Produce text: text is returned as-is, callables are invoked with `args`.
    pub fn render(&self, args: &[&dyn Display]) -> String {
        match self {
            Value::Text(text) => (*text).to_string(),
            Value::Func(func) => func.call(args),
        }
    }
}

/// Outcome of resolving a key.
///
/// The two miss variants are kept apart so callers can tell an unknown key
/// from a known key with nothing usable for the current locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The key resolved to text or a callable.
    Found(Value<'a>),
    /// A dictionary has the key, but it resolves to a locale map with
    /// neither the preferred nor the default locale, or to a value that is
    /// not text or a callable.
    Unresolved,
    /// No dictionary has the key.
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn value(&self) -> Option<Value<'a>> {
        match self {
            Lookup::Found(value) => Some(*value),
            _ => None,
        }
    }

    /// The resolved text, if the key resolved to text.
    pub fn text(&self) -> Option<&'a str> {
        self.value().and_then(|v| v.as_text())
    }

    pub fn func(&self) -> Option<&'a Callable> {
        self.value().and_then(|v| v.as_func())
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Lookup::Unresolved)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }
}

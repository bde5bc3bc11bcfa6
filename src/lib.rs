//! lexacon - locale-aware text lookup over merged dictionaries
//!
//! Dictionaries are deep-merged entry trees with a default locale. A [`Lex`]
//! resolves dotted keys against an ordered list of dictionaries and picks
//! the variant for the preferred locale, falling back to the matching
//! dictionary's default locale.
//!
//! ```
//! use lexacon::{Dictionary, Lex, PreferredLocale};
//! use serde_json::json;
//!
//! let site = Dictionary::new("en", [json!({"hello": "Welcome"})]).unwrap();
//! let chat = Dictionary::new("es", [json!({"sup": {"en": "Hi", "es": "Hola"}})]).unwrap();
//!
//! let locale = PreferredLocale::new("es").unwrap();
//! let lex = Lex::new([site, chat]).unwrap().with_locale(locale);
//!
//! assert_eq!(lex.lookup("hello").unwrap().text(), Some("Welcome"));
//! assert_eq!(lex.lookup("sup").unwrap().text(), Some("Hola"));
//! assert!(lex.lookup("missing").unwrap().is_missing());
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod lex;
pub mod locale;

pub use config::{load_lex, ConfigError, DictionaryConfig, LexConfig};
pub use dictionary::{flatten_sources, Dictionary, Source};
pub use error::LexError;
pub use lex::{sanitize_key, Lex, Lookup, Value};
pub use lexacon_tree::{
    deep_merge, get_deep, is_non_empty_string, merge_all, Callable, Entry, EntryMap, TreeError,
    DEFAULT_SEPARATOR,
};
pub use locale::{preferred_locale, set_preferred_locale, PreferredLocale};

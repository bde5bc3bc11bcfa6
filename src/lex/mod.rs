//! Lex resolvers: locale-aware key lookup over dictionaries.
//!
//! # Resolution
//!
//! 1. The key is sanitized (see [`sanitize_key`]).
//! 2. Dictionaries are searched in construction order; the first one whose
//!    tree has the key's path wins, even if a later one also has it.
//! 3. Text and callables are returned unchanged.
//! 4. A map at the end of the path is a locale map: the preferred locale is
//!    tried first, then the matching dictionary's default locale.
//!
//! # Misses
//!
//! | Situation | Result |
//! |-----------|--------|
//! | No dictionary has the path | [`Lookup::Missing`] |
//! | Locale map lacks preferred and default locale | [`Lookup::Unresolved`] |
//! | Path ends at a number, bool, null or list | [`Lookup::Unresolved`] |
//! | Key has no path segments after sanitization | [`Lookup::Missing`] |

mod lookup;
mod sanitize;

pub use lookup::{Lookup, Value};
pub use sanitize::sanitize_key;

use lexacon_tree::{get_deep, Entry, DEFAULT_SEPARATOR};
use std::fmt::Display;

use crate::dictionary::{Dictionary, Source};
use crate::error::{validate_locale, LexError};
use crate::locale::PreferredLocale;

/// A resolver over an ordered list of dictionaries.
///
/// Holds a [`PreferredLocale`] handle that is read on every
/// [`lookup`](Lex::lookup); by default this is the process-wide context.
#[derive(Debug, Clone)]
pub struct Lex {
    dictionaries: Vec<Dictionary>,
    locale: PreferredLocale,
}

impl Lex {
    /// Build a resolver that searches `dictionaries` in order.
    ///
    /// Fails with [`LexError::NoDictionaries`] when the list is empty.
    pub fn new<I>(dictionaries: I) -> Result<Self, LexError>
    where
        I: IntoIterator<Item = Dictionary>,
    {
        let dictionaries: Vec<Dictionary> = dictionaries.into_iter().collect();
        if dictionaries.is_empty() {
            return Err(LexError::NoDictionaries);
        }
        Ok(Self {
            dictionaries,
            locale: PreferredLocale::global().clone(),
        })
    }

    /// Build a resolver from loosely typed sources, all of which must be
    /// dictionaries.
    ///
    /// Fails with [`LexError::NotADictionary`] naming the first source that
    /// is not one.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, LexError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        let mut dictionaries = Vec::new();
        for (index, source) in sources.into_iter().enumerate() {
            match source.into() {
                Source::Dictionary(dictionary) => dictionaries.push(dictionary),
                other => {
                    return Err(LexError::NotADictionary {
                        index,
                        kind: other.kind(),
                    })
                }
            }
        }
        Self::new(dictionaries)
    }

    /// Build a resolver over one tree merged from `sources`, with the
    /// default locale decided here rather than per dictionary.
    ///
    /// Unlike [`Lex::new`], locale maps for the same key in different
    /// sources are combined instead of the first source shadowing the rest.
    pub fn merged<L, I, S>(default_locale: L, sources: I) -> Result<Self, LexError>
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<Source>,
    {
        Self::new([Dictionary::new(default_locale, sources)?])
    }

    /// Bind the resolver to `locale` instead of the process-wide context.
    pub fn with_locale(mut self, locale: PreferredLocale) -> Self {
        self.locale = locale;
        self
    }

    /// The dictionaries in precedence order.
    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    /// The locale context this resolver reads.
    pub fn locale(&self) -> &PreferredLocale {
        &self.locale
    }

    /// Resolve `key` for the current preferred locale.
    ///
    /// Fails with [`LexError::InvalidKey`] on an empty key. Misses are
    /// reported through [`Lookup`], not as errors.
    pub fn lookup(&self, key: &str) -> Result<Lookup<'_>, LexError> {
        let locale = self.locale.get();
        self.lookup_in(key, &locale)
    }

    /// Resolve `key` for an explicit locale, ignoring the context.
    pub fn lookup_in(&self, key: &str, locale: &str) -> Result<Lookup<'_>, LexError> {
        if key.is_empty() {
            return Err(LexError::InvalidKey);
        }
        validate_locale(locale)?;

        let clean = sanitize_key(key);
        if clean.split(DEFAULT_SEPARATOR).all(str::is_empty) {
            tracing::debug!(key, "lookup key has no path segments after sanitization");
            return Ok(Lookup::Missing);
        }

        for (index, dictionary) in self.dictionaries.iter().enumerate() {
            if let Some(raw) = get_deep(dictionary.entries(), &clean, DEFAULT_SEPARATOR)? {
                tracing::trace!(key = %clean, dictionary = index, "matched dictionary");
                return Ok(resolve(&clean, raw, locale, dictionary.default_locale()));
            }
        }

        tracing::debug!(key = %clean, "no dictionary has key");
        Ok(Lookup::Missing)
    }

    /// Resolve `key` and produce text, invoking callables with `args`.
    ///
    /// Returns `None` on either kind of miss.
    pub fn render(&self, key: &str, args: &[&dyn Display]) -> Result<Option<String>, LexError> {
        Ok(self.lookup(key)?.value().map(|value| value.render(args)))
    }
}

fn resolve<'a>(key: &str, raw: &'a Entry, locale: &str, default_locale: &str) -> Lookup<'a> {
    let leaf = match raw {
        Entry::Map(variants) => match variants.get(locale) {
            Some(entry) => entry,
            None => match variants.get(default_locale) {
                Some(entry) => {
                    tracing::debug!(key, locale, default_locale, "falling back to default locale");
                    entry
                }
                None => {
                    tracing::debug!(key, locale, default_locale, "no variant for locale");
                    return Lookup::Unresolved;
                }
            },
        },
        other => other,
    };

    match leaf {
        Entry::Text(text) => Lookup::Found(Value::Text(text)),
        Entry::Func(func) => Lookup::Found(Value::Func(func)),
        other => {
            tracing::debug!(key, kind = other.kind(), "key does not resolve to text");
            Lookup::Unresolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scoped(locale: &str) -> PreferredLocale {
        PreferredLocale::new(locale).unwrap()
    }

    fn dictionary_a() -> Dictionary {
        Dictionary::new(
            "en",
            [json!({
                "hello": "Welcome to our site!",
                "goodbye": {"en": "Peace out", "es": "Hasta luego"}
            })],
        )
        .unwrap()
    }

    fn dictionary_b() -> Dictionary {
        Dictionary::new(
            "es",
            [json!({
                "sup": {"en": "What's up?", "es": "¿Qué pasa?"},
                "woah": {"es": "¡Ay caramba!"},
                "hello": "Shadowed"
            })],
        )
        .unwrap()
    }

    fn lex(locale: &PreferredLocale) -> Lex {
        Lex::new([dictionary_a(), dictionary_b()])
            .unwrap()
            .with_locale(locale.clone())
    }

    #[test]
    fn test_plain_text() {
        let locale = scoped("en");
        let lex = lex(&locale);
        assert_eq!(lex.lookup("hello").unwrap().text(), Some("Welcome to our site!"));
    }

    #[test]
    fn test_first_dictionary_wins() {
        let locale = scoped("en");
        let lex = Lex::new([dictionary_b(), dictionary_a()])
            .unwrap()
            .with_locale(locale);
        assert_eq!(lex.lookup("hello").unwrap().text(), Some("Shadowed"));
    }

    #[test]
    fn test_preferred_locale() {
        let locale = scoped("en");
        let lex = lex(&locale);
        assert_eq!(lex.lookup("goodbye").unwrap().text(), Some("Peace out"));
        locale.set("es").unwrap();
        assert_eq!(lex.lookup("goodbye").unwrap().text(), Some("Hasta luego"));
        assert_eq!(lex.lookup("sup").unwrap().text(), Some("¿Qué pasa?"));
    }

    #[test]
    fn test_falls_back_to_dictionary_default() {
        let locale = scoped("fr");
        let lex = lex(&locale);
        // dictionary_a defaults to en, dictionary_b to es
        assert_eq!(lex.lookup("goodbye").unwrap().text(), Some("Peace out"));
        assert_eq!(lex.lookup("sup").unwrap().text(), Some("¿Qué pasa?"));
    }

    #[test]
    fn test_unresolved_locale_map() {
        let only_es = Dictionary::new("en", [json!({"woah": {"es": "¡Ay!"}})]).unwrap();
        let lex = Lex::new([dictionary_a(), only_es])
            .unwrap()
            .with_locale(scoped("en"));

        assert_eq!(lex.lookup("woah").unwrap(), Lookup::Unresolved);
        assert_eq!(lex.lookup_in("woah", "es").unwrap().text(), Some("¡Ay!"));
    }

    #[test]
    fn test_missing_key() {
        let locale = scoped("en");
        let lex = lex(&locale);
        assert_eq!(lex.lookup("FAKE_NONEXISTENT_ID").unwrap(), Lookup::Missing);
        assert_eq!(lex.lookup("hello_there").unwrap(), Lookup::Missing);
    }

    #[test]
    fn test_missing_regardless_of_order() {
        let locale = scoped("en");
        let forward = Lex::new([dictionary_a(), dictionary_b()])
            .unwrap()
            .with_locale(locale.clone());
        let reverse = Lex::new([dictionary_b(), dictionary_a()])
            .unwrap()
            .with_locale(locale);
        assert!(forward.lookup("nowhere.at.all").unwrap().is_missing());
        assert!(reverse.lookup("nowhere.at.all").unwrap().is_missing());
    }

    #[test]
    fn test_non_text_leaf_is_unresolved() {
        let dictionary = Dictionary::new(
            "en",
            [json!({
                "count": 3,
                "flag": true,
                "nothing": null,
                "list": ["a"],
                "nested": {"en": {"deeper": "x"}}
            })],
        )
        .unwrap();
        let lex = Lex::new([dictionary]).unwrap().with_locale(scoped("en"));
        for key in ["count", "flag", "nothing", "list", "nested"] {
            assert_eq!(lex.lookup(key).unwrap(), Lookup::Unresolved, "key {key}");
        }
        // Lists are still walked by index
        assert_eq!(lex.lookup("list.0").unwrap().text(), Some("a"));
    }

    #[test]
    fn test_non_text_leaf_still_claims_key() {
        let numbers = Dictionary::new("en", [json!({"total": 10})]).unwrap();
        let words = Dictionary::new("en", [json!({"total": "Total"})]).unwrap();
        let lex = Lex::new([numbers, words]).unwrap().with_locale(scoped("en"));
        assert_eq!(lex.lookup("total").unwrap(), Lookup::Unresolved);
    }

    #[test]
    fn test_sanitized_key() {
        let dictionary = Dictionary::new("en", [json!({"ab": "joined"})]).unwrap();
        let lex = Lex::new([dictionary]).unwrap().with_locale(scoped("en"));
        assert_eq!(lex.lookup("a;b").unwrap(), lex.lookup("ab").unwrap());
        assert_eq!(lex.lookup("a;b").unwrap().text(), Some("joined"));
        assert_eq!(lex.lookup(";").unwrap(), Lookup::Missing);
    }

    #[test]
    fn test_separator_only_key_is_missing() {
        let dictionary = Dictionary::new("en", [json!({"en": "English", "hello": "Hi"})]).unwrap();
        let lex = Lex::new([dictionary]).unwrap().with_locale(scoped("en"));
        for key in [".", "...", ";."] {
            assert_eq!(lex.lookup(key).unwrap(), Lookup::Missing, "key {key:?}");
        }

        let plain = Dictionary::new("en", [json!({"x": "y"})]).unwrap();
        let lex = Lex::new([plain]).unwrap().with_locale(scoped("en"));
        assert_eq!(lex.lookup("...").unwrap(), Lookup::Missing);
    }

    #[test]
    fn test_partial_path_returns_leaf() {
        let lex = Lex::new([dictionary_a()]).unwrap().with_locale(scoped("en"));
        assert_eq!(lex.lookup("hello.world").unwrap().text(), Some("Welcome to our site!"));
    }

    #[test]
    fn test_callable_returned_unchanged() {
        let km = Entry::func(|args| format!("{} km", args[0]));
        let Entry::Func(stored) = km.clone() else {
            unreachable!()
        };
        let dictionary = Dictionary::new("en", [Entry::map([("distance", km)])]).unwrap();
        let lex = Lex::new([dictionary]).unwrap().with_locale(scoped("en"));

        let lookup = lex.lookup("distance").unwrap();
        let func = lookup.func().unwrap();
        assert!(func.ptr_eq(&stored));
        assert_eq!(func.call(&[&12]), "12 km");
    }

    #[test]
    fn test_localized_callables() {
        let dictionary = Dictionary::new(
            "en",
            [Entry::map([(
                "items",
                Entry::map([
                    ("en", Entry::func(|args| format!("{} items", args[0]))),
                    ("es", Entry::func(|args| format!("{} artículos", args[0]))),
                ]),
            )])],
        )
        .unwrap();
        let locale = scoped("es");
        let lex = Lex::new([dictionary]).unwrap().with_locale(locale.clone());

        assert_eq!(lex.render("items", &[&3]).unwrap(), Some("3 artículos".to_string()));
        locale.set("en").unwrap();
        assert_eq!(lex.render("items", &[&3]).unwrap(), Some("3 items".to_string()));
        assert_eq!(lex.render("missing", &[&3]).unwrap(), None);
    }

    #[test]
    fn test_merged_combines_locale_maps() {
        let merged = Lex::merged("en", [dictionary_a(), dictionary_b()])
            .unwrap()
            .with_locale(scoped("fr"));

        assert_eq!(merged.dictionaries().len(), 1);
        assert_eq!(merged.dictionaries()[0].default_locale(), "en");
        // Later source wins for plain text
        assert_eq!(merged.lookup("hello").unwrap().text(), Some("Shadowed"));
        // Resolver default locale applies to every key
        assert_eq!(merged.lookup("sup").unwrap().text(), Some("What's up?"));
        assert_eq!(merged.lookup("woah").unwrap(), Lookup::Unresolved);
    }

    #[test]
    fn test_empty_key_rejected() {
        let lex = Lex::new([dictionary_a()]).unwrap().with_locale(scoped("en"));
        assert_eq!(lex.lookup("").unwrap_err(), LexError::InvalidKey);
    }

    #[test]
    fn test_empty_explicit_locale_rejected() {
        let lex = Lex::new([dictionary_a()]).unwrap().with_locale(scoped("en"));
        assert!(matches!(
            lex.lookup_in("hello", "").unwrap_err(),
            LexError::InvalidLocale(_)
        ));
    }

    #[test]
    fn test_no_dictionaries_rejected() {
        assert_eq!(Lex::new(Vec::new()).unwrap_err(), LexError::NoDictionaries);
        assert_eq!(
            Lex::from_sources(Vec::<Source>::new()).unwrap_err(),
            LexError::NoDictionaries
        );
    }

    #[test]
    fn test_from_sources_names_first_offender() {
        let err = Lex::from_sources(vec![
            Source::from(dictionary_a()),
            Source::from(json!({"hello": "not a dictionary"})),
            Source::from(json!("also not")),
        ])
        .unwrap_err();
        assert_eq!(err, LexError::NotADictionary { index: 1, kind: "map" });
    }

    #[test]
    fn test_dictionaries_view_keeps_order() {
        let a = dictionary_a();
        let b = dictionary_b();
        let lex = Lex::new([a.clone(), b.clone()]).unwrap();
        assert!(lex.dictionaries()[0].ptr_eq(&a));
        assert!(lex.dictionaries()[1].ptr_eq(&b));
    }

    #[test]
    fn test_resolver_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dictionary>();
        assert_send_sync::<Lex>();
        assert_send_sync::<lexacon_tree::Callable>();
        assert_send_sync::<PreferredLocale>();
    }

    #[test]
    fn test_default_binds_global_context() {
        let lex = Lex::new([dictionary_a()]).unwrap();
        assert!(lex.locale().ptr_eq(PreferredLocale::global()));
    }
}

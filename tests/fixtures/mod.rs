//! Test fixtures shared by the integration tests
//!
//! - `site/`: a lexacon.toml with two dictionaries built from TOML and JSON
//!   sources

#![allow(dead_code)]

use lexacon::{Dictionary, PreferredLocale};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Path to the site fixture directory
pub fn site_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site")
}

/// Path to the site fixture config
pub fn site_config_path() -> PathBuf {
    site_dir().join("lexacon.toml")
}

/// Dictionary A: plain text plus an en/es locale map, default `en`
pub fn dictionary_a() -> Dictionary {
    Dictionary::new(
        "en",
        [json!({
            "hello": "Welcome to our site!",
            "goodbye": {
                "en": "Peace out",
                "es": "Hasta Luego"
            }
        })],
    )
    .expect("dictionary A is valid")
}

/// Dictionary B: locale maps only, default `es`
pub fn dictionary_b() -> Dictionary {
    Dictionary::new(
        "es",
        [json!({
            "sup": {
                "en": "What's up dude?",
                "es": "¿Que pasa, esé?"
            },
            "woah": {
                "es": "¡Ay carumba!"
            }
        })],
    )
    .expect("dictionary B is valid")
}

/// An isolated locale context
pub fn locale(value: &str) -> PreferredLocale {
    PreferredLocale::new(value).expect("fixture locale is valid")
}

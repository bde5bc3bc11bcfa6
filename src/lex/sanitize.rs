//! Lookup key sanitization.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Anything outside ASCII alphanumerics, `.`, `-`, `_` and whitespace.
const KEY_NOISE_PATTERN: &str = r"[^a-zA-Z0-9._\s-]+";

static KEY_NOISE: OnceLock<Regex> = OnceLock::new();

/// Strip every character a lookup key may not contain.
///
/// `"menu;rm -rf"` becomes `"menurm -rf"`; the separator characters of other
/// path syntaxes (`/`, `:`, `[`) are removed rather than interpreted.
pub fn sanitize_key(key: &str) -> String {
    let noise = KEY_NOISE
        .get_or_init(|| Regex::new(KEY_NOISE_PATTERN).expect("key noise pattern is valid"));
    noise.replace_all(key, "").into_owned()
}

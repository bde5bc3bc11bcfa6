//! Preferred locale state.
//!
//! A [`PreferredLocale`] is a shared, mutable locale identifier that
//! resolvers read on every lookup. Resolvers use the process-wide instance
//! unless they are bound to their own with [`crate::Lex::with_locale`], which
//! keeps concurrent hosts and tests isolated from each other.

use std::sync::{Arc, OnceLock, RwLock};

use crate::error::{validate_locale, LexError};

/// Locale in effect before anyone sets one.
pub const DEFAULT_PREFERRED_LOCALE: &str = "en";

static GLOBAL: OnceLock<PreferredLocale> = OnceLock::new();

/// Handle to a preferred locale value. Clones share the same value.
#[derive(Debug, Clone)]
pub struct PreferredLocale {
    current: Arc<RwLock<String>>,
}

impl Default for PreferredLocale {
    fn default() -> Self {
        Self {
            current: Arc::new(RwLock::new(DEFAULT_PREFERRED_LOCALE.to_string())),
        }
    }
}

impl PreferredLocale {
    /// Create an independent context holding `locale`.
    pub fn new(locale: impl Into<String>) -> Result<Self, LexError> {
        let locale = locale.into();
        validate_locale(&locale)?;
        Ok(Self {
            current: Arc::new(RwLock::new(locale)),
        })
    }

    /// The process-wide context, initialized to `"en"`.
    pub fn global() -> &'static PreferredLocale {
        GLOBAL.get_or_init(PreferredLocale::default)
    }

    /// Current locale.
    pub fn get(&self) -> String {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the locale and return the value just set.
    ///
    /// Fails with [`LexError::InvalidLocale`] on an empty string, leaving
    /// the current value unchanged.
    pub fn set(&self, locale: impl Into<String>) -> Result<String, LexError> {
        let locale = locale.into();
        validate_locale(&locale)?;

        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = locale.clone();
        tracing::debug!(locale = %locale, "preferred locale set");
        Ok(locale)
    }

    /// Whether both handles share the same value.
    pub fn ptr_eq(&self, other: &PreferredLocale) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

/// Read the process-wide preferred locale.
pub fn preferred_locale() -> String {
    PreferredLocale::global().get()
}

/// Set the process-wide preferred locale, returning the value just set.
pub fn set_preferred_locale(locale: impl Into<String>) -> Result<String, LexError> {
    PreferredLocale::global().set(locale)
}

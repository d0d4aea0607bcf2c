//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code that exists in the registry, so
//! holding one is proof of membership. Untrusted input goes through
//! [`Language::from_code_or_default`], which never fails.

use crate::i18n::{LanguageConfig, LanguageRegistry, LocaleError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "tr")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const TURKISH: Language = Language { code: "tr" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the registry
    /// * `Err(LocaleError::UnknownLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LocaleError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
            .ok_or_else(|| LocaleError::UnknownLanguage(code.to_string()))
    }

    /// Create a Language from a code, degrading to the default language for
    /// anything the registry does not know.
    pub fn from_code_or_default(code: &str) -> Language {
        Self::from_code(code).unwrap_or_else(|_| Self::default_language())
    }

    /// The default language.
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// All supported languages, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .codes()
            .map(|code| Language { code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.default_language())
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph locale (e.g., "tr_TR").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Suffix used by stem/suffix content records (e.g., "TR" in `titleTR`).
    pub fn field_suffix(&self) -> String {
        self.code.to_ascii_uppercase()
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(serde::de::Error::custom)
    }
}

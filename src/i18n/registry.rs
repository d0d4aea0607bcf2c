//! Language registry: Single source of truth for all supported languages.
//!
//! The set of languages is closed. Every language code that appears in a URL,
//! a dictionary directory or a content record is checked against this table,
//! and anything not listed here degrades to the default language.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "tr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Turkish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Türkçe")
    pub native_name: &'static str,

    /// Open Graph locale written to `og:locale` (e.g., "en_US")
    pub og_locale: &'static str,

    /// Whether this is the default language (exactly one entry)
    pub is_default: bool,
}

/// Global language registry.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    default_index: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| {
            let languages = default_languages();
            let default_index = languages
                .iter()
                .position(|lang| lang.is_default)
                .unwrap_or(0);
            LanguageRegistry {
                languages,
                default_index,
            }
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: codes are lowercase in URLs and dictionaries.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported languages, in registry order.
    pub fn list(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Supported language codes, in registry order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.languages.iter().map(|lang| lang.code)
    }

    /// The default language configuration.
    pub fn default_language(&self) -> &LanguageConfig {
        &self.languages[self.default_index]
    }

    /// Membership predicate.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Supported languages. English is the default.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
        },
        LanguageConfig {
            code: "tr",
            name: "Turkish",
            native_name: "Türkçe",
            og_locale: "tr_TR",
            is_default: false,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            og_locale: "ru_RU",
            is_default: false,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            og_locale: "de_DE",
            is_default: false,
        },
    ]
}

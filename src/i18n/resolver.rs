//! Translation resolver: key → display string with fallback and substitution.

use crate::i18n::placeholder;
use crate::i18n::{Dictionary, Language, MetricsReport, TranslationMetrics, TranslationStore};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Resolves dot-delimited keys against a `TranslationStore`.
///
/// Resolution never fails: a key missing from both the requested and the
/// default language is returned unchanged so it is visible on the page.
#[derive(Debug)]
pub struct Translator {
    store: TranslationStore,
    metrics: TranslationMetrics,
}

impl Translator {
    pub fn new(store: TranslationStore) -> Self {
        Self {
            store,
            metrics: TranslationMetrics::new(),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Resolve `key` in `language` without parameters.
    pub fn t(&self, key: &str, language: Language) -> String {
        self.resolve(key, language, &[])
    }

    /// Resolve `key` in `language`, substituting `{name}` placeholders.
    ///
    /// Lookup order: `language`, then the default language, then the key
    /// itself. Empty strings in a dictionary count as found.
    pub fn resolve(&self, key: &str, language: Language, params: &[(&str, &str)]) -> String {
        match self.lookup(key, language) {
            Some(text) => placeholder::substitute(text, params),
            None => key.to_string(),
        }
    }

    /// Resolve with an arbitrary language code; unknown codes behave as the
    /// default language.
    pub fn resolve_code(&self, key: &str, code: &str, params: &[(&str, &str)]) -> String {
        self.resolve(key, Language::from_code_or_default(code), params)
    }

    /// Whether `key` resolves to a dictionary entry in `language` or the
    /// default language. Does not touch metrics.
    pub fn has_key(&self, key: &str, language: Language) -> bool {
        self.store.get(language, key).is_some()
            || self
                .store
                .get(Language::default_language(), key)
                .is_some()
    }

    /// The full dictionary a client in `language` sees: default-language
    /// entries overlaid with `language`'s own.
    pub fn dictionary_with_fallback(&self, language: Language) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        let layers: [Option<&Dictionary>; 2] = [
            self.store.dictionary(Language::default_language()),
            self.store.dictionary(language),
        ];
        for dict in layers.into_iter().flatten() {
            merged.extend(dict.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn metrics_report(&self) -> MetricsReport {
        self.metrics.report()
    }

    fn lookup(&self, key: &str, language: Language) -> Option<&str> {
        if let Some(text) = self.store.get(language, key) {
            self.metrics.record_hit();
            return Some(text);
        }

        let default = Language::default_language();
        if language != default {
            if let Some(text) = self.store.get(default, key) {
                debug!(
                    "Key '{}' missing for {}, using {}",
                    key,
                    language.code(),
                    default.code()
                );
                self.metrics.record_fallback();
                return Some(text);
            }
        }

        warn!(
            "Unresolved translation key '{}' (language: {})",
            key,
            language.code()
        );
        self.metrics.record_miss();
        None
    }
}

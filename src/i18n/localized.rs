//! Locale field selector.
//!
//! Content records hold their human-readable fields as [`LocalizedText`], a
//! map from language to string. [`select_field`] adapts older records that
//! store one field per language (`titleEN`, `titleTR`, ...).

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// A piece of text with one value per language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct LocalizedText {
    values: HashMap<Language, String>,
}

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text with only the default-language value.
    pub fn from_default(text: impl Into<String>) -> Self {
        Self::new().with(Language::default_language(), text)
    }

    /// Builder-style insert.
    pub fn with(mut self, language: Language, text: impl Into<String>) -> Self {
        self.set(language, text);
        self
    }

    pub fn set(&mut self, language: Language, text: impl Into<String>) {
        self.values.insert(language, text.into());
    }

    /// The raw value for `language`, without fallback.
    pub fn get(&self, language: Language) -> Option<&str> {
        self.values.get(&language).map(String::as_str)
    }

    /// The value for `language`, falling back to the default language when
    /// missing or empty. Returns `""` only if the default value is itself
    /// missing or empty.
    pub fn select(&self, language: Language) -> &str {
        self.get(language)
            .filter(|text| !text.is_empty())
            .or_else(|| self.get(Language::default_language()))
            .unwrap_or("")
    }

    /// Whether the text has no non-empty value in the default language.
    pub fn is_blank(&self) -> bool {
        self.select(Language::default_language()).is_empty()
    }

    /// Languages with a non-empty value, in registry order.
    pub fn translated_languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|lang| self.get(*lang).is_some_and(|text| !text.is_empty()))
            .collect()
    }

    /// Read a stem/suffix record (`{stem}EN`, `{stem}TR`, ...) into a
    /// `LocalizedText`. Non-string and absent fields are skipped.
    pub fn from_stem_fields(record: &Value, stem: &str) -> Self {
        let mut text = Self::new();
        for language in Language::all() {
            let field = format!("{}{}", stem, language.field_suffix());
            if let Some(value) = record.get(&field).and_then(Value::as_str) {
                text.set(language, value);
            }
        }
        text
    }
}

impl From<BTreeMap<String, String>> for LocalizedText {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut text = Self::new();
        for (code, value) in raw {
            match Language::from_code(&code) {
                Ok(language) => text.set(language, value),
                Err(_) => warn!("Dropping localized value for unsupported language '{}'", code),
            }
        }
        text
    }
}

impl From<LocalizedText> for BTreeMap<String, String> {
    fn from(text: LocalizedText) -> Self {
        text.values
            .into_iter()
            .map(|(lang, value)| (lang.code().to_string(), value))
            .collect()
    }
}

/// Select `stem` for `language` from a stem/suffix record, with fallback to the
/// default-language field.
pub fn select_field(record: &Value, stem: &str, language: Language) -> String {
    LocalizedText::from_stem_fields(record, stem)
        .select(language)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== select Tests ====================

    #[test]
    fn test_select_requested_language() {
        let text = LocalizedText::from_default("Dental implants")
            .with(Language::TURKISH, "Diş implantı");
        assert_eq!(text.select(Language::TURKISH), "Diş implantı");
    }

    #[test]
    fn test_select_missing_falls_back() {
        let text = LocalizedText::from_default("Dental implants");
        for language in Language::all() {
            assert_eq!(text.select(language), "Dental implants");
        }
    }

    #[test]
    fn test_select_empty_falls_back() {
        let text = LocalizedText::from_default("Hello").with(Language::TURKISH, "");
        assert_eq!(text.select(Language::TURKISH), "Hello");
    }

    #[test]
    fn test_select_empty_default_is_empty() {
        let text = LocalizedText::new().with(Language::RUSSIAN, "Привет");
        assert_eq!(text.select(Language::GERMAN), "");
        assert!(text.is_blank());
    }

    #[test]
    fn test_translated_languages() {
        let text = LocalizedText::from_default("Hi")
            .with(Language::GERMAN, "Hallo")
            .with(Language::TURKISH, "");
        assert_eq!(
            text.translated_languages(),
            vec![Language::ENGLISH, Language::GERMAN]
        );
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_deserialize_map() {
        let text: LocalizedText =
            serde_json::from_value(json!({"en": "FAQ", "de": "Häufige Fragen"})).unwrap();
        assert_eq!(text.select(Language::GERMAN), "Häufige Fragen");
    }

    #[test]
    fn test_deserialize_drops_unknown_codes() {
        let text: LocalizedText =
            serde_json::from_value(json!({"en": "FAQ", "fr": "Questions"})).unwrap();
        assert_eq!(text.translated_languages(), vec![Language::ENGLISH]);
    }

    #[test]
    fn test_serialize_as_code_map() {
        let text = LocalizedText::from_default("Hi").with(Language::RUSSIAN, "Привет");
        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(json, json!({"en": "Hi", "ru": "Привет"}));
    }

    // ==================== Stem/Suffix Adapter Tests ====================

    #[test]
    fn test_select_field_empty_suffix_falls_back() {
        let record = json!({"titleEN": "Hello", "titleTR": ""});
        assert_eq!(select_field(&record, "title", Language::TURKISH), "Hello");
    }

    #[test]
    fn test_select_field_reads_suffix() {
        let record = json!({"titleEN": "Hello", "titleRU": "Привет"});
        assert_eq!(select_field(&record, "title", Language::RUSSIAN), "Привет");
    }

    #[test]
    fn test_select_field_only_default_populated() {
        let record = json!({"titleEN": "Hello"});
        for language in Language::all() {
            assert_eq!(select_field(&record, "title", language), "Hello");
        }
    }

    #[test]
    fn test_select_field_ignores_non_strings_and_other_stems() {
        let record = json!({"titleEN": "Hello", "titleDE": 42, "subtitleDE": "Hallo"});
        assert_eq!(select_field(&record, "title", Language::GERMAN), "Hello");
    }

    #[test]
    fn test_select_field_missing_everything() {
        assert_eq!(select_field(&json!({}), "title", Language::GERMAN), "");
        assert_eq!(select_field(&json!(null), "title", Language::GERMAN), "");
    }
}

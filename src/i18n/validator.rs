//! Dictionary quality validation.
//!
//! Checks every non-default dictionary against the default one: keys that can
//! never fall back, keys that will always fall back, and translations whose
//! placeholders drifted from the source string.

use crate::i18n::placeholder;
use crate::i18n::{Language, TranslationStore};

/// Validation report containing errors and warnings about a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a key unresolvable in some language
    pub errors: Vec<String>,

    /// Problems that degrade output but still resolve
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for a loaded `TranslationStore`.
pub struct DictionaryValidator;

impl DictionaryValidator {
    /// Validate all dictionaries in `store`.
    ///
    /// - error: key present in a translation but missing from the default
    ///   language
    /// - warning: default-language key missing from a translation
    /// - warning: translation placeholders differ from the default string
    /// - warning: un-migrated `{{name}}` placeholder
    pub fn validate(store: &TranslationStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = Language::default_language();
        let default_keys = store.keys(default);

        Self::check_double_braces(store, default, &mut report);

        for language in Language::all() {
            if language == default {
                continue;
            }

            let keys = store.keys(language);
            for key in &keys {
                let Some(translated) = store.get(language, key) else {
                    continue;
                };
                match store.get(default, key) {
                    None => report.errors.push(format!(
                        "[{}] '{}' has no {} entry to fall back to",
                        language.code(),
                        key,
                        default.code()
                    )),
                    Some(source) => {
                        let expected = placeholder::placeholder_names(source);
                        let actual = placeholder::placeholder_names(translated);
                        if !translated.is_empty() && expected != actual {
                            report.warnings.push(format!(
                                "[{}] '{}' placeholder mismatch: {} has {:?}, translation has {:?}",
                                language.code(),
                                key,
                                default.code(),
                                expected,
                                actual
                            ));
                        }
                    }
                }
            }

            let missing = default_keys
                .iter()
                .filter(|key| store.get(language, key).is_none())
                .count();
            if missing > 0 {
                report.warnings.push(format!(
                    "[{}] {} of {} keys missing, falling back to {}",
                    language.code(),
                    missing,
                    default_keys.len(),
                    default.code()
                ));
            }

            Self::check_double_braces(store, language, &mut report);
        }

        report
    }

    fn check_double_braces(store: &TranslationStore, language: Language, report: &mut ValidationReport) {
        for key in store.keys(language) {
            if store
                .get(language, key)
                .is_some_and(placeholder::has_double_braces)
            {
                report.warnings.push(format!(
                    "[{}] '{}' still uses {{{{name}}}} placeholders",
                    language.code(),
                    key
                ));
            }
        }
    }
}

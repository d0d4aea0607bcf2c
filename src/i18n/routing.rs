//! Path language router.
//!
//! Site paths have the shape `/{lang}/...rest`. A missing or unsupported
//! leading segment means the default language; nothing here redirects.

use crate::i18n::{Language, LanguageRegistry};
use serde::Serialize;

/// Split `path` into its path part and a `?query` / `#fragment` suffix.
fn split_suffix(path: &str) -> (&str, &str) {
    match path.find(['?', '#']) {
        Some(idx) => path.split_at(idx),
        None => (path, ""),
    }
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}

/// Language named by the first path segment, or the default language.
pub fn extract_language(path: &str) -> Language {
    let (path, _) = split_suffix(path);
    Language::from_code_or_default(first_segment(path))
}

/// Remove a leading language segment. The result always starts with `/`;
/// query and fragment are dropped.
pub fn strip_language_prefix(path: &str) -> String {
    let (path, _) = split_suffix(path);
    let trimmed = path.trim_start_matches('/');
    let (first, remainder) = trimmed.split_once('/').unwrap_or((trimmed, ""));

    if LanguageRegistry::get().is_supported(first) {
        format!("/{}", remainder)
    } else {
        format!("/{}", trimmed)
    }
}

/// Replace any leading language segment with `language`.
///
/// Query string and fragment are preserved. The root path maps to `/{code}`.
pub fn with_language_prefix(path: &str, language: Language) -> String {
    let (_, suffix) = split_suffix(path);
    let rest = strip_language_prefix(path);
    let rest = if rest == "/" { "" } else { rest.as_str() };
    format!("/{}{}{}", language.code(), rest, suffix)
}

/// Locale state for one page render.
///
/// Built once per navigation and never mutated; a new navigation builds a new
/// context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLocaleContext {
    pub language: Language,
    /// Path with the language segment removed (e.g., `/blog/my-post`)
    pub canonical_path: String,
    /// Path with the resolved language segment (e.g., `/tr/blog/my-post`)
    pub localized_path: String,
}

impl PageLocaleContext {
    pub fn from_path(path: &str) -> Self {
        let language = extract_language(path);
        let canonical_path = strip_language_prefix(path);
        let localized_path = with_language_prefix(&canonical_path, language);
        Self {
            language,
            canonical_path,
            localized_path,
        }
    }

    /// The same page in another language.
    pub fn path_for(&self, language: Language) -> String {
        with_language_prefix(&self.canonical_path, language)
    }

    /// Canonical path segments, without empty segments.
    pub fn segments(&self) -> Vec<&str> {
        self.canonical_path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }
}

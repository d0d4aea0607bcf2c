//! Placeholder handling for dictionary strings.
//!
//! The supported convention is `{name}`. Dictionaries written with the older
//! `{{name}}` convention declare it with a top-level `"@placeholders": "double"`
//! marker and are rewritten once at load time by [`migrate_double_braces`].

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Top-level key in a dictionary document that declares its placeholder style.
pub const STYLE_MARKER: &str = "@placeholders";

/// Placeholder convention a dictionary document was authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `{name}`
    #[default]
    Single,
    /// `{{name}}`, migrated to `Single` on load
    Double,
}

impl PlaceholderStyle {
    /// Parse the marker value. Unknown values yield `None`.
    pub fn from_marker(value: &str) -> Option<Self> {
        match value {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            _ => None,
        }
    }
}

// Any run of braces around an identifier; substitution only accepts runs of one.
static BRACED_REGEX: OnceLock<Regex> = OnceLock::new();
static DOUBLE_REGEX: OnceLock<Regex> = OnceLock::new();

fn braced_regex() -> &'static Regex {
    BRACED_REGEX
        .get_or_init(|| Regex::new(r"(\{+)([A-Za-z_][A-Za-z0-9_]*)(\}+)").unwrap())
}

fn double_regex() -> &'static Regex {
    DOUBLE_REGEX.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap())
}

/// Replace every `{name}` whose name is in `params` with its value.
///
/// Unmatched placeholders and multi-brace sequences are left verbatim.
pub fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    braced_regex()
        .replace_all(template, |caps: &Captures| {
            let whole = caps[0].to_string();
            if caps[1].len() != 1 || caps[3].len() != 1 {
                return whole;
            }
            params
                .iter()
                .find(|(name, _)| *name == &caps[2])
                .map(|(_, value)| value.to_string())
                .unwrap_or(whole)
        })
        .into_owned()
}

/// Rewrite `{{name}}` to `{name}`, returning the new string and the number of
/// placeholders rewritten.
pub fn migrate_double_braces(text: &str) -> (String, usize) {
    let regex = double_regex();
    let count = regex.find_iter(text).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (regex.replace_all(text, "{$1}").into_owned(), count)
}

/// Names of all single-brace placeholders in `text`.
pub fn placeholder_names(text: &str) -> BTreeSet<String> {
    braced_regex()
        .captures_iter(text)
        .filter(|caps| caps[1].len() == 1 && caps[3].len() == 1)
        .map(|caps| caps[2].to_string())
        .collect()
}

/// Whether `text` still contains a `{{name}}` placeholder.
pub fn has_double_braces(text: &str) -> bool {
    double_regex().is_match(text)
}

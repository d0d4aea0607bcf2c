//! Locale-aware date formatting driven by the dictionaries.
//!
//! The pattern lives at `common.date.format` with `{day}`, `{month}` and
//! `{year}` placeholders; month names at `common.months.m1` .. `m12`.

use crate::i18n::{Language, Translator};
use chrono::{Datelike, NaiveDate};

/// Render `date` for display in `language`.
pub fn format_date(translator: &Translator, date: NaiveDate, language: Language) -> String {
    let month = translator.t(&format!("common.months.m{}", date.month()), language);
    let day = date.day().to_string();
    let year = date.year().to_string();
    translator.resolve(
        "common.date.format",
        language,
        &[
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
        ],
    )
}

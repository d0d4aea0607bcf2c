//! Dictionary check binary - validates translation dictionaries and prints a report
//!
//! Usage:
//!   cargo run --bin check-locales                # Check embedded dictionaries
//!   cargo run --bin check-locales -- locales/    # Check a dictionary directory
//!
//! Exits with status 1 when any error is found.

use anyhow::{Context, Result};
use clinic_locale::i18n::{DictionaryValidator, Language, TranslationStore};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinic_locale=info".parse()?),
        )
        .init();

    let store = match std::env::args().nth(1) {
        Some(dir) => TranslationStore::from_dir(&dir)
            .with_context(|| format!("Failed to load dictionaries from {}", dir))?,
        None => TranslationStore::embedded().context("Failed to load embedded dictionaries")?,
    };

    let default = Language::default_language();
    let total = store.keys(default).len();
    for language in Language::all() {
        let count = store.keys(language).len();
        info!(
            "{} ({}): {} keys, {} of {} default keys",
            language.name(),
            language.code(),
            count,
            store
                .keys(default)
                .iter()
                .filter(|key| store.get(language, key).is_some())
                .count(),
            total
        );
    }

    let report = DictionaryValidator::validate(&store);
    for error in &report.errors {
        println!("ERROR   {}", error);
    }
    for warning in &report.warnings {
        println!("WARNING {}", warning);
    }

    println!(
        "\n{} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

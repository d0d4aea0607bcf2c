//! Internationalization (i18n) module.
//!
//! Everything that decides which language a page is in and which strings it
//! shows lives here.
//!
//! # Architecture
//!
//! - `registry`: closed table of supported languages and the default one
//! - `language`: validated `Language` type
//! - `store`: flattened per-language dictionaries loaded from JSON
//! - `resolver`: key lookup with default-language fallback and `{name}` substitution
//! - `routing`: language extraction from and injection into URL paths
//! - `localized`: per-language content fields with fallback
//! - `date`: dictionary-driven date formatting
//! - `validator`: dictionary coverage and placeholder checks
//! - `metrics`: lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic_locale::i18n::{PageLocaleContext, TranslationStore, Translator};
//!
//! let translator = Translator::new(TranslationStore::embedded()?);
//! let ctx = PageLocaleContext::from_path("/tr/blog/my-post");
//! let title = translator.t("blog.newsletter.title", ctx.language);
//! ```

mod date;
mod error;
mod language;
mod localized;
mod metrics;
pub mod placeholder;
mod registry;
mod resolver;
mod routing;
mod store;
mod validator;

pub use date::format_date;
pub use error::LocaleError;
pub use language::Language;
pub use localized::{select_field, LocalizedText};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Translator;
pub use routing::{extract_language, strip_language_prefix, with_language_prefix, PageLocaleContext};
pub use store::{Dictionary, TranslationStore};
pub use validator::{DictionaryValidator, ValidationReport};

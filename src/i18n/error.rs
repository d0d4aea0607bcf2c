use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing languages or loading dictionaries.
///
/// Resolution itself never fails; these only surface at load time or when a
/// caller explicitly asks for strict language validation.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Failed to read dictionary {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dictionary {name}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dictionary {name} must be a JSON object at the top level")]
    NotAnObject { name: String },

    #[error("No dictionaries found for default language '{0}'")]
    MissingDefaultLanguage(&'static str),
}

//! Translation store: per-language flattened dictionaries.
//!
//! Dictionaries are authored as nested JSON documents, one per domain
//! (`common`, `blog`, `gallery`, `admin`, `seo`). At load time every document
//! is flattened into a map keyed by the full dot path, with the domain name as
//! the first segment, so `blog.json` containing `{"newsletter": {"title": ..}}`
//! yields the key `blog.newsletter.title`.

use crate::i18n::placeholder::{self, PlaceholderStyle, STYLE_MARKER};
use crate::i18n::{Language, LocaleError};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Dictionaries compiled into the binary: (language code, domain, document).
const EMBEDDED: &[(&str, &str, &str)] = &[
    ("en", "common", include_str!("../../locales/en/common.json")),
    ("en", "blog", include_str!("../../locales/en/blog.json")),
    ("en", "gallery", include_str!("../../locales/en/gallery.json")),
    ("en", "admin", include_str!("../../locales/en/admin.json")),
    ("en", "seo", include_str!("../../locales/en/seo.json")),
    ("tr", "common", include_str!("../../locales/tr/common.json")),
    ("tr", "blog", include_str!("../../locales/tr/blog.json")),
    ("tr", "gallery", include_str!("../../locales/tr/gallery.json")),
    ("tr", "admin", include_str!("../../locales/tr/admin.json")),
    ("tr", "seo", include_str!("../../locales/tr/seo.json")),
    ("ru", "common", include_str!("../../locales/ru/common.json")),
    ("ru", "blog", include_str!("../../locales/ru/blog.json")),
    ("ru", "gallery", include_str!("../../locales/ru/gallery.json")),
    ("ru", "seo", include_str!("../../locales/ru/seo.json")),
    ("de", "common", include_str!("../../locales/de/common.json")),
    ("de", "blog", include_str!("../../locales/de/blog.json")),
    ("de", "seo", include_str!("../../locales/de/seo.json")),
];

/// Flattened dictionary for one language.
pub type Dictionary = HashMap<String, String>;

/// Read-only set of dictionaries, one per supported language.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    dictionaries: HashMap<Language, Dictionary>,
}

impl TranslationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dictionaries compiled into the binary.
    pub fn embedded() -> Result<Self, LocaleError> {
        let mut store = Self::new();
        for (code, domain, document) in EMBEDDED {
            let language = Language::from_code(code)?;
            store.insert_document(language, domain, document)?;
        }
        store.ensure_default_language()?;
        info!(
            "Loaded embedded dictionaries for {} languages",
            store.dictionaries.len()
        );
        Ok(store)
    }

    /// Load dictionaries from `{root}/{lang}/{domain}.json`.
    ///
    /// Directories that are not registry language codes are skipped with a
    /// warning. Non-JSON files are ignored.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let root = root.as_ref();
        let mut store = Self::new();

        for lang_dir in sorted_entries(root)? {
            if !lang_dir.is_dir() {
                continue;
            }
            let Some(dir_name) = lang_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let language = match Language::from_code(dir_name) {
                Ok(language) => language,
                Err(_) => {
                    warn!(
                        "Skipping dictionary directory '{}': not a supported language",
                        dir_name
                    );
                    continue;
                }
            };

            for file in sorted_entries(&lang_dir)? {
                if file.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let Some(domain) = file.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let document = fs::read_to_string(&file).map_err(|source| LocaleError::Io {
                    path: file.clone(),
                    source,
                })?;
                store.insert_document(language, domain, &document)?;
            }
        }

        store.ensure_default_language()?;
        info!(
            "Loaded dictionaries for {} languages from {}",
            store.dictionaries.len(),
            root.display()
        );
        Ok(store)
    }

    /// Parse a nested JSON dictionary document and merge it into `language`'s
    /// dictionary under the `domain` prefix.
    ///
    /// # Returns
    /// The number of string entries added.
    pub fn insert_document(
        &mut self,
        language: Language,
        domain: &str,
        document: &str,
    ) -> Result<usize, LocaleError> {
        let name = format!("{}/{}.json", language.code(), domain);
        let value: Value = serde_json::from_str(document).map_err(|source| LocaleError::Json {
            name: name.clone(),
            source,
        })?;
        let Value::Object(mut root) = value else {
            return Err(LocaleError::NotAnObject { name });
        };

        let style = match root.remove(STYLE_MARKER) {
            Some(Value::String(marker)) => PlaceholderStyle::from_marker(&marker).unwrap_or_else(|| {
                warn!(
                    "Unknown placeholder style '{}' in {}, treating as single-brace",
                    marker, name
                );
                PlaceholderStyle::Single
            }),
            Some(_) => {
                warn!("Ignoring non-string '{}' marker in {}", STYLE_MARKER, name);
                PlaceholderStyle::Single
            }
            None => PlaceholderStyle::Single,
        };

        let mut flattener = Flattener {
            style,
            entries: Dictionary::new(),
            migrated: 0,
            skipped: 0,
            collisions: Vec::new(),
        };
        flattener.walk(domain, &Value::Object(root));

        if flattener.migrated > 0 {
            info!(
                "Migrated {} double-brace placeholders in {}",
                flattener.migrated, name
            );
        }
        for key in &flattener.collisions {
            warn!(
                "Key {} is defined more than once in {}, keeping the last value",
                key, name
            );
        }
        if flattener.skipped > 0 {
            debug!(
                "Skipped {} non-string values in {}",
                flattener.skipped, name
            );
        }

        let added = flattener.entries.len();
        self.dictionaries
            .entry(language)
            .or_default()
            .extend(flattener.entries);
        Ok(added)
    }

    /// Look up a flattened key. Empty strings are returned as valid entries.
    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&language)
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
    }

    /// The flattened dictionary for `language`, if any was loaded.
    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Sorted keys for `language`.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .dictionaries
            .get(&language)
            .map(|dict| dict.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Languages with at least one loaded document, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|lang| self.dictionaries.contains_key(lang))
            .collect()
    }

    fn ensure_default_language(&self) -> Result<(), LocaleError> {
        let default = Language::default_language();
        if self.dictionaries.contains_key(&default) {
            Ok(())
        } else {
            Err(LocaleError::MissingDefaultLanguage(default.code()))
        }
    }
}

struct Flattener {
    style: PlaceholderStyle,
    entries: Dictionary,
    migrated: usize,
    skipped: usize,
    /// Flattened keys produced by both a nested path and a dotted name
    collisions: Vec<String>,
}

impl Flattener {
    fn walk(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.walk(&format!("{}.{}", prefix, key), child);
                }
            }
            Value::String(text) => {
                let text = match self.style {
                    PlaceholderStyle::Single => text.clone(),
                    PlaceholderStyle::Double => {
                        let (migrated, count) = placeholder::migrate_double_braces(text);
                        self.migrated += count;
                        migrated
                    }
                };
                if self.entries.insert(prefix.to_string(), text).is_some() {
                    self.collisions.push(prefix.to_string());
                }
            }
            _ => self.skipped += 1,
        }
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>, LocaleError> {
    let io_err = |source| LocaleError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_err)?;
    paths.sort();
    Ok(paths)
}

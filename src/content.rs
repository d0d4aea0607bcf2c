//! Localized content records consumed by page rendering.

use crate::i18n::{Language, LocalizedText};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../content/catalog.json");

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: LocalizedText,
    #[serde(default)]
    pub excerpt: LocalizedText,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<NaiveDate>,
    pub updated_at: Option<NaiveDate>,
}

/// A treatment offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicePackage {
    pub slug: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub summary: LocalizedText,
    /// schema.org procedure type (e.g., "SurgicalProcedure")
    pub procedure_type: Option<String>,
    pub body_location: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

impl FaqEntry {
    /// Question and answer for `language`, with default-language fallback.
    pub fn localized(&self, language: Language) -> (&str, &str) {
        (self.question.select(language), self.answer.select(language))
    }
}

/// All content records the site renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub services: Vec<ServicePackage>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

impl ContentCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_CATALOG).context("Failed to parse embedded content catalog")
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read content catalog at {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse content catalog at {}", path.display()))?;
        info!(
            "Loaded {} articles, {} services, {} FAQ entries from {}",
            catalog.articles.len(),
            catalog.services.len(),
            catalog.faqs.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    pub fn service(&self, slug: &str) -> Option<&ServicePackage> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = ContentCatalog::embedded().unwrap();
        assert!(!catalog.articles.is_empty());
        assert!(!catalog.services.is_empty());
        assert!(!catalog.faqs.is_empty());
    }

    #[test]
    fn test_article_lookup_and_fallback() {
        let catalog = ContentCatalog::embedded().unwrap();
        let article = catalog.article("dental-implant-recovery").unwrap();
        assert_eq!(
            article.title.select(Language::TURKISH),
            "İmplant ameliyatı sonrası iyileşme"
        );
        // German title is stored empty
        assert_eq!(
            article.title.select(Language::GERMAN),
            "Recovering after dental implant surgery"
        );
        assert_eq!(
            article.published_at,
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
    }

    #[test]
    fn test_article_without_dates() {
        let catalog = ContentCatalog::embedded().unwrap();
        let article = catalog.article("veneers-vs-crowns").unwrap();
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_unknown_slug() {
        let catalog = ContentCatalog::embedded().unwrap();
        assert!(catalog.article("nope").is_none());
        assert!(catalog.service("nope").is_none());
    }

    #[test]
    fn test_faq_localized_falls_back_per_field() {
        let catalog = ContentCatalog::embedded().unwrap();
        let (question, answer) = catalog.faqs[1].localized(Language::GERMAN);
        assert_eq!(question, "Ist die Beratung kostenlos?");
        assert_eq!(answer, "Yes, the first online consultation is free of charge.");
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"services": [{"slug": "botox", "name": {"en": "Botox"}, "procedure_type": null, "body_location": null, "image": null}]}"#,
        )
        .unwrap();

        let catalog = ContentCatalog::from_file(&path).unwrap();
        assert!(catalog.articles.is_empty());
        assert_eq!(
            catalog.service("botox").unwrap().name.select(Language::RUSSIAN),
            "Botox"
        );
    }

    #[test]
    fn test_from_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = ContentCatalog::from_file(temp.path().join("none.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content catalog"));
    }
}

//! HTTP surface for frontends: dictionary export and head rendering.

use crate::config::Config;
use crate::content::ContentCatalog;
use crate::i18n::{
    DictionaryValidator, Language, MetricsReport, PageLocaleContext, TranslationStore, Translator,
};
use crate::seo::{schema, MemoryHead, PageContent, PageKind, SeoEmitter, SiteInfo};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Markup every rendered head starts with; not owned by the SEO emitter.
const BASE_HEAD: &[&str] = &[
    r#"<meta charset="utf-8">"#,
    r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
];

/// `seo.pages` section used for the site root.
const HOME_SECTION: &str = "home";

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub catalog: Arc<ContentCatalog>,
    pub emitter: SeoEmitter,
}

impl AppState {
    pub fn new(translator: Arc<Translator>, catalog: ContentCatalog, site: SiteInfo) -> Self {
        Self {
            emitter: SeoEmitter::new(site, translator.clone()),
            translator,
            catalog: Arc::new(catalog),
        }
    }

    /// Load dictionaries and content as configured and validate them.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = match &config.locales_dir {
            Some(dir) => TranslationStore::from_dir(dir)
                .with_context(|| format!("Failed to load dictionaries from {}", dir))?,
            None => TranslationStore::embedded().context("Failed to load embedded dictionaries")?,
        };

        let report = DictionaryValidator::validate(&store);
        for error in &report.errors {
            warn!("Dictionary error: {}", error);
        }
        for warning in &report.warnings {
            warn!("Dictionary warning: {}", warning);
        }

        let catalog = match &config.catalog_file {
            Some(path) => ContentCatalog::from_file(path)?,
            None => ContentCatalog::embedded()?,
        };

        let site = SiteInfo {
            base_url: config.base_url.clone(),
            name: config.site_name.clone(),
            logo_url: config.logo_url.clone(),
            default_image: config.default_og_image.clone(),
            phone: config.phone.clone(),
            city: config.city.clone(),
            country: config.country.clone(),
        };

        info!(
            "Locale layer ready: {} languages, {} keys in {}",
            store.languages().len(),
            store.keys(Language::default_language()).len(),
            Language::default_language().code()
        );

        Ok(Self::new(Arc::new(Translator::new(store)), catalog, site))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/metrics", get(metrics))
        .route("/api/i18n/:lang", get(dictionary))
        .route("/api/head", get(head))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[derive(Debug, Serialize)]
pub struct DictionaryResponse {
    pub language: Language,
    pub dictionary: BTreeMap<String, String>,
}

/// Flattened dictionary for a language, default-language entries filled in.
/// Unknown codes get the default language.
pub async fn dictionary(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Json<DictionaryResponse> {
    let language = Language::from_code_or_default(&lang);
    Json(DictionaryResponse {
        language,
        dictionary: state.translator.dictionary_with_fallback(language),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.translator.metrics_report())
}

#[derive(Debug, Deserialize)]
pub struct HeadQuery {
    pub path: Option<String>,
}

/// Rendered `<head>` contents for a site path.
pub async fn head(State(state): State<AppState>, Query(query): Query<HeadQuery>) -> Html<String> {
    let context = PageLocaleContext::from_path(query.path.as_deref().unwrap_or("/"));
    let content = page_content(&state, &context);

    let mut head = MemoryHead::with_unmanaged(BASE_HEAD.iter().copied());
    state.emitter.emit(&mut head, &context, &content);
    Html(head.render())
}

/// Localized page strings for `context`, from the catalog or the `seo`
/// dictionary.
pub fn page_content(state: &AppState, context: &PageLocaleContext) -> PageContent {
    let t = &state.translator;
    let language = context.language;

    match context.segments().as_slice() {
        [] => section_page(t, HOME_SECTION, language),
        ["blog", slug] => match state.catalog.article(slug) {
            Some(article) => PageContent {
                title: article.title.select(language).to_string(),
                description: non_empty(article.excerpt.select(language)),
                image: article.cover_image.clone(),
                kind: PageKind::Article {
                    published: article.published_at,
                    modified: article.updated_at,
                    author: article.author.clone(),
                },
                ..PageContent::default()
            },
            None => not_found(t, language),
        },
        ["services", slug] => match state.catalog.service(slug) {
            Some(service) => PageContent {
                title: service.name.select(language).to_string(),
                description: non_empty(service.summary.select(language)),
                image: service.image.clone(),
                kind: PageKind::Service {
                    procedure_type: service.procedure_type.clone(),
                    body_location: service.body_location.clone(),
                },
                ..PageContent::default()
            },
            None => not_found(t, language),
        },
        ["faq"] => PageContent {
            schema: Some(schema::faq_page(&state.catalog.faqs, language)),
            ..section_page(t, "faq", language)
        },
        // `home` is only reachable as the root path
        [section]
            if *section != HOME_SECTION
                && t.has_key(&format!("seo.pages.{}.title", section), language) =>
        {
            section_page(t, section, language)
        }
        _ => not_found(t, language),
    }
}

fn section_page(t: &Translator, section: &str, language: Language) -> PageContent {
    PageContent {
        description: Some(t.t(&format!("seo.pages.{}.description", section), language)),
        ..PageContent::new(t.t(&format!("seo.pages.{}.title", section), language))
    }
}

fn not_found(t: &Translator, language: Language) -> PageContent {
    PageContent {
        description: Some(t.t("seo.notFound.description", language)),
        noindex: true,
        ..PageContent::new(t.t("seo.notFound.title", language))
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let site = SiteInfo {
            base_url: "https://clinic.example".to_string(),
            name: "Smile Clinic".to_string(),
            logo_url: None,
            default_image: "https://clinic.example/og.jpg".to_string(),
            phone: None,
            city: Some("Istanbul".to_string()),
            country: Some("TR".to_string()),
        };
        AppState::new(
            Arc::new(Translator::new(TranslationStore::embedded().unwrap())),
            ContentCatalog::embedded().unwrap(),
            site,
        )
    }

    async fn render(path: &str) -> String {
        let Html(html) = head(
            State(state()),
            Query(HeadQuery {
                path: Some(path.to_string()),
            }),
        )
        .await;
        html
    }

    // ==================== Page Content Tests ====================

    #[test]
    fn test_page_content_home() {
        let state = state();
        let content = page_content(&state, &PageLocaleContext::from_path("/tr"));
        assert_eq!(content.title, "Diş ve Estetik Kliniği");
        assert_eq!(content.kind, PageKind::Website);
    }

    #[test]
    fn test_page_content_article_falls_back_per_field() {
        let state = state();
        let content = page_content(
            &state,
            &PageLocaleContext::from_path("/de/blog/dental-implant-recovery"),
        );
        assert_eq!(content.title, "Recovering after dental implant surgery");
        assert!(matches!(
            content.kind,
            PageKind::Article {
                published: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_page_content_service() {
        let state = state();
        let content = page_content(
            &state,
            &PageLocaleContext::from_path("/ru/services/dental-implants"),
        );
        assert_eq!(content.title, "Имплантация зубов");
        // No Russian summary; English one is used
        assert_eq!(
            content.description.as_deref(),
            Some("Titanium implants with lifetime warranty, placed in a single visit.")
        );
    }

    #[test]
    fn test_page_content_faq_has_explicit_schema() {
        let state = state();
        let content = page_content(&state, &PageLocaleContext::from_path("/en/faq"));
        let schema = content.schema.unwrap();
        assert_eq!(schema["@type"], "FAQPage");
        assert_eq!(schema["mainEntity"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_page_content_section_from_dictionary() {
        let state = state();
        let content = page_content(&state, &PageLocaleContext::from_path("/gallery"));
        assert_eq!(content.title, "Before & After");
    }

    #[test]
    fn test_page_content_home_section_only_at_root() {
        let state = state();
        for path in ["/home", "/tr/home"] {
            let content = page_content(&state, &PageLocaleContext::from_path(path));
            assert!(content.noindex, "{}", path);
        }
        assert!(!page_content(&state, &PageLocaleContext::from_path("/en/")).noindex);
    }

    #[tokio::test]
    async fn test_head_handler_home_segment_is_not_indexed() {
        let html = render("/en/home").await;
        assert!(html.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://clinic.example/en/home">"#));
    }

    #[test]
    fn test_page_content_unknown_is_noindex() {
        let state = state();
        for path in ["/en/blog/missing", "/tr/nothing-here", "/a/b/c/d"] {
            let content = page_content(&state, &PageLocaleContext::from_path(path));
            assert!(content.noindex, "{}", path);
        }
    }

    // ==================== Handler Tests ====================

    #[tokio::test]
    async fn test_head_handler_renders_article() {
        let html = render("/tr/blog/dental-implant-recovery").await;
        assert!(html.starts_with(r#"<meta charset="utf-8">"#));
        assert!(html.contains(
            r#"<link rel="canonical" href="https://clinic.example/tr/blog/dental-implant-recovery">"#
        ));
        assert!(html.contains(r#"hreflang="x-default" href="https://clinic.example/en/blog/dental-implant-recovery""#));
        assert!(html.contains(r#""@type":"Article""#));
        assert!(html.contains(r#"<meta property="og:type" content="article">"#));
        assert_eq!(html.matches(r#"rel="canonical""#).count(), 1);
        assert_eq!(html.matches("application/ld+json").count(), 1);
    }

    #[tokio::test]
    async fn test_head_handler_undated_article_uses_organization() {
        let html = render("/en/blog/veneers-vs-crowns").await;
        assert!(html.contains(r#""@type":"MedicalClinic""#));
        assert!(!html.contains(r#""@type":"Article""#));
    }

    #[tokio::test]
    async fn test_head_handler_defaults_to_root() {
        let Html(html) = head(State(state()), Query(HeadQuery { path: None })).await;
        assert!(html.contains(r#"<link rel="canonical" href="https://clinic.example/en">"#));
    }

    #[tokio::test]
    async fn test_dictionary_handler_unknown_language() {
        let Json(response) = dictionary(State(state()), Path("xx".to_string())).await;
        assert_eq!(response.language, Language::ENGLISH);
        assert_eq!(response.dictionary["blog.newsletter.title"], "Stay informed");
    }

    #[tokio::test]
    async fn test_dictionary_handler_merges_fallback() {
        let Json(response) = dictionary(State(state()), Path("de".to_string())).await;
        assert_eq!(response.dictionary["common.nav.home"], "Startseite");
        // German has no gallery dictionary
        assert_eq!(response.dictionary["gallery.count"], "{count} photos");
    }

    #[tokio::test]
    async fn test_metrics_handler_counts_lookups() {
        let state = state();
        state.translator.t("no.such.key", Language::ENGLISH);
        let Json(report) = metrics(State(state)).await;
        assert_eq!(report.misses, 1);
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
    }
}

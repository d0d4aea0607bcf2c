//! SEO metadata emitter.
//!
//! Each call to [`SeoEmitter::emit`] moves the head through
//! Idle → Clearing → Writing → Idle: every element written by a previous emit
//! is removed, then the complete set for the current page is written. Calling
//! it repeatedly is safe; the last call wins and nothing accumulates.

use crate::i18n::{Language, PageLocaleContext, Translator};
use crate::seo::head::{DocumentHead, HeadElement};
use crate::seo::schema::{self, ArticleSchema, ProcedureSchema, SiteInfo};
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// `hreflang` value of the language-neutral alternate link.
pub const X_DEFAULT: &str = "x-default";

const TWITTER_CARD: &str = "summary_large_image";

/// What kind of page is being rendered; drives `og:type` and the schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PageKind {
    #[default]
    Website,
    Article {
        published: Option<NaiveDate>,
        modified: Option<NaiveDate>,
        author: Option<String>,
    },
    Service {
        procedure_type: Option<String>,
        body_location: Option<String>,
    },
}

/// Already-localized strings for the page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Page title without the site suffix
    pub title: String,
    pub description: Option<String>,
    /// Comma-separated keywords
    pub keywords: Option<String>,
    /// Absolute URL or site-relative path
    pub image: Option<String>,
    pub kind: PageKind,
    /// Explicit structured data; used verbatim when present
    pub schema: Option<Value>,
    pub noindex: bool,
}

impl PageContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Writes the document-level metadata for a page.
#[derive(Debug, Clone)]
pub struct SeoEmitter {
    site: SiteInfo,
    translator: Arc<Translator>,
}

impl SeoEmitter {
    pub fn new(site: SiteInfo, translator: Arc<Translator>) -> Self {
        Self { site, translator }
    }

    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Absolute URL of the page in `language`.
    pub fn url_for(&self, context: &PageLocaleContext, language: Language) -> String {
        format!("{}{}", self.site.base_url, context.path_for(language))
    }

    /// Clear previously written metadata and write the full set for `context`.
    pub fn emit<H: DocumentHead + ?Sized>(
        &self,
        head: &mut H,
        context: &PageLocaleContext,
        content: &PageContent,
    ) {
        let language = context.language;
        debug!("Emitting head for {} ({})", context.localized_path, language.code());

        head.clear_managed();

        let canonical_url = format!("{}{}", self.site.base_url, context.localized_path);
        let title = self.full_title(&content.title, language);
        let description = match content.description.as_deref() {
            Some(description) if !description.is_empty() => description.to_string(),
            _ => self.translator.t("seo.site.tagline", language),
        };
        let keywords = match content.keywords.as_deref() {
            Some(keywords) if !keywords.is_empty() => keywords.to_string(),
            _ => self.translator.t("seo.site.keywords", language),
        };
        let image = content
            .image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| self.site.absolute_url(image))
            .unwrap_or_else(|| self.site.default_image.clone());
        let robots = if content.noindex {
            "noindex, nofollow"
        } else {
            "index, follow"
        };
        let og_type = match content.kind {
            PageKind::Article { .. } => "article",
            _ => "website",
        };

        head.write(HeadElement::Title(title.clone()));
        head.write(HeadElement::Canonical(canonical_url.clone()));

        head.write(HeadElement::name("description", description.as_str()));
        head.write(HeadElement::name("keywords", keywords));
        head.write(HeadElement::name("robots", robots));
        head.write(HeadElement::property("og:title", title.as_str()));
        head.write(HeadElement::property("og:description", description.as_str()));
        head.write(HeadElement::property("og:url", canonical_url.as_str()));
        head.write(HeadElement::property("og:type", og_type));
        head.write(HeadElement::property("og:image", image.as_str()));
        head.write(HeadElement::property("og:site_name", self.site.name.as_str()));
        head.write(HeadElement::property("og:locale", language.og_locale()));
        head.write(HeadElement::name("twitter:card", TWITTER_CARD));
        head.write(HeadElement::name("twitter:title", title.as_str()));
        head.write(HeadElement::name("twitter:description", description.as_str()));
        head.write(HeadElement::name("twitter:image", image.as_str()));

        for alternate in Language::all() {
            head.write(HeadElement::Alternate {
                hreflang: alternate.code().to_string(),
                href: self.url_for(context, alternate),
            });
        }
        head.write(HeadElement::Alternate {
            hreflang: X_DEFAULT.to_string(),
            href: self.url_for(context, Language::default_language()),
        });

        let structured =
            self.structured_data(context, content, &canonical_url, &description, &image);
        head.write(HeadElement::StructuredData(structured));

        debug!("Head for {} written", context.localized_path);
    }

    /// Pick exactly one schema: explicit, then by page kind, then the
    /// organization. Variants missing required data (a title, or an article's
    /// publish date) degrade to the organization schema.
    pub fn structured_data(
        &self,
        context: &PageLocaleContext,
        content: &PageContent,
        canonical_url: &str,
        description: &str,
        image: &str,
    ) -> Value {
        let language = context.language;

        if let Some(explicit) = &content.schema {
            return explicit.clone();
        }

        if content.title.is_empty() && content.kind != PageKind::Website {
            warn!(
                "Page {} has no title, using organization schema",
                context.canonical_path
            );
            return schema::organization(&self.site, language);
        }

        match &content.kind {
            PageKind::Article {
                published: Some(published),
                modified,
                author,
            } => schema::article(
                &self.site,
                language,
                &ArticleSchema {
                    headline: content.title.clone(),
                    description: description.to_string(),
                    image: image.to_string(),
                    url: canonical_url.to_string(),
                    published: *published,
                    modified: *modified,
                    author: author.clone(),
                },
            ),
            PageKind::Article {
                published: None, ..
            } => {
                warn!(
                    "Article {} has no publish date, using organization schema",
                    context.canonical_path
                );
                schema::organization(&self.site, language)
            }
            PageKind::Service {
                procedure_type,
                body_location,
            } => schema::procedure(
                &self.site,
                language,
                &ProcedureSchema {
                    name: content.title.clone(),
                    description: description.to_string(),
                    url: canonical_url.to_string(),
                    image: image.to_string(),
                    procedure_type: procedure_type.clone(),
                    body_location: body_location.clone(),
                },
            ),
            PageKind::Website => schema::organization(&self.site, language),
        }
    }

    fn full_title(&self, page_title: &str, language: Language) -> String {
        if page_title.is_empty() {
            return self.site.name.clone();
        }
        self.translator.resolve(
            "seo.titleTemplate",
            language,
            &[("page", page_title), ("site", self.site.name.as_str())],
        )
    }
}

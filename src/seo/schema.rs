//! schema.org structured data builders.

use crate::content::FaqEntry;
use crate::i18n::Language;
use chrono::NaiveDate;
use serde_json::{json, Map, Value};

/// Business details shared by every schema variant.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub base_url: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub default_image: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl SiteInfo {
    /// Make `path_or_url` absolute against the base URL.
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
            path_or_url.to_string()
        } else if path_or_url.starts_with('/') {
            format!("{}{}", self.base_url, path_or_url)
        } else {
            format!("{}/{}", self.base_url, path_or_url)
        }
    }
}

/// Inputs for an `Article` schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSchema {
    pub headline: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub published: NaiveDate,
    pub modified: Option<NaiveDate>,
    pub author: Option<String>,
}

/// Inputs for a `MedicalProcedure` schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureSchema {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub procedure_type: Option<String>,
    pub body_location: Option<String>,
}

/// The clinic as a `MedicalClinic` organization.
pub fn organization(site: &SiteInfo, language: Language) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "MedicalClinic",
        "name": site.name,
        "url": site.base_url,
        "image": site.default_image,
        "inLanguage": language.code(),
    });
    let Some(obj) = schema.as_object_mut() else {
        return schema;
    };

    if let Some(logo) = &site.logo_url {
        obj.insert("logo".to_string(), json!(logo));
    }
    if let Some(phone) = &site.phone {
        obj.insert("telephone".to_string(), json!(phone));
    }
    if site.city.is_some() || site.country.is_some() {
        let mut address = Map::new();
        address.insert("@type".to_string(), json!("PostalAddress"));
        if let Some(city) = &site.city {
            address.insert("addressLocality".to_string(), json!(city));
        }
        if let Some(country) = &site.country {
            address.insert("addressCountry".to_string(), json!(country));
        }
        obj.insert("address".to_string(), Value::Object(address));
    }
    schema
}

fn publisher(site: &SiteInfo) -> Value {
    let mut publisher = json!({
        "@type": "Organization",
        "name": site.name,
        "url": site.base_url,
    });
    if let (Some(logo), Some(obj)) = (&site.logo_url, publisher.as_object_mut()) {
        obj.insert(
            "logo".to_string(),
            json!({"@type": "ImageObject", "url": logo}),
        );
    }
    publisher
}

pub fn article(site: &SiteInfo, language: Language, input: &ArticleSchema) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": input.headline,
        "description": input.description,
        "image": input.image,
        "url": input.url,
        "mainEntityOfPage": input.url,
        "datePublished": input.published.format("%Y-%m-%d").to_string(),
        "dateModified": input.modified.unwrap_or(input.published).format("%Y-%m-%d").to_string(),
        "inLanguage": language.code(),
        "publisher": publisher(site),
    });
    if let (Some(author), Some(obj)) = (&input.author, schema.as_object_mut()) {
        obj.insert(
            "author".to_string(),
            json!({"@type": "Person", "name": author}),
        );
    }
    schema
}

pub fn procedure(site: &SiteInfo, language: Language, input: &ProcedureSchema) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "MedicalProcedure",
        "name": input.name,
        "description": input.description,
        "url": input.url,
        "image": input.image,
        "inLanguage": language.code(),
        "provider": {
            "@type": "MedicalClinic",
            "name": site.name,
            "url": site.base_url,
        },
    });
    let Some(obj) = schema.as_object_mut() else {
        return schema;
    };
    if let Some(kind) = &input.procedure_type {
        obj.insert("procedureType".to_string(), json!(format!("https://schema.org/{}", kind)));
    }
    if let Some(location) = &input.body_location {
        obj.insert("bodyLocation".to_string(), json!(location));
    }
    schema
}

/// `FAQPage` for a list of entries in `language`.
pub fn faq_page(entries: &[FaqEntry], language: Language) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let (question, answer) = entry.localized(language);
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {"@type": "Answer", "text": answer},
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "inLanguage": language.code(),
        "mainEntity": questions,
    })
}

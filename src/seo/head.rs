//! Document head abstraction.
//!
//! The emitter never touches a rendering surface directly; it writes through a
//! [`DocumentHead`] handed to it by the caller. [`MemoryHead`] is the
//! in-process implementation used for server-side rendering and in tests.

use serde_json::Value;

/// Which attribute names a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttribute {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">` (Open Graph)
    Property,
}

impl MetaAttribute {
    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One element in the document head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadElement {
    Title(String),
    Meta {
        attribute: MetaAttribute,
        key: String,
        content: String,
    },
    Canonical(String),
    Alternate {
        hreflang: String,
        href: String,
    },
    StructuredData(Value),
    /// Markup owned by something other than the SEO emitter (charset,
    /// stylesheets, scripts). Never cleared.
    Unmanaged(String),
}

impl HeadElement {
    pub fn name(key: &str, content: impl Into<String>) -> Self {
        Self::Meta {
            attribute: MetaAttribute::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn property(key: &str, content: impl Into<String>) -> Self {
        Self::Meta {
            attribute: MetaAttribute::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }

    /// Whether the SEO emitter owns this element.
    pub fn is_managed(&self) -> bool {
        !matches!(self, Self::Unmanaged(_))
    }

    /// Render the element as HTML.
    pub fn to_html(&self) -> String {
        match self {
            Self::Title(title) => format!("<title>{}</title>", escape_html(title)),
            Self::Meta {
                attribute,
                key,
                content,
            } => format!(
                r#"<meta {}="{}" content="{}">"#,
                attribute.as_str(),
                escape_html(key),
                escape_html(content)
            ),
            Self::Canonical(href) => {
                format!(r#"<link rel="canonical" href="{}">"#, escape_html(href))
            }
            Self::Alternate { hreflang, href } => format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                escape_html(hreflang),
                escape_html(href)
            ),
            Self::StructuredData(value) => format!(
                r#"<script type="application/ld+json">{}</script>"#,
                value.to_string().replace("</", "<\\/")
            ),
            Self::Unmanaged(html) => html.clone(),
        }
    }
}

/// Write interface to the page's single set of head slots.
pub trait DocumentHead {
    /// Remove every element previously written by the emitter.
    fn clear_managed(&mut self);

    /// Append an element.
    fn write(&mut self, element: HeadElement);
}

/// In-memory document head.
#[derive(Debug, Clone, Default)]
pub struct MemoryHead {
    elements: Vec<HeadElement>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// A head pre-populated with markup the emitter must leave alone.
    pub fn with_unmanaged<I, S>(markup: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: markup
                .into_iter()
                .map(|html| HeadElement::Unmanaged(html.into()))
                .collect(),
        }
    }

    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }

    /// All canonical hrefs (a well-formed head has exactly one).
    pub fn canonicals(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                HeadElement::Canonical(href) => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Content of the first meta tag with `key`.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.elements.iter().find_map(|e| match e {
            HeadElement::Meta {
                key: k, content, ..
            } if k == key => Some(content.as_str()),
            _ => None,
        })
    }

    /// Meta tag keys in write order.
    pub fn meta_keys(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                HeadElement::Meta { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// (hreflang, href) pairs in write order.
    pub fn alternates(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                HeadElement::Alternate { hreflang, href } => {
                    Some((hreflang.as_str(), href.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn structured_data(&self) -> Vec<&Value> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                HeadElement::StructuredData(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    /// Render all elements, one per line.
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(HeadElement::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DocumentHead for MemoryHead {
    fn clear_managed(&mut self) {
        self.elements.retain(|e| !e.is_managed());
    }

    fn write(&mut self, element: HeadElement) {
        self.elements.push(element);
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Rendering Tests ====================

    #[test]
    fn test_meta_to_html_escapes() {
        let html = HeadElement::name("description", r#"Before & after "results""#).to_html();
        assert_eq!(
            html,
            r#"<meta name="description" content="Before &amp; after &quot;results&quot;">"#
        );
    }

    #[test]
    fn test_property_to_html() {
        let html = HeadElement::property("og:locale", "tr_TR").to_html();
        assert_eq!(html, r#"<meta property="og:locale" content="tr_TR">"#);
    }

    #[test]
    fn test_alternate_to_html() {
        let html = HeadElement::Alternate {
            hreflang: "x-default".to_string(),
            href: "https://clinic.example/en".to_string(),
        }
        .to_html();
        assert_eq!(
            html,
            r#"<link rel="alternate" hreflang="x-default" href="https://clinic.example/en">"#
        );
    }

    #[test]
    fn test_structured_data_cannot_close_script() {
        let html = HeadElement::StructuredData(json!({"name": "</script><b>"})).to_html();
        assert!(!html.contains("</script><b>"));
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_title_to_html() {
        assert_eq!(
            HeadElement::Title("A < B".to_string()).to_html(),
            "<title>A &lt; B</title>"
        );
    }

    // ==================== MemoryHead Tests ====================

    #[test]
    fn test_clear_managed_keeps_unmanaged() {
        let mut head = MemoryHead::with_unmanaged([r#"<meta charset="utf-8">"#]);
        head.write(HeadElement::Canonical("https://a".to_string()));
        head.write(HeadElement::name("robots", "index, follow"));

        head.clear_managed();
        assert_eq!(head.elements().len(), 1);
        assert_eq!(head.render(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_accessors() {
        let mut head = MemoryHead::new();
        head.write(HeadElement::Title("Home".to_string()));
        head.write(HeadElement::name("description", "Desc"));
        head.write(HeadElement::Alternate {
            hreflang: "tr".to_string(),
            href: "https://a/tr".to_string(),
        });

        assert_eq!(head.title(), Some("Home"));
        assert_eq!(head.meta("description"), Some("Desc"));
        assert_eq!(head.meta("keywords"), None);
        assert_eq!(head.meta_keys(), vec!["description"]);
        assert_eq!(head.alternates(), vec![("tr", "https://a/tr")]);
        assert!(head.canonicals().is_empty());
    }
}

//! `scraper`-backed document accessor.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::{AlternateLink, DocumentAccessor};
use crate::utils::{collapse_whitespace, parse_selector_unsafe};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "title";
const H1_SELECTOR_STR: &str = "h1";
const META_PROPERTY_SELECTOR_STR: &str = "meta[property]";
const META_NAME_SELECTOR_STR: &str = "meta[name]";
const ALTERNATE_LINK_SELECTOR_STR: &str = r#"link[rel="alternate"][hreflang]"#;
const LD_JSON_SELECTOR_STR: &str = r#"script[type="application/ld+json"]"#;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(H1_SELECTOR_STR, "H1_SELECTOR"));
static META_PROPERTY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_PROPERTY_SELECTOR_STR, "META_PROPERTY_SELECTOR")
});
static META_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_NAME_SELECTOR_STR, "META_NAME_SELECTOR"));
static ALTERNATE_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(ALTERNATE_LINK_SELECTOR_STR, "ALTERNATE_LINK_SELECTOR")
});
static LD_JSON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LD_JSON_SELECTOR_STR, "LD_JSON_SELECTOR"));

/// A parsed HTML document together with the URL it was loaded from.
pub struct HtmlDocument {
    document: Html,
    url: String,
}

impl HtmlDocument {
    /// Parses `html` as a full document located at `url`.
    pub fn parse(html: &str, url: impl Into<String>) -> Self {
        HtmlDocument {
            document: Html::parse_document(html),
            url: url.into(),
        }
    }

    fn first_meta_content(&self, selector: &Selector, attr: &str, key: &str) -> Option<String> {
        self.document
            .select(selector)
            .find(|element| element.value().attr(attr) == Some(key))
            .and_then(|element| element.value().attr("content"))
            .map(str::to_string)
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

impl DocumentAccessor for HtmlDocument {
    fn url(&self) -> &str {
        &self.url
    }

    fn hostname(&self) -> String {
        url::Url::parse(&self.url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn title(&self) -> String {
        self.document
            .select(&TITLE_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default()
    }

    fn root_lang(&self) -> Option<String> {
        self.document
            .root_element()
            .value()
            .attr("lang")
            .map(str::to_string)
    }

    fn meta_property(&self, property: &str) -> Option<String> {
        self.first_meta_content(&META_PROPERTY_SELECTOR, "property", property)
    }

    fn meta_name(&self, name: &str) -> Option<String> {
        self.first_meta_content(&META_NAME_SELECTOR, "name", name)
    }

    fn alternate_links(&self) -> Vec<AlternateLink> {
        self.document
            .select(&ALTERNATE_LINK_SELECTOR)
            .filter_map(|element| {
                let value = element.value();
                value.attr("hreflang").map(|hreflang| AlternateLink {
                    hreflang: hreflang.to_string(),
                    href: value.attr("href").map(str::to_string),
                })
            })
            .collect()
    }

    fn structured_data_blocks(&self) -> Vec<String> {
        self.document
            .select(&LD_JSON_SELECTOR)
            .map(|element| element.text().collect::<String>())
            .collect()
    }

    fn first_heading_text(&self) -> Option<String> {
        self.document.select(&H1_SELECTOR).next().map(element_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html lang="fr-FR">
            <head>
                <title>
                    Chaussures   de course
                </title>
                <meta property="og:image" content="https://cdn.example.com/og.png">
                <meta property="og:image" content="https://cdn.example.com/second.png">
                <meta name="description" content="Une description">
                <link rel="alternate" hreflang="fr" href="https://example.com/fr/">
                <link rel="alternate" hreflang="en">
                <link rel="stylesheet" href="/main.css">
                <script type="application/ld+json">{"@type": "Product"}</script>
            </head>
            <body><h1>  Nos <em>chaussures</em> </h1><h1>Second</h1></body>
        </html>
    "#;

    fn doc() -> HtmlDocument {
        HtmlDocument::parse(PAGE, "https://www.example.com/fr/chaussures?ref=nav")
    }

    #[test]
    fn test_url_and_hostname() {
        let doc = doc();
        assert_eq!(doc.url(), "https://www.example.com/fr/chaussures?ref=nav");
        assert_eq!(doc.hostname(), "www.example.com");
    }

    #[test]
    fn test_hostname_of_unparseable_url_is_empty() {
        let doc = HtmlDocument::parse("<html></html>", "not a url");
        assert_eq!(doc.hostname(), "");
    }

    #[test]
    fn test_title_is_whitespace_collapsed() {
        assert_eq!(doc().title(), "Chaussures de course");
    }

    #[test]
    fn test_root_lang() {
        assert_eq!(doc().root_lang().as_deref(), Some("fr-FR"));
        let bare = HtmlDocument::parse("<p>hi</p>", "https://example.com/");
        assert_eq!(bare.root_lang(), None);
    }

    #[test]
    fn test_meta_lookups_return_first_match() {
        let doc = doc();
        assert_eq!(
            doc.meta_property("og:image").as_deref(),
            Some("https://cdn.example.com/og.png")
        );
        assert_eq!(doc.meta_name("description").as_deref(), Some("Une description"));
        assert_eq!(doc.meta_name("twitter:image"), None);
    }

    #[test]
    fn test_alternate_links_keep_missing_href() {
        let links = doc().alternate_links();
        assert_eq!(
            links,
            vec![
                AlternateLink {
                    hreflang: "fr".to_string(),
                    href: Some("https://example.com/fr/".to_string()),
                },
                AlternateLink {
                    hreflang: "en".to_string(),
                    href: None,
                },
            ]
        );
    }

    #[test]
    fn test_structured_data_blocks_and_heading() {
        let doc = doc();
        assert_eq!(doc.structured_data_blocks(), vec![r#"{"@type": "Product"}"#]);
        assert_eq!(doc.first_heading_text().as_deref(), Some("Nos chaussures"));
    }
}

// Parse module tests.

use super::*;
use crate::document::HtmlDocument;
use crate::error_handling::{ProcessingStats, WarningType};

const URL: &str = "https://example.com/page";

fn doc(html: &str) -> HtmlDocument {
    HtmlDocument::parse(html, URL)
}

#[test]
fn test_extract_page_metadata_basic() {
    let html = r#"<html><head>
        <title>Running shoes for every distance</title>
        <meta name="description" content="Lightweight shoes">
        <meta property="og:image" content="https://cdn.example.com/og.png">
    </head><body><h1>Running shoes</h1></body></html>"#;
    let metadata = extract_page_metadata(&doc(html));
    assert_eq!(
        metadata,
        PageMetadata {
            og_image: Some("https://cdn.example.com/og.png".to_string()),
            title: "Running shoes for every distance".to_string(),
            description: "Lightweight shoes".to_string(),
            url: URL.to_string(),
            hostname: "example.com".to_string(),
            h1: "Running shoes".to_string(),
        }
    );
}

#[test]
fn test_extract_page_metadata_twitter_image_fallback() {
    let html = r#"<html><head>
        <meta name="twitter:image" content="https://cdn.example.com/card.png">
    </head></html>"#;
    let metadata = extract_page_metadata(&doc(html));
    assert_eq!(
        metadata.og_image.as_deref(),
        Some("https://cdn.example.com/card.png")
    );
}

#[test]
fn test_extract_page_metadata_empty_og_image_falls_back() {
    // An empty og:image does not count as present
    let html = r#"<html><head>
        <meta property="og:image" content="">
        <meta name="twitter:image" content="https://cdn.example.com/card.png">
    </head></html>"#;
    let metadata = extract_page_metadata(&doc(html));
    assert_eq!(
        metadata.og_image.as_deref(),
        Some("https://cdn.example.com/card.png")
    );
}

#[test]
fn test_extract_page_metadata_og_wins_over_twitter() {
    let html = r#"<html><head>
        <meta name="twitter:image" content="https://cdn.example.com/card.png">
        <meta property="og:image" content="https://cdn.example.com/og.png">
    </head></html>"#;
    let metadata = extract_page_metadata(&doc(html));
    assert_eq!(metadata.og_image.as_deref(), Some("https://cdn.example.com/og.png"));
}

#[test]
fn test_extract_page_metadata_missing_fields_degrade() {
    let metadata = extract_page_metadata(&doc("<html><body><p>Nothing</p></body></html>"));
    assert_eq!(metadata.og_image, None);
    assert_eq!(metadata.title, "");
    assert_eq!(metadata.description, "");
    assert_eq!(metadata.h1, "");
    assert_eq!(metadata.hostname, "example.com");
}

#[test]
fn test_collect_structured_data_in_document_order() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type": "Organization"}</script>
        <script type="application/ld+json">[{"@type": "WebPage"}, {"@type": "BreadcrumbList"}]</script>
        <script type="application/ld+json">{"@type": "FAQPage"}</script>
    </head></html>"#;
    let stats = ProcessingStats::new();
    let items = collect_structured_data(&doc(html), &stats);
    let types: Vec<_> = items.iter().flat_map(schema_types).collect();
    assert_eq!(types, vec!["Organization", "WebPage", "BreadcrumbList", "FAQPage"]);
    assert_eq!(stats.total_warnings(), 0);
}

#[test]
fn test_collect_structured_data_skips_malformed_block() {
    let html = r#"<html><head>
        <script type="application/ld+json">{"@type": "Product",</script>
        <script type="application/ld+json">{"@type": "Recipe"}</script>
        <script type="application/ld+json"></script>
    </head></html>"#;
    let stats = ProcessingStats::new();
    let items = collect_structured_data(&doc(html), &stats);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["@type"], "Recipe");
    assert_eq!(
        stats.get_warning_count(WarningType::MalformedStructuredData),
        2
    );
}

#[test]
fn test_collect_structured_data_ignores_other_scripts() {
    let html = r#"<html><head>
        <script>var x = {"@type": "Product"};</script>
        <script type="application/json">{"@type": "Product"}</script>
    </head></html>"#;
    let stats = ProcessingStats::new();
    assert!(collect_structured_data(&doc(html), &stats).is_empty());
}

#[test]
fn test_collect_structured_data_keeps_non_object_values() {
    let html = r#"<script type="application/ld+json">"just a string"</script>"#;
    let stats = ProcessingStats::new();
    let items = collect_structured_data(&doc(html), &stats);
    assert_eq!(items.len(), 1);
    assert!(schema_types(&items[0]).is_empty());
}

#[test]
fn test_schema_types_array() {
    let item = serde_json::json!({"@type": ["Product", 3, "Offer"]});
    assert_eq!(schema_types(&item), vec!["Product", "Offer"]);
}

#[test]
fn test_collect_hreflang_entries() {
    let html = r#"<html><head>
        <link rel="alternate" hreflang="en" href="https://example.com/en/">
        <link rel="alternate" hreflang="en" href="https://example.com/en-2/">
        <link rel="alternate" hreflang="x-default">
        <link rel="alternate" type="application/rss+xml" href="/feed">
        <link rel="canonical" hreflang="de" href="https://example.com/de/">
    </head></html>"#;
    let entries = collect_hreflang_entries(&doc(html));
    assert_eq!(
        entries,
        vec![
            HreflangEntry::new("en", "https://example.com/en/"),
            HreflangEntry::new("en", "https://example.com/en-2/"),
            HreflangEntry::new("x-default", ""),
        ]
    );
}

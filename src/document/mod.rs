//! Read-only access to the analyzed document.
//!
//! The analysis engine never touches markup directly: it asks a
//! [`DocumentAccessor`] for the handful of values it scores. [`HtmlDocument`]
//! answers those queries from an HTML string parsed with `scraper`; a browser
//! host would answer them from its live DOM instead.

mod html;

pub use html::HtmlDocument;

/// One `<link rel="alternate" hreflang="…">` declaration, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: Option<String>,
}

/// Queries the analysis engine runs against the current document.
pub trait DocumentAccessor {
    /// Full URL the document was loaded from.
    fn url(&self) -> &str;

    /// Host part of [`DocumentAccessor::url`], empty when it has none.
    fn hostname(&self) -> String;

    /// Document title with whitespace collapsed; empty when missing.
    fn title(&self) -> String;

    /// `lang` attribute of the root element.
    fn root_lang(&self) -> Option<String>;

    /// `content` of the first `<meta property="…">` with the given property.
    fn meta_property(&self, property: &str) -> Option<String>;

    /// `content` of the first `<meta name="…">` with the given name.
    fn meta_name(&self, name: &str) -> Option<String>;

    /// Alternate-language links in document order.
    fn alternate_links(&self) -> Vec<AlternateLink>;

    /// Raw text of every `application/ld+json` script, in document order.
    fn structured_data_blocks(&self) -> Vec<String>;

    /// Text of the first `<h1>`, whitespace collapsed.
    fn first_heading_text(&self) -> Option<String>;
}

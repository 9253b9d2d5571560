//! Page-level SEO metadata.

use serde::Serialize;

use crate::document::DocumentAccessor;

/// Snapshot of the page fields the score is computed from.
///
/// Built fresh on every pass. `og_image` is `None` when neither image
/// declaration has a value, which also hides the preview section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub og_image: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub hostname: String,
    pub h1: String,
}

/// Extracts [`PageMetadata`] from the document.
///
/// The preview image comes from `og:image`, then `twitter:image`; the first
/// non-empty value wins.
pub fn extract_page_metadata(document: &dyn DocumentAccessor) -> PageMetadata {
    let og_image = document
        .meta_property("og:image")
        .filter(|content| !content.is_empty())
        .or_else(|| {
            document
                .meta_name("twitter:image")
                .filter(|content| !content.is_empty())
        });

    let metadata = PageMetadata {
        og_image,
        title: document.title(),
        description: document.meta_name("description").unwrap_or_default(),
        url: document.url().to_string(),
        hostname: document.hostname(),
        h1: document.first_heading_text().unwrap_or_default(),
    };
    log::debug!(
        "Extracted metadata for {}: title {} chars, description {} chars, image: {}",
        metadata.url,
        metadata.title.chars().count(),
        metadata.description.chars().count(),
        metadata.og_image.is_some()
    );
    metadata
}

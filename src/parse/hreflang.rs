//! Hreflang declaration collection.

use serde::Serialize;

use crate::document::DocumentAccessor;

/// One alternate-language declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangEntry {
    pub lang: String,
    pub href: String,
}

impl HreflangEntry {
    pub fn new(lang: impl Into<String>, href: impl Into<String>) -> Self {
        HreflangEntry {
            lang: lang.into(),
            href: href.into(),
        }
    }
}

/// Returns one entry per alternate-language link, in document order.
///
/// Entries sharing a language are all kept so the analyzer can report them.
pub fn collect_hreflang_entries(document: &dyn DocumentAccessor) -> Vec<HreflangEntry> {
    document
        .alternate_links()
        .into_iter()
        .map(|link| HreflangEntry {
            lang: link.hreflang,
            href: link.href.unwrap_or_default(),
        })
        .collect()
}

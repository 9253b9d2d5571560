//! The analysis engine.
//!
//! One pass reads the document through the [`parse`](crate::parse) collectors,
//! validates the hreflang declarations and folds everything into a 0–100
//! score with human-readable suggestions.

mod hreflang;
mod score;

pub use hreflang::{analyze_hreflang, HreflangAnalysis, HreflangStatus};
pub use score::{compute_score, ScoreGrade, ScoreResult};

use serde::Serialize;

use crate::document::DocumentAccessor;
use crate::error_handling::ProcessingStats;
use crate::parse::{
    collect_hreflang_entries, collect_structured_data, extract_page_metadata, PageMetadata,
    StructuredDataItem,
};

/// Everything one analysis pass produced. Derived, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct PageAnalysis {
    pub metadata: PageMetadata,
    pub structured_data: Vec<StructuredDataItem>,
    pub hreflang: HreflangAnalysis,
    pub score: ScoreResult,
}

/// Runs a full analysis pass over the document.
pub fn analyze_document(document: &dyn DocumentAccessor, stats: &ProcessingStats) -> PageAnalysis {
    let metadata = extract_page_metadata(document);
    let structured_data = collect_structured_data(document, stats);
    let hreflang = analyze_hreflang(
        collect_hreflang_entries(document),
        &metadata.url,
        document.root_lang().as_deref(),
    );
    let score = compute_score(&metadata, structured_data.len(), &hreflang);

    log::info!(
        "Analyzed {}: score {}/100, {} structured data item(s), hreflang {}",
        metadata.url,
        score.score,
        structured_data.len(),
        hreflang.status
    );

    PageAnalysis {
        metadata,
        structured_data,
        hreflang,
        score,
    }
}

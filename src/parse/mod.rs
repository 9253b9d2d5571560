//! Page data extraction.
//!
//! This module reads the raw inputs of an analysis pass from a
//! [`DocumentAccessor`](crate::document::DocumentAccessor):
//! - Page metadata (title, description, preview image, first heading)
//! - Structured data (JSON-LD blocks, arrays flattened)
//! - Hreflang declarations (alternate-language links)
//!
//! Nothing here fails: missing fields degrade to empty values and malformed
//! JSON-LD blocks are skipped.

mod hreflang;
mod metadata;
mod structured;

// Re-export public API
pub use hreflang::{collect_hreflang_entries, HreflangEntry};
pub use metadata::{extract_page_metadata, PageMetadata};
pub use structured::{collect_structured_data, schema_types, StructuredDataItem};

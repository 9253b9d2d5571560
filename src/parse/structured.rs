//! Structured data (JSON-LD) collection.

use serde_json::Value;

use crate::document::DocumentAccessor;
use crate::error_handling::{ProcessingStats, WarningType};

/// One linked-data record. Usually an object with an `@type` key, but any
/// JSON value a block holds is kept.
pub type StructuredDataItem = Value;

/// Collects every JSON-LD record in document order.
///
/// Each `<script type="application/ld+json">` block is parsed on its own; a
/// block that is not valid JSON is skipped and counted, the rest are still
/// collected. A top-level array contributes each of its elements.
pub fn collect_structured_data(
    document: &dyn DocumentAccessor,
    stats: &ProcessingStats,
) -> Vec<StructuredDataItem> {
    let mut items = Vec::new();

    for (index, block) in document.structured_data_blocks().iter().enumerate() {
        match serde_json::from_str::<Value>(block.trim()) {
            Ok(Value::Array(elements)) => items.extend(elements),
            Ok(value) => items.push(value),
            Err(e) => {
                log::debug!("Skipping malformed JSON-LD block #{}: {}", index, e);
                stats.increment_warning(WarningType::MalformedStructuredData);
            }
        }
    }

    items
}

/// The `@type` values of an item: a single string, or every string of an array.
pub fn schema_types(item: &StructuredDataItem) -> Vec<&str> {
    match item.get("@type") {
        Some(Value::String(type_name)) => vec![type_name.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

//! Content region of the overlay, rebuilt from scratch on every pass.

use serde_json::Value;

use crate::analysis::{HreflangStatus, PageAnalysis};
use crate::config::{
    HIGH_PRIORITY_SCHEMA_TYPES, SERP_DESCRIPTION_MAX_CHARS, SERP_FAQ_ITEMS, SERP_TITLE_MAX_CHARS,
};
use crate::parse::{schema_types, HreflangEntry, PageMetadata, StructuredDataItem};
use crate::utils::truncate_chars;

/// Preview image with its click-to-enlarge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: String,
    pub lightbox_open: bool,
}

/// Simulated search result snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpPreview {
    pub breadcrumb: String,
    pub title: String,
    pub description: String,
    /// Questions surfaced as an FAQ rich snippet.
    pub faq: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Rendered by Google as a rich result.
    High,
    Medium,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Visible in Google",
            Priority::Medium => "Page info",
        }
    }
}

/// One structured data item, collapsed until toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDataCard {
    pub type_label: String,
    pub priority: Priority,
    pub raw_json: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HreflangReport {
    pub title: String,
    pub entries: Vec<HreflangEntry>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    ImagePreview(ImagePreview),
    Serp(SerpPreview),
    StructuredData(Vec<StructuredDataCard>),
    Hreflang(HreflangReport),
    Suggestions(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegion {
    sections: Vec<Section>,
}

impl ContentRegion {
    /// Lays out the sections for one analysis pass.
    ///
    /// The image preview only appears when the page declares an image and the
    /// suggestions only when there is at least one.
    pub fn build(analysis: &PageAnalysis) -> Self {
        let mut sections = Vec::with_capacity(5);

        if let Some(src) = &analysis.metadata.og_image {
            sections.push(Section::ImagePreview(ImagePreview {
                src: src.clone(),
                lightbox_open: false,
            }));
        }
        sections.push(Section::Serp(serp_preview(
            &analysis.metadata,
            &analysis.structured_data,
        )));
        sections.push(Section::StructuredData(
            analysis.structured_data.iter().map(structured_card).collect(),
        ));
        sections.push(Section::Hreflang(HreflangReport {
            title: hreflang_title(analysis.hreflang.entries.len(), analysis.hreflang.status),
            entries: analysis.hreflang.entries.clone(),
            errors: analysis.hreflang.errors.clone(),
            warnings: analysis.hreflang.warnings.clone(),
        }));
        if !analysis.score.suggestions.is_empty() {
            sections.push(Section::Suggestions(analysis.score.suggestions.clone()));
        }

        ContentRegion { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn image_preview(&self) -> Option<&ImagePreview> {
        self.sections.iter().find_map(|section| match section {
            Section::ImagePreview(preview) => Some(preview),
            _ => None,
        })
    }

    pub fn image_preview_mut(&mut self) -> Option<&mut ImagePreview> {
        self.sections.iter_mut().find_map(|section| match section {
            Section::ImagePreview(preview) => Some(preview),
            _ => None,
        })
    }

    pub fn serp(&self) -> Option<&SerpPreview> {
        self.sections.iter().find_map(|section| match section {
            Section::Serp(serp) => Some(serp),
            _ => None,
        })
    }

    pub fn structured_cards(&self) -> &[StructuredDataCard] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::StructuredData(cards) => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn structured_card_mut(&mut self, index: usize) -> Option<&mut StructuredDataCard> {
        self.sections
            .iter_mut()
            .find_map(|section| match section {
                Section::StructuredData(cards) => Some(cards),
                _ => None,
            })
            .and_then(|cards| cards.get_mut(index))
    }

    pub fn hreflang(&self) -> Option<&HreflangReport> {
        self.sections.iter().find_map(|section| match section {
            Section::Hreflang(report) => Some(report),
            _ => None,
        })
    }

    pub fn suggestions(&self) -> &[String] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Suggestions(items) => Some(items.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

fn has_type(item: &StructuredDataItem, type_name: &str) -> bool {
    schema_types(item).contains(&type_name)
}

fn serp_preview(metadata: &PageMetadata, structured_data: &[StructuredDataItem]) -> SerpPreview {
    let breadcrumb = if structured_data
        .iter()
        .any(|item| has_type(item, "BreadcrumbList"))
    {
        format!("{} › ...", metadata.hostname)
    } else {
        metadata.hostname.clone()
    };

    let faq = structured_data
        .iter()
        .find(|item| has_type(item, "FAQPage"))
        .map(faq_questions)
        .unwrap_or_default();

    SerpPreview {
        breadcrumb,
        title: truncate_chars(&metadata.title, SERP_TITLE_MAX_CHARS),
        description: truncate_chars(&metadata.description, SERP_DESCRIPTION_MAX_CHARS),
        faq,
    }
}

/// First questions of an FAQPage; `mainEntity` may be a list or a single question.
fn faq_questions(faq_page: &StructuredDataItem) -> Vec<String> {
    let questions: Vec<&Value> = match faq_page.get("mainEntity") {
        Some(Value::Array(entities)) => entities.iter().collect(),
        Some(entity @ Value::Object(_)) => vec![entity],
        _ => Vec::new(),
    };
    questions
        .into_iter()
        .take(SERP_FAQ_ITEMS)
        .filter_map(|question| {
            question
                .get("name")
                .or_else(|| question.get("question"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .collect()
}

fn structured_card(item: &StructuredDataItem) -> StructuredDataCard {
    let types = schema_types(item);
    let priority = if types
        .iter()
        .any(|t| HIGH_PRIORITY_SCHEMA_TYPES.contains(t))
    {
        Priority::High
    } else {
        Priority::Medium
    };
    let type_label = if types.is_empty() {
        "Unknown type".to_string()
    } else {
        types.join(", ")
    };

    StructuredDataCard {
        type_label,
        priority,
        raw_json: serde_json::to_string_pretty(item).unwrap_or_else(|_| item.to_string()),
        expanded: false,
    }
}

fn hreflang_title(entry_count: usize, status: HreflangStatus) -> String {
    if entry_count == 0 {
        return "Hreflang".to_string();
    }
    let icon = match status {
        HreflangStatus::Error => "🔴",
        HreflangStatus::Warning => "🟡",
        HreflangStatus::Ok | HreflangStatus::None => "🟢",
    };
    format!(
        "Hreflang ({} language{}) {}",
        entry_count,
        if entry_count > 1 { "s" } else { "" },
        icon
    )
}

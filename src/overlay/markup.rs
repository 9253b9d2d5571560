//! HTML serialization of the overlay.

use std::fmt::Write;

use super::{
    ContentRegion, HreflangReport, ImagePreview, Overlay, Priority, Section, SerpPreview,
    StructuredDataCard,
};
use crate::utils::escape_html;

impl Overlay {
    /// Serializes the overlay to the markup a host mounts at the end of the body.
    ///
    /// All page-derived text is escaped. Writing into a `String` cannot fail, so
    /// the `fmt::Result`s are discarded.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);

        let _ = write!(
            out,
            r#"<div id="{}" class="og-viewer-container" style="position: fixed; top: 10px; right: 10px; z-index: 2147483647;{}">"#,
            self.id,
            self.transform()
                .map(|t| format!(" transform: {};", t))
                .unwrap_or_default()
        );

        let _ = write!(
            out,
            r#"<div class="og-viewer-panel" style="display: {};">"#,
            if self.is_panel_visible() { "block" } else { "none" }
        );
        write_header(&mut out, self);
        if let Some(content) = &self.content {
            write_content(&mut out, content);
        }
        out.push_str("</div>");

        let _ = write!(
            out,
            r#"<div class="og-viewer-minimized" title="Show" style="display: {};"><span class="og-viewer-minimized-score" style="color: {};">{}</span></div>"#,
            if self.is_minimized_visible() { "flex" } else { "none" },
            self.minimized_score.color,
            self.minimized_score.value
        );

        if let Some(preview) = self.content.as_ref().and_then(|c| c.image_preview()) {
            write_lightbox(&mut out, preview);
        }

        out.push_str("</div>");
        out
    }
}

fn write_header(out: &mut String, overlay: &Overlay) {
    let header = overlay.header();
    let _ = write!(
        out,
        r#"<div class="og-viewer-header"><span class="og-viewer-score-pill" style="background: {};">{}</span><span class="og-viewer-header-title">{}</span>"#,
        header.score.color,
        header.score.value,
        escape_html(header.title)
    );
    let _ = write!(
        out,
        r#"<button class="og-toggle-btn" title="{}">–</button><button class="og-pin-btn{}" title="{}">📌</button><button class="og-viewer-close-btn" title="Close">×</button></div>"#,
        overlay.toggle_title(),
        if header.pin_active { " active" } else { "" },
        header.pin_title()
    );
}

fn write_content(out: &mut String, content: &ContentRegion) {
    out.push_str(r#"<div class="og-viewer-content">"#);
    for section in content.sections() {
        match section {
            Section::ImagePreview(preview) => write_image(out, preview),
            Section::Serp(serp) => write_serp(out, serp),
            Section::StructuredData(cards) => write_structured_data(out, cards),
            Section::Hreflang(report) => write_hreflang(out, report),
            Section::Suggestions(items) => write_suggestions(out, items),
        }
    }
    out.push_str("</div>");
}

fn open_section(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r#"<div class="og-viewer-section"><div class="og-viewer-title">{}</div>"#,
        escape_html(title)
    );
}

fn write_image(out: &mut String, preview: &ImagePreview) {
    open_section(out, "Image preview");
    let _ = write!(
        out,
        r#"<img class="og-viewer-image" src="{}" alt="Preview image">"#,
        escape_html(&preview.src)
    );
    out.push_str("</div>");
}

fn write_serp(out: &mut String, serp: &SerpPreview) {
    open_section(out, "Google preview");
    let _ = write!(
        out,
        r#"<div class="serp-preview"><div class="serp-breadcrumb">{}</div><div class="serp-title">{}</div><div class="serp-desc">{}</div>"#,
        escape_html(&serp.breadcrumb),
        escape_html(&serp.title),
        escape_html(&serp.description)
    );
    if !serp.faq.is_empty() {
        out.push_str(r#"<div class="serp-rich-snippet">"#);
        for question in &serp.faq {
            let _ = write!(
                out,
                r#"<div class="serp-faq-item">{}</div>"#,
                escape_html(question)
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div>");
}

fn write_structured_data(out: &mut String, cards: &[StructuredDataCard]) {
    open_section(out, &format!("Structured data ({})", cards.len()));
    for (index, card) in cards.iter().enumerate() {
        let badge_class = match card.priority {
            Priority::High => "sd-priority-high",
            Priority::Medium => "sd-priority-med",
        };
        let _ = write!(
            out,
            r#"<div class="sd-item" data-index="{}"><div class="sd-header"><span class="sd-type">{}</span><span class="sd-priority-badge {}">{}</span></div><pre class="sd-json" style="display: {};">{}</pre></div>"#,
            index,
            escape_html(&card.type_label),
            badge_class,
            card.priority.label(),
            if card.expanded { "block" } else { "none" },
            escape_html(&card.raw_json)
        );
    }
    out.push_str("</div>");
}

fn write_hreflang(out: &mut String, report: &HreflangReport) {
    open_section(out, &report.title);
    if report.entries.is_empty() {
        out.push_str(r#"<div class="og-hreflang-empty">No hreflang tags detected.</div>"#);
    } else {
        out.push_str(r#"<ul class="og-hreflang-list">"#);
        for entry in &report.entries {
            let _ = write!(
                out,
                r#"<li class="og-hreflang-entry"><span class="og-hreflang-lang">{}</span> <span class="og-hreflang-href">{}</span></li>"#,
                escape_html(&entry.lang),
                if entry.href.is_empty() {
                    "—".to_string()
                } else {
                    escape_html(&entry.href)
                }
            );
        }
        out.push_str("</ul>");
    }
    for error in &report.errors {
        let _ = write!(
            out,
            r#"<div class="og-hreflang-error">{}</div>"#,
            escape_html(error)
        );
    }
    for warning in &report.warnings {
        let _ = write!(
            out,
            r#"<div class="og-hreflang-warning">{}</div>"#,
            escape_html(warning)
        );
    }
    out.push_str("</div>");
}

fn write_suggestions(out: &mut String, items: &[String]) {
    open_section(out, "Suggestions");
    for item in items {
        let _ = write!(
            out,
            r#"<div class="seo-suggestion">{}</div>"#,
            escape_html(item)
        );
    }
    out.push_str("</div>");
}

fn write_lightbox(out: &mut String, preview: &ImagePreview) {
    let _ = write!(
        out,
        r#"<div class="og-viewer-lightbox" style="display: {};"><img src="{}" alt="Preview image"></div>"#,
        if preview.lightbox_open { "flex" } else { "none" },
        escape_html(&preview.src)
    );
}

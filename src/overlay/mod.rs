//! The overlay surface.
//!
//! An [`Overlay`] is the in-memory form of the floating panel: a root with a
//! stable [`OverlayId`], a header (score pill, title, toggle/pin/close
//! buttons), a content region rebuilt on every pass, and a minimized indicator.
//! [`Overlay::to_html`] serializes it to markup for a host to mount.

mod content;
mod markup;

pub use content::{
    ContentRegion, HreflangReport, ImagePreview, Priority, Section, SerpPreview,
    StructuredDataCard,
};

use std::sync::atomic::{AtomicU64, Ordering};

use crate::analysis::{PageAnalysis, ScoreResult};
use crate::config::OVERLAY_TITLE;
use crate::state::UiState;

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an overlay node. Two passes that reuse the node report the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(u64);

impl OverlayId {
    fn next() -> Self {
        OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "og-viewer-{}", self.0)
    }
}

/// Score value and the colour of its grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBadge {
    pub value: u32,
    pub color: &'static str,
}

impl From<&ScoreResult> for ScoreBadge {
    fn from(result: &ScoreResult) -> Self {
        ScoreBadge {
            value: result.score,
            color: result.grade().color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub score: ScoreBadge,
    pub title: &'static str,
    pub pin_active: bool,
}

impl Header {
    pub fn pin_title(&self) -> &'static str {
        if self.pin_active {
            "Unpin"
        } else {
            "Pin"
        }
    }
}

/// Overlay display mode derived from panel and indicator visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Expanded,
    Minimized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    id: OverlayId,
    header: Header,
    content: Option<ContentRegion>,
    minimized_score: ScoreBadge,
    hidden: bool,
    position: (f64, f64),
}

impl Overlay {
    /// Builds a new overlay for `analysis`, applying the loaded display state.
    pub fn build(analysis: &PageAnalysis, ui: &UiState) -> Self {
        let badge = ScoreBadge::from(&analysis.score);
        Overlay {
            id: OverlayId::next(),
            header: Header {
                score: badge,
                title: OVERLAY_TITLE,
                pin_active: ui.is_pinned,
            },
            content: Some(ContentRegion::build(analysis)),
            minimized_score: badge,
            hidden: ui.is_hidden,
            position: (ui.x_offset, ui.y_offset),
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn content(&self) -> Option<&ContentRegion> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut ContentRegion> {
        self.content.as_mut()
    }

    /// Detaches the content region, as a host page script removing the node would.
    pub fn remove_content_region(&mut self) -> Option<ContentRegion> {
        self.content.take()
    }

    pub fn minimized_score(&self) -> ScoreBadge {
        self.minimized_score
    }

    pub fn mode(&self) -> OverlayMode {
        if self.hidden {
            OverlayMode::Minimized
        } else {
            OverlayMode::Expanded
        }
    }

    pub fn is_panel_visible(&self) -> bool {
        !self.hidden
    }

    pub fn is_minimized_visible(&self) -> bool {
        self.hidden
    }

    /// Tooltip of the minimize/show toggle button.
    pub fn toggle_title(&self) -> &'static str {
        if self.hidden {
            "Show"
        } else {
            "Minimize"
        }
    }

    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// CSS transform for the current offset, `None` at the origin.
    pub fn transform(&self) -> Option<String> {
        let (x, y) = self.position;
        if x != 0.0 || y != 0.0 {
            Some(format!("translate({}px, {}px)", x, y))
        } else {
            None
        }
    }

    /// Replaces the content region. Returns `false` without touching anything
    /// when the region is gone.
    pub(crate) fn replace_content(&mut self, content: ContentRegion) -> bool {
        match self.content.as_mut() {
            Some(region) => {
                *region = content;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_score(&mut self, score: &ScoreResult) {
        let badge = ScoreBadge::from(score);
        self.header.score = badge;
        self.minimized_score = badge;
    }

    pub(crate) fn apply_visibility(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub(crate) fn set_pin_active(&mut self, active: bool) {
        self.header.pin_active = active;
    }

    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }
}

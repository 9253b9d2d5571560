//! Pure reconciliation of an analysis pass against the current overlay.

use crate::analysis::PageAnalysis;
use crate::overlay::{ContentRegion, Overlay};
use crate::state::UiState;

/// What a render pass did to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Created,
    Updated,
    /// The existing overlay lost its content region; nothing was changed.
    Aborted,
}

#[derive(Debug, Clone)]
pub struct Reconciled {
    pub overlay: Overlay,
    pub outcome: RenderOutcome,
}

/// Brings `current` in line with `analysis`.
///
/// An existing overlay keeps its identity, position and pin flag. Only its
/// content region, score indicators and visibility change. Without an
/// existing overlay a new one is built from `ui`.
pub fn reconcile(current: Option<Overlay>, analysis: &PageAnalysis, ui: &UiState) -> Reconciled {
    let Some(mut overlay) = current else {
        return Reconciled {
            overlay: Overlay::build(analysis, ui),
            outcome: RenderOutcome::Created,
        };
    };

    if !overlay.replace_content(ContentRegion::build(analysis)) {
        return Reconciled {
            overlay,
            outcome: RenderOutcome::Aborted,
        };
    }
    overlay.set_score(&analysis.score);
    overlay.apply_visibility(ui.is_hidden);

    Reconciled {
        overlay,
        outcome: RenderOutcome::Updated,
    }
}

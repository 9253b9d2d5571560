use std::sync::Arc;

use super::drag::{DragSession, MouseButton, OverlayButton, PointerTarget};
use super::reconcile::{reconcile, Reconciled, RenderOutcome};
use crate::analysis::PageAnalysis;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::overlay::{Overlay, OverlayMode};
use crate::state::{UiState, UiStateStore};

/// Lifecycle state of the overlay in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Absent,
    Expanded,
    Minimized,
}

/// Owns the overlay and the display state, and applies both analysis passes
/// and user interaction to them.
///
/// Every change to [`UiState`] is queued for persistence immediately.
pub struct ReconciliationRenderer {
    ui: UiState,
    store: UiStateStore,
    overlay: Option<Overlay>,
    drag: Option<DragSession>,
    stats: Arc<ProcessingStats>,
}

impl ReconciliationRenderer {
    /// Loads the persisted display state and returns a renderer with no overlay yet.
    pub async fn bootstrap(store: UiStateStore, stats: Arc<ProcessingStats>) -> Self {
        let ui = store.load().await;
        Self::with_state(store, stats, ui)
    }

    pub fn with_state(store: UiStateStore, stats: Arc<ProcessingStats>, ui: UiState) -> Self {
        ReconciliationRenderer {
            ui,
            store,
            overlay: None,
            drag: None,
            stats,
        }
    }

    /// Runs one render pass for `analysis`.
    pub fn render(&mut self, analysis: &PageAnalysis) -> RenderOutcome {
        let Reconciled { overlay, outcome } = reconcile(self.overlay.take(), analysis, &self.ui);
        match outcome {
            RenderOutcome::Created => {
                log::info!("Created overlay {} for {}", overlay.id(), analysis.metadata.url);
                self.stats.increment_info(InfoType::OverlayCreated);
            }
            RenderOutcome::Updated => {
                log::debug!("Updated overlay {} for {}", overlay.id(), analysis.metadata.url);
                self.stats.increment_info(InfoType::OverlayUpdated);
            }
            RenderOutcome::Aborted => {
                log::warn!(
                    "Overlay {} has no content region, skipping update for {}",
                    overlay.id(),
                    analysis.metadata.url
                );
                self.stats.increment_error(ErrorType::RenderAborted);
            }
        }
        self.overlay = Some(overlay);
        outcome
    }

    pub fn state(&self) -> OverlayState {
        match self.overlay.as_ref().map(Overlay::mode) {
            None => OverlayState::Absent,
            Some(OverlayMode::Expanded) => OverlayState::Expanded,
            Some(OverlayMode::Minimized) => OverlayState::Minimized,
        }
    }

    pub fn ui_state(&self) -> UiState {
        self.ui
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut Overlay> {
        self.overlay.as_mut()
    }

    fn set_hidden(&mut self, hidden: bool) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        self.ui.is_hidden = hidden;
        overlay.apply_visibility(hidden);
        self.store.persist(self.ui);
    }

    /// Toggle button: switches between expanded and minimized.
    pub fn toggle_minimized(&mut self) {
        self.set_hidden(!self.ui.is_hidden);
    }

    /// Click on the minimized indicator.
    pub fn expand(&mut self) {
        self.set_hidden(false);
    }

    pub fn toggle_pin(&mut self) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        self.ui.is_pinned = !self.ui.is_pinned;
        overlay.set_pin_active(self.ui.is_pinned);
        self.store.persist(self.ui);
    }

    /// Removes the overlay. Display state is kept for the next pass.
    pub fn close(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            log::info!("Closed overlay {}", overlay.id());
            self.stats.increment_info(InfoType::OverlayClosed);
        }
        self.drag = None;
    }

    /// Routes a click to the action of its target.
    pub fn click(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Button(OverlayButton::Toggle) => self.toggle_minimized(),
            PointerTarget::Button(OverlayButton::Pin) => self.toggle_pin(),
            PointerTarget::Button(OverlayButton::Close) => self.close(),
            PointerTarget::MinimizedIndicator => self.expand(),
            PointerTarget::Header => {}
        }
    }

    pub fn pointer_down(&mut self, target: PointerTarget, x: f64, y: f64, button: MouseButton) {
        if self.overlay.is_none() {
            return;
        }
        self.drag = DragSession::start(
            target,
            button,
            (x, y),
            (self.ui.x_offset, self.ui.y_offset),
        );
    }

    /// Moves the overlay while a drag is active. Each move is persisted.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let (Some(drag), Some(overlay)) = (self.drag, self.overlay.as_mut()) else {
            return;
        };
        let (x_offset, y_offset) = drag.offset_at(x, y);
        self.ui.x_offset = x_offset;
        self.ui.y_offset = y_offset;
        overlay.move_to(x_offset, y_offset);
        self.store.persist(self.ui);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Expands or collapses the raw JSON of a structured data card.
    /// Returns `false` when there is no such card.
    pub fn toggle_structured_item(&mut self, index: usize) -> bool {
        match self
            .overlay
            .as_mut()
            .and_then(Overlay::content_mut)
            .and_then(|content| content.structured_card_mut(index))
        {
            Some(card) => {
                card.expanded = !card.expanded;
                true
            }
            None => false,
        }
    }

    fn set_lightbox(&mut self, open: bool) -> bool {
        match self
            .overlay
            .as_mut()
            .and_then(Overlay::content_mut)
            .and_then(|content| content.image_preview_mut())
        {
            Some(preview) => {
                preview.lightbox_open = open;
                true
            }
            None => false,
        }
    }

    /// Click on the preview image. Returns `false` when the page has no image.
    pub fn open_lightbox(&mut self) -> bool {
        self.set_lightbox(true)
    }

    /// Click on the lightbox.
    pub fn close_lightbox(&mut self) -> bool {
        self.set_lightbox(false)
    }
}

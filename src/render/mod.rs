//! Rendering of analysis passes onto the overlay.
//!
//! [`reconcile`] decides what one pass does to the overlay, without side
//! effects. [`ReconciliationRenderer`] owns the overlay and the [`UiState`]
//! across passes, counts outcomes and routes user interaction.
//!
//! [`UiState`]: crate::state::UiState

mod drag;
mod reconcile;
mod renderer;

pub use drag::{MouseButton, OverlayButton, PointerTarget};
pub use reconcile::{reconcile, Reconciled, RenderOutcome};
pub use renderer::{OverlayState, ReconciliationRenderer};

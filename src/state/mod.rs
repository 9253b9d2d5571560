//! Persisted overlay display state.
//!
//! [`UiState`] is the only value that outlives an analysis pass. It is read
//! once before the first render through [`UiStateStore`] and written back on
//! every user interaction. Storage is best-effort: failures are logged and
//! counted, never surfaced to the overlay.

mod backend;
mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use store::UiStateStore;

use serde::{Deserialize, Serialize};

/// User-adjusted display state of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiState {
    pub is_pinned: bool,
    pub is_hidden: bool,
    pub x_offset: f64,
    pub y_offset: f64,
}

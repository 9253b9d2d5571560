//! UI state persistence through the file-backed store.

use std::sync::Arc;

use metascope::error_handling::{ErrorType, ProcessingStats};
use metascope::state::{FileStore, UiState, UiStateStore};
use tempfile::TempDir;

fn store_at(dir: &TempDir) -> (UiStateStore, Arc<ProcessingStats>) {
    let stats = Arc::new(ProcessingStats::new());
    let backend = Arc::new(FileStore::new(dir.path().join("state.json")));
    (UiStateStore::new(backend, Arc::clone(&stats)), stats)
}

#[tokio::test]
async fn test_state_survives_a_new_store() {
    let dir = TempDir::new().unwrap();
    let state = UiState {
        is_pinned: true,
        is_hidden: false,
        x_offset: -250.5,
        y_offset: 80.0,
    };

    let (first, _) = store_at(&dir);
    first.persist(state);
    first.flush().await;
    drop(first);

    let (second, stats) = store_at(&dir);
    assert_eq!(second.load().await, state);
    assert_eq!(stats.total_errors(), 0);

    let raw = std::fs::read_to_string(dir.path().join("state.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["og-viewer-state"]["isPinned"], true);
    assert_eq!(json["og-viewer-state"]["xOffset"], -250.5);
}

#[tokio::test]
async fn test_partial_state_fills_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("state.json"),
        r#"{"og-viewer-state": {"isHidden": true}, "other": 1}"#,
    )
    .unwrap();

    let (store, _) = store_at(&dir);
    assert_eq!(
        store.load().await,
        UiState {
            is_hidden: true,
            ..UiState::default()
        }
    );

    // Writing keeps unrelated keys
    store.save(UiState::default()).await;
    let raw = std::fs::read_to_string(dir.path().join("state.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["other"], 1);
    assert_eq!(json["og-viewer-state"]["isHidden"], false);
}

#[tokio::test]
async fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("state.json"), "not json").unwrap();

    let (store, stats) = store_at(&dir);
    assert_eq!(store.load().await, UiState::default());
    assert_eq!(stats.get_error_count(ErrorType::StateLoadError), 1);
}

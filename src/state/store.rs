//! Best-effort loading and saving of [`UiState`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use super::backend::KeyValueStore;
use super::UiState;
use crate::config::STORAGE_KEY;
use crate::error_handling::{ErrorType, ProcessingStats};

enum WriteCommand {
    Save(UiState),
    Flush(oneshot::Sender<()>),
}

/// Loads and saves the overlay display state under [`STORAGE_KEY`].
///
/// Neither direction ever fails from the caller's point of view. Fire-and-forget
/// writes go through [`UiStateStore::persist`], which hands the state to a
/// background writer task so they are applied in the order they were issued.
///
/// Must be created inside a Tokio runtime.
#[derive(Clone)]
pub struct UiStateStore {
    backend: Arc<dyn KeyValueStore>,
    stats: Arc<ProcessingStats>,
    writer: mpsc::UnboundedSender<WriteCommand>,
}

impl UiStateStore {
    pub fn new(backend: Arc<dyn KeyValueStore>, stats: Arc<ProcessingStats>) -> Self {
        let (writer, commands) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(
            Arc::clone(&backend),
            Arc::clone(&stats),
            commands,
        ));
        UiStateStore {
            backend,
            stats,
            writer,
        }
    }

    /// Reads the persisted state, falling back to defaults when the key is
    /// missing, the stored value does not decode, or the backend fails.
    pub async fn load(&self) -> UiState {
        match self.backend.get(STORAGE_KEY).await {
            Ok(Some(value)) => match serde_json::from_value::<UiState>(value) {
                Ok(state) => {
                    log::debug!("Loaded UI state: {:?}", state);
                    state
                }
                Err(e) => {
                    log::warn!("Ignoring undecodable UI state, using defaults: {}", e);
                    self.stats.increment_error(ErrorType::StateLoadError);
                    UiState::default()
                }
            },
            Ok(None) => {
                log::debug!("No persisted UI state, using defaults");
                UiState::default()
            }
            Err(e) => {
                log::warn!("Failed to load UI state, using defaults: {}", e);
                self.stats.increment_error(ErrorType::StateLoadError);
                UiState::default()
            }
        }
    }

    /// Writes `state` and waits for the backend. Failures are logged and dropped.
    pub async fn save(&self, state: UiState) {
        write_state(self.backend.as_ref(), &self.stats, state).await;
    }

    /// Queues `state` for the background writer without waiting.
    pub fn persist(&self, state: UiState) {
        if self.writer.send(WriteCommand::Save(state)).is_err() {
            log::warn!("UI state writer has stopped; dropping state {:?}", state);
            self.stats.increment_error(ErrorType::StateSaveError);
        }
    }

    /// Waits until every state queued by [`UiStateStore::persist`] before this
    /// call has been written.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.writer.send(WriteCommand::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }
}

async fn write_state(backend: &dyn KeyValueStore, stats: &ProcessingStats, state: UiState) {
    let value = match serde_json::to_value(state) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to encode UI state: {}", e);
            stats.increment_error(ErrorType::StateSaveError);
            return;
        }
    };
    if let Err(e) = backend.set(STORAGE_KEY, value).await {
        log::warn!("Failed to save UI state: {}", e);
        stats.increment_error(ErrorType::StateSaveError);
    }
}

async fn run_writer(
    backend: Arc<dyn KeyValueStore>,
    stats: Arc<ProcessingStats>,
    mut commands: mpsc::UnboundedReceiver<WriteCommand>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            WriteCommand::Save(state) => write_state(backend.as_ref(), &stats, state).await,
            WriteCommand::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
    log::trace!("UI state writer stopped");
}

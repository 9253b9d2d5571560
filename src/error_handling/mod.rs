//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions
//! - Processing statistics tracking (errors, warnings, info metrics)
//!
//! Nothing here is fatal to the analyzed document. Counters are categorized into:
//! - **Errors**: Failures of a collaborator (storage, overlay update) that were recovered locally
//! - **Warnings**: Document content that was skipped (malformed structured data)
//! - **Info**: Lifecycle events (overlay created/updated, navigation detected)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{CliError, ErrorType, InfoType, InitializationError, StorageError, WarningType};

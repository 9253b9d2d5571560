//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the persistence backends.
///
/// These never reach the overlay: `UiStateStore` logs them and falls back to
/// defaults (load) or drops the write (save).
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON.
    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing file holds JSON that is not a key-value object.
    #[error("Storage file {0} does not contain a JSON object")]
    NotAnObject(String),

    /// The backend refused the operation.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while turning command-line arguments into configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CliError {
    /// A `--navigate` value without the `URL=FILE` shape.
    #[error("Invalid navigation '{0}': expected URL=FILE")]
    InvalidNavigationStep(String),
}

/// Recovered failures of a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Persisted UI state could not be read or decoded; defaults were used.
    StateLoadError,
    /// Persisted UI state could not be written; the write was dropped.
    StateSaveError,
    /// An in-place overlay update found no content region and was abandoned.
    RenderAborted,
    /// No document could be resolved for a requested URL.
    DocumentUnavailable,
}

/// Document content that was skipped during analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// A JSON-LD block that failed to parse.
    MalformedStructuredData,
}

/// Lifecycle events worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    OverlayCreated,
    OverlayUpdated,
    OverlayClosed,
    NavigationDetected,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::StateLoadError => "UI state load error",
            ErrorType::StateSaveError => "UI state save error",
            ErrorType::RenderAborted => "Overlay update aborted",
            ErrorType::DocumentUnavailable => "Document unavailable",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MalformedStructuredData => "Malformed structured data block",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::OverlayCreated => "Overlay created",
            InfoType::OverlayUpdated => "Overlay updated",
            InfoType::OverlayClosed => "Overlay closed",
            InfoType::NavigationDetected => "Navigation detected",
        }
    }
}

//! Application initialization.
//!
//! Sets up process-wide facilities before the first analysis pass. Today that
//! is the logger; the session itself is built by [`crate::session::Session`].

mod logger;

// Re-export public API
pub use logger::init_logger_with;

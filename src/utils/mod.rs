//! Utility functions shared by the parser and the overlay.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text normalization, truncation and markup escaping

pub mod sanitize;
mod selector;

pub use sanitize::{collapse_whitespace, escape_html, truncate_chars};
pub use selector::parse_selector_unsafe;

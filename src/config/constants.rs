//! Configuration constants.
//!
//! This module defines the fixed parameters of the analysis engine and the
//! overlay: persistence key, navigation settling delay, scoring heuristics and
//! display limits.

use std::time::Duration;

/// Key under which the overlay display state is persisted.
pub const STORAGE_KEY: &str = "og-viewer-state";

/// Delay between a detected URL change and the re-analysis pass.
/// Single-page applications keep updating the document after the URL changes,
/// so the pass waits for the route transition to settle.
pub const NAVIGATION_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Name shown in the overlay header.
pub const OVERLAY_TITLE: &str = "MetaScope";

// Scoring
pub const MAX_SCORE: u32 = 100;
pub const TITLE_MIN_CHARS: usize = 30;
pub const TITLE_MAX_CHARS: usize = 60;
pub const DESCRIPTION_MIN_CHARS: usize = 120;
pub const DESCRIPTION_MAX_CHARS: usize = 155;

pub const TITLE_LENGTH_PENALTY: u32 = 15;
pub const DESCRIPTION_PENALTY: u32 = 20;
pub const IMAGE_PENALTY: u32 = 20;
pub const STRUCTURED_DATA_PENALTY: u32 = 15;
pub const H1_PENALTY: u32 = 15;
pub const HREFLANG_ERROR_PENALTY: u32 = 10;
pub const HREFLANG_WARNING_PENALTY: u32 = 5;

/// Scores strictly above this are graded good.
pub const GOOD_SCORE_THRESHOLD: u32 = 80;
/// Scores strictly above this (and not good) are graded average.
pub const AVERAGE_SCORE_THRESHOLD: u32 = 50;

pub const SCORE_COLOR_GOOD: &str = "#00c853";
pub const SCORE_COLOR_AVERAGE: &str = "#ffab00";
pub const SCORE_COLOR_POOR: &str = "#d50000";

// SERP preview
/// Title characters shown in the search result preview before truncation.
pub const SERP_TITLE_MAX_CHARS: usize = TITLE_MAX_CHARS;
/// Description characters shown in the search result preview before truncation.
pub const SERP_DESCRIPTION_MAX_CHARS: usize = DESCRIPTION_MAX_CHARS;
/// Number of FAQ questions surfaced as a rich snippet.
pub const SERP_FAQ_ITEMS: usize = 2;

/// Structured data types Google renders as rich results.
pub const HIGH_PRIORITY_SCHEMA_TYPES: &[&str] = &[
    "Product",
    "Recipe",
    "Review",
    "FAQPage",
    "BreadcrumbList",
    "Event",
    "Course",
    "LocalBusiness",
];

/// Default language tag for hreflang fallbacks.
pub const X_DEFAULT: &str = "x-default";

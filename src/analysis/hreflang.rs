//! Hreflang validation.
//!
//! Checks the alternate-language declarations of a page against the rules
//! search engines apply: the page references itself, every language appears
//! once, codes are well formed, targets are absolute, and an `x-default`
//! fallback exists when several languages are declared.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::X_DEFAULT;
use crate::parse::HreflangEntry;

/// Two-letter language with optional two-letter region, or `x-default`.
const LANG_CODE_PATTERN: &str = r"(?i)^(?:[a-z]{2}(?:-[a-z]{2})?|x-default)$";

static LANG_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LANG_CODE_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in LANG_CODE_RE: {}. This is a programming error.",
            LANG_CODE_PATTERN, e
        )
    })
});

/// Overall verdict of the hreflang checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HreflangStatus {
    /// The page declares no alternate languages.
    None,
    Ok,
    Warning,
    Error,
}

impl HreflangStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HreflangStatus::None => "none",
            HreflangStatus::Ok => "ok",
            HreflangStatus::Warning => "warning",
            HreflangStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for HreflangStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating a page's hreflang entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangAnalysis {
    pub entries: Vec<HreflangEntry>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub status: HreflangStatus,
}

impl HreflangAnalysis {
    fn empty() -> Self {
        HreflangAnalysis {
            entries: Vec::new(),
            errors: Vec::new(),
            warnings: Vec::new(),
            status: HreflangStatus::None,
        }
    }
}

fn strip_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// An entry points at the current page when the URLs match after dropping a
/// trailing slash, or when either one is a prefix of the other.
fn is_self_reference(href: &str, current_url: &str) -> bool {
    let href = strip_trailing_slash(href);
    let current = strip_trailing_slash(current_url);
    href == current || current_url.starts_with(href) || href.starts_with(current)
}

fn is_x_default(lang: &str) -> bool {
    lang.eq_ignore_ascii_case(X_DEFAULT)
}

/// Languages declared more than once, each listed once, in the order their
/// second declaration appears.
fn duplicated_langs(entries: &[HreflangEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for entry in entries {
        let lang = entry.lang.as_str();
        if !seen.insert(lang) && !duplicates.contains(&lang) {
            duplicates.push(lang);
        }
    }
    duplicates
}

/// Validates hreflang entries for the page at `current_url`.
///
/// `document_lang` is the `lang` attribute of the document root, if any.
/// Errors: missing self-reference, duplicated languages. Warnings: malformed
/// language codes, relative targets, missing `x-default`, and a document
/// language no entry covers.
pub fn analyze_hreflang(
    entries: Vec<HreflangEntry>,
    current_url: &str,
    document_lang: Option<&str>,
) -> HreflangAnalysis {
    if entries.is_empty() {
        return HreflangAnalysis::empty();
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !entries
        .iter()
        .any(|entry| is_self_reference(&entry.href, current_url))
    {
        errors.push(
            "The current page should reference itself in its own hreflang tags (missing self-reference)."
                .to_string(),
        );
    }

    let duplicates = duplicated_langs(&entries);
    if !duplicates.is_empty() {
        errors.push(format!(
            "Duplicate hreflang values: {}.",
            duplicates.join(", ")
        ));
    }

    for entry in &entries {
        if !LANG_CODE_RE.is_match(&entry.lang) {
            warnings.push(format!(
                "Invalid or unusual language code: \"{}\".",
                entry.lang
            ));
        }
        if !entry.href.is_empty() && !entry.href.starts_with("http") {
            warnings.push(format!(
                "Relative URL for hreflang=\"{}\": absolute URLs are recommended.",
                entry.lang
            ));
        }
    }

    let has_x_default = entries.iter().any(|entry| is_x_default(&entry.lang));
    if !has_x_default && entries.len() > 1 {
        warnings.push("x-default is recommended to indicate the default version.".to_string());
    }

    if let Some(lang) = document_lang.filter(|lang| !lang.is_empty()) {
        let matched = entries
            .iter()
            .any(|entry| entry.lang.to_lowercase() == lang.to_lowercase());
        if !matched && !has_x_default {
            warnings.push(format!(
                "The html lang=\"{}\" attribute does not match any hreflang.",
                lang
            ));
        }
    }

    let status = if !errors.is_empty() {
        HreflangStatus::Error
    } else if !warnings.is_empty() {
        HreflangStatus::Warning
    } else {
        HreflangStatus::Ok
    };

    HreflangAnalysis {
        entries,
        errors,
        warnings,
        status,
    }
}

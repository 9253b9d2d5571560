//! SEO score computation.

use serde::Serialize;

use super::hreflang::{HreflangAnalysis, HreflangStatus};
use crate::config::{
    AVERAGE_SCORE_THRESHOLD, DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, DESCRIPTION_PENALTY,
    GOOD_SCORE_THRESHOLD, H1_PENALTY, HREFLANG_ERROR_PENALTY, HREFLANG_WARNING_PENALTY,
    IMAGE_PENALTY, MAX_SCORE, SCORE_COLOR_AVERAGE, SCORE_COLOR_GOOD, SCORE_COLOR_POOR,
    STRUCTURED_DATA_PENALTY, TITLE_LENGTH_PENALTY, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::parse::PageMetadata;

/// Score band, drives the colour of the score indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGrade {
    Good,
    Average,
    Poor,
}

impl ScoreGrade {
    pub fn from_score(score: u32) -> Self {
        if score > GOOD_SCORE_THRESHOLD {
            ScoreGrade::Good
        } else if score > AVERAGE_SCORE_THRESHOLD {
            ScoreGrade::Average
        } else {
            ScoreGrade::Poor
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreGrade::Good => SCORE_COLOR_GOOD,
            ScoreGrade::Average => SCORE_COLOR_AVERAGE,
            ScoreGrade::Poor => SCORE_COLOR_POOR,
        }
    }
}

/// A 0–100 score and the suggestions explaining every deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u32,
    pub suggestions: Vec<String>,
}

impl ScoreResult {
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.score)
    }
}

/// Scores a page.
///
/// Starts from 100 and applies every deduction whose condition holds; the
/// hreflang warning deduction only applies when there is no hreflang error.
/// The result never drops below 0.
pub fn compute_score(
    metadata: &PageMetadata,
    structured_data_count: usize,
    hreflang: &HreflangAnalysis,
) -> ScoreResult {
    let mut deductions = 0u32;
    let mut suggestions = Vec::new();

    let title_len = metadata.title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
        deductions += TITLE_LENGTH_PENALTY;
        suggestions.push(format!(
            "Title ({} chars) should be between {} and {} characters.",
            title_len, TITLE_MIN_CHARS, TITLE_MAX_CHARS
        ));
    }

    let description_len = metadata.description.chars().count();
    if description_len == 0 {
        deductions += DESCRIPTION_PENALTY;
        suggestions.push("Meta description is missing.".to_string());
    } else if description_len < DESCRIPTION_MIN_CHARS {
        deductions += DESCRIPTION_PENALTY;
        suggestions.push(format!(
            "Meta description ({} chars) is too short. It should be between {} and {} characters.",
            description_len, DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
        ));
    }

    if metadata.og_image.is_none() {
        deductions += IMAGE_PENALTY;
        suggestions.push("OpenGraph image is missing.".to_string());
    }

    if structured_data_count == 0 {
        deductions += STRUCTURED_DATA_PENALTY;
        suggestions.push("No structured data detected.".to_string());
    }

    if metadata.h1.is_empty() {
        deductions += H1_PENALTY;
        suggestions.push("H1 heading is missing.".to_string());
    }

    match hreflang.status {
        HreflangStatus::Error => {
            deductions += HREFLANG_ERROR_PENALTY;
            suggestions.extend(hreflang.errors.iter().cloned());
        }
        HreflangStatus::Warning => {
            deductions += HREFLANG_WARNING_PENALTY;
            suggestions.extend(hreflang.warnings.iter().cloned());
        }
        HreflangStatus::None | HreflangStatus::Ok => {}
    }

    ScoreResult {
        score: MAX_SCORE.saturating_sub(deductions),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_hreflang;
    use crate::parse::HreflangEntry;

    fn good_metadata() -> PageMetadata {
        PageMetadata {
            og_image: Some("https://example.com/og.png".to_string()),
            title: "T".repeat(45),
            description: "D".repeat(140),
            url: "https://example.com/".to_string(),
            hostname: "example.com".to_string(),
            h1: "Heading".to_string(),
        }
    }

    fn no_hreflang() -> HreflangAnalysis {
        analyze_hreflang(Vec::new(), "https://example.com/", None)
    }

    #[test]
    fn test_perfect_page_scores_100() {
        let result = compute_score(&good_metadata(), 1, &no_hreflang());
        assert_eq!(result.score, 100);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.grade(), ScoreGrade::Good);
    }

    #[test]
    fn test_title_length_boundaries() {
        for len in 0..=80 {
            let metadata = PageMetadata {
                title: "t".repeat(len),
                ..good_metadata()
            };
            let result = compute_score(&metadata, 1, &no_hreflang());
            let expected = if (30..=60).contains(&len) { 100 } else { 85 };
            assert_eq!(result.score, expected, "title length {}", len);
        }
    }

    #[test]
    fn test_title_suggestion_mentions_length() {
        let metadata = PageMetadata {
            title: "Short".to_string(),
            ..good_metadata()
        };
        let result = compute_score(&metadata, 1, &no_hreflang());
        assert_eq!(
            result.suggestions,
            vec!["Title (5 chars) should be between 30 and 60 characters.".to_string()]
        );
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 30 two-byte characters are exactly at the lower bound
        let metadata = PageMetadata {
            title: "é".repeat(30),
            ..good_metadata()
        };
        assert_eq!(compute_score(&metadata, 1, &no_hreflang()).score, 100);
    }

    #[test]
    fn test_description_states() {
        let missing = PageMetadata {
            description: String::new(),
            ..good_metadata()
        };
        let result = compute_score(&missing, 1, &no_hreflang());
        assert_eq!(result.score, 80);
        assert_eq!(result.suggestions, vec!["Meta description is missing.".to_string()]);

        let short = PageMetadata {
            description: "d".repeat(119),
            ..good_metadata()
        };
        let result = compute_score(&short, 1, &no_hreflang());
        assert_eq!(result.score, 80);
        assert!(result.suggestions[0].starts_with("Meta description (119 chars) is too short."));

        let enough = PageMetadata {
            description: "d".repeat(120),
            ..good_metadata()
        };
        assert_eq!(compute_score(&enough, 1, &no_hreflang()).score, 100);

        // No upper bound on the description
        let long = PageMetadata {
            description: "d".repeat(400),
            ..good_metadata()
        };
        assert_eq!(compute_score(&long, 1, &no_hreflang()).score, 100);
    }

    #[test]
    fn test_missing_image_structured_data_and_h1() {
        let metadata = PageMetadata {
            og_image: None,
            h1: String::new(),
            ..good_metadata()
        };
        let result = compute_score(&metadata, 0, &no_hreflang());
        assert_eq!(result.score, 100 - 20 - 15 - 15);
        assert_eq!(
            result.suggestions,
            vec![
                "OpenGraph image is missing.".to_string(),
                "No structured data detected.".to_string(),
                "H1 heading is missing.".to_string(),
            ]
        );
        assert_eq!(result.grade(), ScoreGrade::Poor);
    }

    #[test]
    fn test_hreflang_error_appends_errors_only() {
        let hreflang = analyze_hreflang(
            vec![
                HreflangEntry::new("en", "/a"),
                HreflangEntry::new("en", "/b"),
            ],
            "https://example.com/page",
            None,
        );
        assert_eq!(hreflang.status, HreflangStatus::Error);
        let result = compute_score(&good_metadata(), 1, &hreflang);
        assert_eq!(result.score, 90);
        assert_eq!(result.suggestions, hreflang.errors);
    }

    #[test]
    fn test_hreflang_warning_appends_warnings() {
        let hreflang = analyze_hreflang(
            vec![
                HreflangEntry::new("en", "https://example.com/"),
                HreflangEntry::new("fr", "https://example.com/fr/"),
            ],
            "https://example.com/",
            None,
        );
        assert_eq!(hreflang.status, HreflangStatus::Warning);
        let result = compute_score(&good_metadata(), 1, &hreflang);
        assert_eq!(result.score, 95);
        assert_eq!(result.suggestions, hreflang.warnings);
        assert_eq!(result.grade(), ScoreGrade::Good);
    }

    #[test]
    fn test_worst_case_stays_in_range() {
        let metadata = PageMetadata {
            og_image: None,
            title: String::new(),
            description: String::new(),
            url: String::new(),
            hostname: String::new(),
            h1: String::new(),
        };
        let hreflang = analyze_hreflang(
            vec![HreflangEntry::new("zz-zzz", "/elsewhere")],
            "https://example.com/page",
            None,
        );
        let result = compute_score(&metadata, 0, &hreflang);
        assert_eq!(result.score, 5);
        assert!(result.score <= 100);
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(ScoreGrade::from_score(81), ScoreGrade::Good);
        assert_eq!(ScoreGrade::from_score(80), ScoreGrade::Average);
        assert_eq!(ScoreGrade::from_score(51), ScoreGrade::Average);
        assert_eq!(ScoreGrade::from_score(50), ScoreGrade::Poor);
        assert_eq!(ScoreGrade::Good.color(), "#00c853");
        assert_eq!(ScoreGrade::Average.color(), "#ffab00");
        assert_eq!(ScoreGrade::Poor.color(), "#d50000");
    }
}

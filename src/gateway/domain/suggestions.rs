//! Normalisation of free-text AI output into suggestion titles.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of suggestions returned per request.
pub const MAX_SUGGESTIONS: usize = 3;

/// Suggestions offered when there are no tasks to base a prompt on.
pub const BOOTSTRAP_SUGGESTIONS: [&str; MAX_SUGGESTIONS] = [
    "Review and update documentation",
    "Write unit tests for recent changes",
    "Refactor code for better maintainability",
];

// Covers "1. ", "- ", "* ", "2) " and bare markers such as "3.".
#[expect(clippy::expect_used, reason = "the pattern is a literal and always compiles")]
static ENUMERATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.\-*)]+(?:\s+|$)").expect("valid marker pattern"));

/// Returns the fixed bootstrap suggestions as owned strings.
#[must_use]
pub fn bootstrap_suggestions() -> Vec<String> {
    BOOTSTRAP_SUGGESTIONS.iter().map(|&s| s.to_owned()).collect()
}

/// Turns raw completion text into at most three suggestion titles.
///
/// Lines are trimmed and stripped of a leading list marker. A line is kept
/// (without its marker) unless nothing remains, in which case it is dropped.
#[must_use]
pub fn normalize_suggestions(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .map(|line| ENUMERATION_MARKER.replace(line, "").trim().to_owned())
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .collect()
}

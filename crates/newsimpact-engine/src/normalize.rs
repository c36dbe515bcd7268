//! Text cleanup applied before any analysis.

use std::sync::LazyLock;

use regex::Regex;

static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]+").expect("valid noise regex"));

/// Replace punctuation and symbols with spaces, collapse whitespace, trim.
///
/// Word characters are Unicode-aware, so accented names survive intact.
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    NOISE
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

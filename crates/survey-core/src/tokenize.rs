//! Free-text tokenization for term-frequency analysis.
//!
//! Tokens are maximal runs of Hangul syllables, two characters or longer.
//! The two-character floor is baked into the pattern; `min_len` is an
//! additional filter on top, so the effective minimum is `max(2, min_len)`.
//! Single-character particles (은/는/이/가, …) therefore never survive even
//! though they appear in the stopword set.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of Hangul syllables, length two or more.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣]{2,}").expect("invalid token regex"));

/// Particles and fillers excluded from term frequency.
pub const DEFAULT_STOPWORDS: [&str; 14] = [
    "은", "는", "이", "가", "을", "를", "의", "에", "와", "과", "또", "더", "등", "및",
];

/// Build the default stopword set.
pub fn default_stopwords() -> BTreeSet<String> {
    DEFAULT_STOPWORDS
        .iter()
        .map(|word| (*word).to_string())
        .collect()
}

/// Extract analyzable tokens from free text.
///
/// Preserves order of occurrence and does not deduplicate; frequency
/// counting happens downstream. Never fails: empty or non-Hangul input
/// yields an empty sequence.
pub fn tokenize(text: &str, min_len: usize, stopwords: &BTreeSet<String>) -> Vec<String> {
    TOKEN_REGEX
        .find_iter(text)
        .map(|token| token.as_str().to_string())
        .filter(|token| token.chars().count() >= min_len)
        .filter(|token| !stopwords.contains(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hangul_runs_in_order() {
        let stopwords = default_stopwords();
        let tokens = tokenize("나는 학교에 간다 학교", 2, &stopwords);
        assert_eq!(tokens, vec!["나는", "학교에", "간다", "학교"]);
    }

    #[test]
    fn test_min_len_filters_on_top_of_floor() {
        let stopwords = BTreeSet::new();
        let tokens = tokenize("기쁨 가나다 즐거움이다", 3, &stopwords);
        assert_eq!(tokens, vec!["가나다", "즐거움이다"]);
    }

    #[test]
    fn test_stopwords_match_exactly() {
        let stopwords: BTreeSet<String> = ["학교"].iter().map(|w| (*w).to_string()).collect();
        let tokens = tokenize("학교 학교에 학교", 2, &stopwords);
        // Only exact matches are removed; "학교에" survives.
        assert_eq!(tokens, vec!["학교에"]);
    }

    #[test]
    fn test_ignores_non_hangul_and_singles() {
        let stopwords = default_stopwords();
        assert!(tokenize("abc 123 !!", 2, &stopwords).is_empty());
        assert!(tokenize("가 나 다", 2, &stopwords).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let stopwords = default_stopwords();
        assert!(tokenize("", 2, &stopwords).is_empty());
    }
}

//! Configuration knobs for one analysis session.

use serde::{Deserialize, Serialize};

/// Default number of category buckets kept before long-tail collapsing.
pub const DEFAULT_TOP_N_CATEGORIES: usize = 10;
/// Default number of tokens reported for text columns.
pub const DEFAULT_TOP_K_TOKENS: usize = 30;
/// Allowed range for the token report size.
pub const TOP_K_TOKENS_RANGE: (usize, usize) = (10, 50);
/// Default minimum token length in characters.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;
/// Allowed range for the minimum token length.
pub const MIN_TOKEN_LENGTH_RANGE: (usize, usize) = (2, 4);

/// Options controlling derived-statistics computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Category buckets kept before the synthetic long-tail bucket.
    pub top_n_categories: usize,

    /// Tokens reported per text column (clamped to 10..=50).
    pub top_k_tokens: usize,

    /// Minimum token length in characters (clamped to 2..=4). The token
    /// pattern itself already enforces a floor of two characters, so the
    /// effective minimum is `max(2, min_token_length)`.
    pub min_token_length: usize,

    /// Display-only: whether callers should render a reference chart.
    /// Has no effect on any computation in the core.
    pub include_reference_chart: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n_categories: DEFAULT_TOP_N_CATEGORIES,
            top_k_tokens: DEFAULT_TOP_K_TOKENS,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            include_reference_chart: false,
        }
    }
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_n_categories(mut self, top_n: usize) -> Self {
        self.top_n_categories = top_n;
        self
    }

    #[must_use]
    pub fn with_top_k_tokens(mut self, top_k: usize) -> Self {
        let (lo, hi) = TOP_K_TOKENS_RANGE;
        self.top_k_tokens = top_k.clamp(lo, hi);
        self
    }

    #[must_use]
    pub fn with_min_token_length(mut self, min_len: usize) -> Self {
        let (lo, hi) = MIN_TOKEN_LENGTH_RANGE;
        self.min_token_length = min_len.clamp(lo, hi);
        self
    }

    #[must_use]
    pub fn with_reference_chart(mut self, enable: bool) -> Self {
        self.include_reference_chart = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalysisOptions::default();
        assert_eq!(options.top_n_categories, 10);
        assert_eq!(options.top_k_tokens, 30);
        assert_eq!(options.min_token_length, 2);
        assert!(!options.include_reference_chart);
    }

    #[test]
    fn test_token_knobs_are_clamped() {
        let options = AnalysisOptions::new()
            .with_top_k_tokens(5)
            .with_min_token_length(9);
        assert_eq!(options.top_k_tokens, 10);
        assert_eq!(options.min_token_length, 4);

        let options = AnalysisOptions::new().with_top_k_tokens(200);
        assert_eq!(options.top_k_tokens, 50);
    }
}

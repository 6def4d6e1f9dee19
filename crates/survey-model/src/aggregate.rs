//! Derived-statistic result types.
//!
//! These are pure data carriers: the computation lives in `survey-core`,
//! the rendering in `survey-report` and the CLI. Nothing here is persisted;
//! results are recomputed on demand from the observation set.

use serde::{Deserialize, Serialize};

/// One category bucket in a frequency summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub value: String,
    pub count: usize,
    /// True for the synthetic long-tail bucket that collapses everything
    /// beyond the top-N cutoff.
    pub is_other: bool,
}

/// Frequency counts per distinct category, long tail collapsed.
///
/// Invariant: bucket counts sum to `total`, the number of non-empty
/// observations counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFrequency {
    pub buckets: Vec<CategoryBucket>,
    pub total: usize,
}

impl CategoryFrequency {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Descriptive statistics over the parseable numeric observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n-1); 0.0 when fewer than two values.
    pub std_dev: f64,
}

/// One token with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Top-K token frequencies over a tokenized text column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFrequency {
    pub terms: Vec<TermCount>,
    pub total_tokens: usize,
}

impl TermFrequency {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// The type-appropriate summary derived for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AggregateResult {
    Categories(CategoryFrequency),
    Numeric(NumericSummary),
    Terms(TermFrequency),
}

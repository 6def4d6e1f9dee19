//! Derived-statistic computation.
//!
//! Three pure operations, selected by the column's active question type:
//! category frequency with long-tail collapsing, numeric descriptive
//! statistics, and token term frequency. None of them mutate the column or
//! the registry; results are recomputed on demand.

use std::collections::HashMap;

use survey_model::{CategoryBucket, CategoryFrequency, NumericSummary, TermCount, TermFrequency};

use crate::classify::parses_as_number;

/// Label of the synthetic bucket that absorbs the long tail.
pub const OTHER_BUCKET_LABEL: &str = "기타";

/// Count occurrences per distinct trimmed, non-empty value.
///
/// Buckets are sorted descending by count; ties keep the insertion order of
/// each value's first observation. When more than `top_n` distinct values
/// exist, everything beyond the cutoff collapses into one synthetic
/// "기타" bucket, so the returned counts always sum to `total`.
pub fn category_frequency<S: AsRef<str>>(values: &[S], top_n: usize) -> CategoryFrequency {
    let counts = count_in_first_seen_order(
        values
            .iter()
            .map(|value| value.as_ref().trim())
            .filter(|value| !value.is_empty()),
    );
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    let mut buckets: Vec<CategoryBucket> = counts
        .into_iter()
        .map(|(value, count)| CategoryBucket {
            value,
            count,
            is_other: false,
        })
        .collect();
    buckets.sort_by(|a, b| b.count.cmp(&a.count));

    if buckets.len() > top_n {
        let tail: usize = buckets[top_n..].iter().map(|bucket| bucket.count).sum();
        buckets.truncate(top_n);
        buckets.push(CategoryBucket {
            value: OTHER_BUCKET_LABEL.to_string(),
            count: tail,
            is_other: true,
        });
    }

    CategoryFrequency { buckets, total }
}

/// Descriptive statistics over the values that parse as numbers.
///
/// Unparseable entries are dropped. Returns `None` when nothing parses:
/// an empty-result condition the caller renders as "no valid numeric
/// data", never an error.
pub fn numeric_summary<S: AsRef<str>>(values: &[S]) -> Option<NumericSummary> {
    let mut numbers: Vec<f64> = values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| parses_as_number(value))
        .filter_map(|value| value.parse::<f64>().ok())
        .collect();
    if numbers.is_empty() {
        return None;
    }
    numbers.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = numbers.len();
    let mean = numbers.iter().sum::<f64>() / count as f64;
    let mid = count / 2;
    let median = if count % 2 == 1 {
        numbers[mid]
    } else {
        (numbers[mid - 1] + numbers[mid]) / 2.0
    };
    let std_dev = if count < 2 {
        0.0
    } else {
        let variance = numbers
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    };

    Some(NumericSummary {
        count,
        mean,
        median,
        std_dev,
    })
}

/// Top-K token counts over a pre-tokenized sequence.
///
/// Counting is insertion-stable: ties rank by first appearance.
pub fn term_frequency<S: AsRef<str>>(tokens: &[S], top_k: usize) -> TermFrequency {
    let counts = count_in_first_seen_order(tokens.iter().map(|token| token.as_ref()));
    let total_tokens: usize = counts.iter().map(|(_, count)| count).sum();

    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count));
    terms.truncate(top_k);

    TermFrequency {
        terms,
        total_tokens,
    }
}

/// Count occurrences preserving the order in which values first appear.
fn count_in_first_seen_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(value.to_string(), order.len());
                order.push((value.to_string(), 1));
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_frequency_counts_and_order() {
        let values = ["blue", "red", "blue", "green", "red", "blue"];
        let freq = category_frequency(&values, 10);
        assert_eq!(freq.total, 6);
        let pairs: Vec<(&str, usize)> = freq
            .buckets
            .iter()
            .map(|bucket| (bucket.value.as_str(), bucket.count))
            .collect();
        assert_eq!(pairs, vec![("blue", 3), ("red", 2), ("green", 1)]);
    }

    #[test]
    fn test_category_frequency_ties_keep_first_seen_order() {
        let freq = category_frequency(&["b", "a", "b", "a"], 10);
        // Equal counts: "b" appeared first.
        assert_eq!(freq.buckets[0].value, "b");
        assert_eq!(freq.buckets[1].value, "a");
    }

    #[test]
    fn test_category_long_tail_collapses() {
        let values: Vec<String> = (0..15).map(|i| format!("옵션{i}")).collect();
        let freq = category_frequency(&values, 10);
        assert_eq!(freq.buckets.len(), 11);
        let other = freq.buckets.last().unwrap();
        assert!(other.is_other);
        assert_eq!(other.value, OTHER_BUCKET_LABEL);
        assert_eq!(other.count, 5);
        let sum: usize = freq.buckets.iter().map(|bucket| bucket.count).sum();
        assert_eq!(sum, freq.total);
    }

    #[test]
    fn test_category_frequency_skips_empty_values() {
        let freq = category_frequency(&["a", "  ", "", "a"], 10);
        assert_eq!(freq.total, 2);
        assert_eq!(freq.buckets.len(), 1);
    }

    #[test]
    fn test_numeric_summary_basic() {
        let summary = numeric_summary(&["5", "5", "3", "4", "5", "2"]).unwrap();
        assert_eq!(summary.count, 6);
        assert!((summary.mean - 4.0).abs() < 1e-9);
        assert!((summary.median - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_summary_drops_unparseable() {
        let summary = numeric_summary(&["1", "x", "3"]).unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_numeric_summary_empty_condition() {
        assert!(numeric_summary(&["a", "b"]).is_none());
        assert!(numeric_summary::<&str>(&[]).is_none());
    }

    #[test]
    fn test_numeric_summary_single_value_has_zero_std() {
        let summary = numeric_summary(&["7"]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn test_term_frequency_top_k_and_ties() {
        let tokens = ["학교", "공부", "학교", "친구", "공부", "학교"];
        let freq = term_frequency(&tokens, 2);
        assert_eq!(freq.total_tokens, 6);
        assert_eq!(freq.terms.len(), 2);
        assert_eq!(freq.terms[0].term, "학교");
        assert_eq!(freq.terms[0].count, 3);
        assert_eq!(freq.terms[1].term, "공부");
    }

    #[test]
    fn test_term_frequency_deterministic() {
        let tokens = ["가나", "다라", "가나", "마바"];
        assert_eq!(term_frequency(&tokens, 3), term_frequency(&tokens, 3));
    }
}

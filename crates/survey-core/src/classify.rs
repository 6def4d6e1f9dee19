//! Ordered-heuristic column type inference.
//!
//! The decision policy is a fixed sequence of guards with early return.
//! Order and thresholds are load-bearing: a column that is 96% numeric but
//! full of delimiters is still `numeric`, because the numeric guard runs
//! first. Classification is best-effort; an explicit registry override
//! always wins over whatever this returns.

use survey_model::QuestionType;

use crate::split::contains_choice_delimiter;

/// Share of non-null values that must parse as numbers.
const NUMERIC_RATIO: f64 = 0.95;
/// Share of non-null values containing a multi-value delimiter.
const DELIMITER_RATIO: f64 = 0.2;
/// Floor for the distinct-value threshold of the single-choice guard.
const SINGLE_CHOICE_FLOOR: f64 = 20.0;
/// Median character length separating short from long text.
const SHORT_TEXT_MEDIAN_LEN: f64 = 50.0;

/// Infer the semantic type of a column from its raw values.
///
/// Operates only on the non-null values; an all-null column is `Other`.
/// Total and pure: never fails, always returns a member of the closed
/// enumeration, worst case falling through to `TextLong`.
pub fn classify(values: &[Option<String>]) -> QuestionType {
    let non_null: Vec<&str> = values
        .iter()
        .filter_map(|value| value.as_deref())
        .collect();
    if non_null.is_empty() {
        return QuestionType::Other;
    }
    let n = non_null.len();

    // 1. Almost everything parses as a number.
    let numeric = non_null
        .iter()
        .filter(|value| parses_as_number(value))
        .count();
    if numeric as f64 / n as f64 >= NUMERIC_RATIO {
        return QuestionType::Numeric;
    }

    // 2. Enough values carry a multi-value delimiter.
    let delimited = non_null
        .iter()
        .filter(|value| contains_choice_delimiter(value))
        .count();
    if delimited as f64 / n as f64 > DELIMITER_RATIO {
        return QuestionType::MultipleChoice;
    }

    // 3. Relatively few distinct values.
    let distinct = distinct_count(&non_null);
    if (distinct as f64) < SINGLE_CHOICE_FLOOR.max(n as f64 * 0.5) {
        return QuestionType::SingleChoice;
    }

    // 4. Median length separates short answers from long-form text.
    match median_char_length(&non_null) {
        Some(median) if median < SHORT_TEXT_MEDIAN_LEN => QuestionType::TextShort,
        _ => QuestionType::TextLong,
    }
}

/// Locale-agnostic decimal parse used by the numeric guard.
pub fn parses_as_number(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

fn distinct_count(values: &[&str]) -> usize {
    values.iter().collect::<std::collections::BTreeSet<_>>().len()
}

/// Median of the per-value character counts; `None` for an empty set.
fn median_char_length(values: &[&str]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut lengths: Vec<usize> = values.iter().map(|value| value.chars().count()).collect();
    lengths.sort_unstable();
    let mid = lengths.len() / 2;
    if lengths.len() % 2 == 1 {
        Some(lengths[mid] as f64)
    } else {
        Some((lengths[mid - 1] + lengths[mid]) as f64 / 2.0)
    }
}

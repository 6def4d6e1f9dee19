//! Multi-value answer splitting.
//!
//! Checkbox questions export every selection into one cell, joined by
//! whatever delimiter the form tool favored. Domestic exports use commas,
//! semicolons, slashes (both ASCII and fullwidth) and vertical bars.

use std::sync::LazyLock;

use regex::Regex;

/// Delimiters that separate individual selections inside one cell.
static CHOICE_DELIMITER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[;,／|/]").expect("invalid choice delimiter regex"));

/// True when the value contains at least one multi-value delimiter.
pub fn contains_choice_delimiter(value: &str) -> bool {
    CHOICE_DELIMITER_REGEX.is_match(value)
}

/// Explode multi-value cells into one observation per selected option.
///
/// Each input is split on the delimiter set, fragments are trimmed and
/// empty fragments dropped; the result is flattened in per-value split
/// order, then input order. A delimiter-free value yields exactly its
/// trimmed self, or nothing if the trimmed value is empty.
pub fn split_choices<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut observations = Vec::with_capacity(values.len());
    for value in values {
        for fragment in CHOICE_DELIMITER_REGEX.split(value.as_ref()) {
            let fragment = fragment.trim();
            if !fragment.is_empty() {
                observations.push(fragment.to_string());
            }
        }
    }
    observations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_flattens_in_order() {
        let values = ["red,blue", "blue", "green;red", "blue"];
        assert_eq!(
            split_choices(&values),
            vec!["red", "blue", "blue", "green", "red", "blue"]
        );
    }

    #[test]
    fn test_no_delimiter_yields_trimmed_value() {
        assert_eq!(split_choices(&["  과학  "]), vec!["과학"]);
        assert!(split_choices(&["   "]).is_empty());
    }

    #[test]
    fn test_all_delimiters_recognized() {
        for joined in ["a;b", "a,b", "a／b", "a|b", "a/b"] {
            assert!(contains_choice_delimiter(joined));
            assert_eq!(split_choices(&[joined]), vec!["a", "b"]);
        }
        assert!(!contains_choice_delimiter("ab"));
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert_eq!(split_choices(&["a,,b,", ";c"]), vec!["a", "b", "c"]);
    }
}

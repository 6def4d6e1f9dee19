//! Column label canonicalization.
//!
//! Form exports decorate question labels with trailing parenthetical help
//! text ("지각 횟수 (지난 학기 기준)") and inconsistent whitespace. All
//! registry lookups key on the normalized form, so normalization must be
//! deterministic and idempotent.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Trailing parenthetical group anchored to the end of the label.
static TRAILING_PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*?\)\s*$").expect("invalid trailing-paren regex"));

/// Canonicalize a raw column label.
///
/// Applies NFKC unicode normalization, strips a trailing parenthetical
/// group, collapses internal whitespace runs to a single space, and trims.
/// Pure and total; `normalize_label(normalize_label(x)) == normalize_label(x)`.
///
/// Two distinct raw labels may normalize identically; the registry resolves
/// such collisions by letting the later column overwrite the earlier one.
pub fn normalize_label(raw: &str) -> String {
    let canonical: String = raw.nfkc().collect();
    let stripped = TRAILING_PAREN_REGEX.replace(&canonical, "");
    let mut normalized = String::with_capacity(stripped.len());
    for part in stripped.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

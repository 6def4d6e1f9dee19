//! Per-session column type assignments.
//!
//! One registry instance per analysis session, owned by the caller and
//! passed into every classify/override call. Never a process-wide
//! singleton: concurrent sessions must not share assignments.

use std::collections::BTreeMap;

use survey_model::{QuestionType, Result};
use tracing::debug;

use crate::classify::classify;
use crate::normalize::normalize_label;

/// Mutable mapping from normalized column label to its active type.
///
/// Assignments are created lazily on first access (auto-classified) and
/// may be overwritten by explicit overrides at any time; the last write
/// wins. If two raw labels normalize to the same string, the later column
/// overwrites the earlier entry (documented collision policy).
#[derive(Debug, Default)]
pub struct TypeRegistry {
    assignments: BTreeMap<String, QuestionType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the active type for a column, classifying and caching on
    /// first access. A previously recorded assignment, auto or override,
    /// is returned as-is.
    pub fn get_or_classify(&mut self, raw_label: &str, values: &[Option<String>]) -> QuestionType {
        let label = normalize_label(raw_label);
        if let Some(&assigned) = self.assignments.get(&label) {
            return assigned;
        }
        let inferred = classify(values);
        debug!(column = %label, question_type = %inferred, "auto-classified column");
        self.assignments.insert(label, inferred);
        inferred
    }

    /// Record an explicit override. Wins over any future auto-classification
    /// of the same column for the rest of the session.
    pub fn set(&mut self, raw_label: &str, question_type: QuestionType) {
        let label = normalize_label(raw_label);
        debug!(column = %label, question_type = %question_type, "type override recorded");
        self.assignments.insert(label, question_type);
    }

    /// Record an override given a stable type key.
    ///
    /// An unknown key is rejected and the previous assignment retained.
    pub fn set_key(&mut self, raw_label: &str, key: &str) -> Result<QuestionType> {
        let question_type = QuestionType::from_key(key)?;
        self.set(raw_label, question_type);
        Ok(question_type)
    }

    /// Look up the recorded assignment without classifying.
    pub fn get(&self, raw_label: &str) -> Option<QuestionType> {
        self.assignments.get(&normalize_label(raw_label)).copied()
    }

    /// All recorded assignments, keyed by normalized label.
    pub fn all(&self) -> &BTreeMap<String, QuestionType> {
        &self.assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_column() -> Vec<Option<String>> {
        vec![Some("1".to_string()), Some("2".to_string())]
    }

    #[test]
    fn test_classifies_and_caches_on_first_access() {
        let mut registry = TypeRegistry::new();
        assert_eq!(
            registry.get_or_classify("점수", &numeric_column()),
            QuestionType::Numeric
        );
        // Cached: different values do not re-classify.
        assert_eq!(
            registry.get_or_classify("점수", &[Some("텍스트".to_string())]),
            QuestionType::Numeric
        );
    }

    #[test]
    fn test_override_survives_later_get() {
        let mut registry = TypeRegistry::new();
        registry.get_or_classify("점수", &numeric_column());
        registry.set("점수", QuestionType::LinearScale);
        assert_eq!(
            registry.get_or_classify("점수", &numeric_column()),
            QuestionType::LinearScale
        );
    }

    #[test]
    fn test_unknown_key_rejected_and_previous_retained() {
        let mut registry = TypeRegistry::new();
        registry.set("점수", QuestionType::Numeric);
        assert!(registry.set_key("점수", "rating").is_err());
        assert_eq!(registry.get("점수"), Some(QuestionType::Numeric));
    }

    #[test]
    fn test_lookup_uses_normalized_label() {
        let mut registry = TypeRegistry::new();
        registry.set("지각 횟수 (지난 학기)", QuestionType::Numeric);
        assert_eq!(registry.get("지각 횟수"), Some(QuestionType::Numeric));
    }

    #[test]
    fn test_collision_last_write_wins() {
        let mut registry = TypeRegistry::new();
        registry.set("문항 (a)", QuestionType::Numeric);
        registry.set("문항 (b)", QuestionType::TextLong);
        assert_eq!(registry.get("문항"), Some(QuestionType::TextLong));
        assert_eq!(registry.all().len(), 1);
    }
}

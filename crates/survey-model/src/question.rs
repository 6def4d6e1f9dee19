//! The closed enumeration of semantic question types.
//!
//! Every survey column resolves to exactly one `QuestionType`, either by
//! automatic classification or by an explicit user override. Types carry a
//! stable snake_case key (the wire/CLI identity) and a Korean display label
//! matching the original form exports this engine is tuned for.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SurveyError};

/// Semantic category of a survey column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Timestamp,
    Email,
    Phone,
    Name,
    StudentId,
    Numeric,
    SingleChoice,
    MultipleChoice,
    LinearScale,
    TextShort,
    TextLong,
    Url,
    Other,
}

impl QuestionType {
    /// All members of the closed enumeration, in display order.
    pub const ALL: [QuestionType; 13] = [
        QuestionType::Timestamp,
        QuestionType::Email,
        QuestionType::Phone,
        QuestionType::Name,
        QuestionType::StudentId,
        QuestionType::Numeric,
        QuestionType::SingleChoice,
        QuestionType::MultipleChoice,
        QuestionType::LinearScale,
        QuestionType::TextShort,
        QuestionType::TextLong,
        QuestionType::Url,
        QuestionType::Other,
    ];

    /// Stable key used for overrides, serialization, and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            QuestionType::Timestamp => "timestamp",
            QuestionType::Email => "email",
            QuestionType::Phone => "phone",
            QuestionType::Name => "name",
            QuestionType::StudentId => "student_id",
            QuestionType::Numeric => "numeric",
            QuestionType::SingleChoice => "single_choice",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::LinearScale => "linear_scale",
            QuestionType::TextShort => "text_short",
            QuestionType::TextLong => "text_long",
            QuestionType::Url => "url",
            QuestionType::Other => "other",
        }
    }

    /// Human-facing label shown in summaries and exported documents.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Timestamp => "타임스탬프",
            QuestionType::Email => "이메일",
            QuestionType::Phone => "전화",
            QuestionType::Name => "이름",
            QuestionType::StudentId => "학번",
            QuestionType::Numeric => "숫자",
            QuestionType::SingleChoice => "단일선택",
            QuestionType::MultipleChoice => "다중선택",
            QuestionType::LinearScale => "척도",
            QuestionType::TextShort => "단답",
            QuestionType::TextLong => "장문",
            QuestionType::Url => "URL",
            QuestionType::Other => "기타",
        }
    }

    /// Parse a stable key back into a type.
    ///
    /// Rejects anything outside the closed enumeration so that a bad
    /// override never silently lands in a registry.
    pub fn from_key(key: &str) -> Result<Self> {
        QuestionType::ALL
            .into_iter()
            .find(|ty| ty.key() == key)
            .ok_or_else(|| SurveyError::InvalidType {
                key: key.to_string(),
            })
    }

    /// Types whose values identify a respondent.
    ///
    /// Sensitive columns are excluded from frequency and text analysis
    /// regardless of what the classifier would have returned.
    pub fn is_sensitive(self) -> bool {
        matches!(
            self,
            QuestionType::Email
                | QuestionType::Phone
                | QuestionType::StudentId
                | QuestionType::Url
                | QuestionType::Name
        )
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for ty in QuestionType::ALL {
            assert_eq!(QuestionType::from_key(ty.key()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = QuestionType::from_key("checkbox").unwrap_err();
        assert!(matches!(err, SurveyError::InvalidType { key } if key == "checkbox"));
    }

    #[test]
    fn test_sensitive_set() {
        assert!(QuestionType::Email.is_sensitive());
        assert!(QuestionType::Phone.is_sensitive());
        assert!(QuestionType::StudentId.is_sensitive());
        assert!(QuestionType::Url.is_sensitive());
        assert!(QuestionType::Name.is_sensitive());
        assert!(!QuestionType::Numeric.is_sensitive());
        assert!(!QuestionType::TextLong.is_sensitive());
    }

    #[test]
    fn test_serde_uses_stable_key() {
        let json = serde_json::to_string(&QuestionType::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple_choice\"");
        let back: QuestionType = serde_json::from_str("\"student_id\"").unwrap();
        assert_eq!(back, QuestionType::StudentId);
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// A type override referenced a key outside the closed enumeration.
    #[error("unknown question type key: '{key}'")]
    InvalidType { key: String },
}

pub type Result<T> = std::result::Result<T, SurveyError>;

//! Shared data model for the survey analysis workspace.
//!
//! Holds the closed `QuestionType` enumeration, the raw table handed over
//! by the ingest layer, the derived-statistic result types, and the
//! analysis configuration knobs.

pub mod aggregate;
pub mod error;
pub mod options;
pub mod question;
pub mod table;

pub use aggregate::{
    AggregateResult, CategoryBucket, CategoryFrequency, NumericSummary, TermCount, TermFrequency,
};
pub use error::{Result, SurveyError};
pub use options::AnalysisOptions;
pub use question::QuestionType;
pub use table::RawTable;

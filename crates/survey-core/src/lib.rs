//! Column-type inference and derived-statistics pipeline.
//!
//! The engine behind the survey analyzer: given a raw table of respondent
//! rows, it canonicalizes column labels, infers a semantic question type
//! per column through an ordered heuristic, and derives type-appropriate
//! summaries (category frequencies with long-tail bucketing, numeric
//! descriptive statistics, Hangul token frequencies). Presentation,
//! upload handling, and rendering live outside this crate.

pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod normalize;
pub mod registry;
pub mod split;
pub mod tokenize;

pub use aggregate::{OTHER_BUCKET_LABEL, category_frequency, numeric_summary, term_frequency};
pub use analysis::{ColumnReport, analyze_column, analyze_table};
pub use classify::classify;
pub use normalize::normalize_label;
pub use registry::TypeRegistry;
pub use split::split_choices;
pub use tokenize::{DEFAULT_STOPWORDS, default_stopwords, tokenize};

//! Per-table analysis pipeline.
//!
//! Resolves each column's type through the session registry, then derives
//! the type-appropriate summary: multi-value columns are exploded before
//! counting, text columns are tokenized first, sensitive columns are
//! excluded from analysis regardless of what the classifier returned.

use serde::Serialize;
use tracing::debug;

use survey_model::{AggregateResult, AnalysisOptions, QuestionType, RawTable};

use crate::aggregate::{category_frequency, numeric_summary, term_frequency};
use crate::normalize::normalize_label;
use crate::registry::TypeRegistry;
use crate::split::split_choices;
use crate::tokenize::{default_stopwords, tokenize};

/// One column's resolved type and derived summary.
///
/// `summary` is `None` for excluded columns (sensitive types, timestamps)
/// and for empty-result conditions such as a numeric column with no
/// parseable values; callers render those as informational messages.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub label: String,
    pub question_type: QuestionType,
    /// Non-null answers observed for this column.
    pub respondents: usize,
    pub summary: Option<AggregateResult>,
}

/// Analyze every column of one uploaded table.
///
/// The registry is the only mutable state: auto-classifications are cached
/// into it, and any override recorded beforehand takes precedence here.
pub fn analyze_table(
    table: &RawTable,
    registry: &mut TypeRegistry,
    options: &AnalysisOptions,
) -> Vec<ColumnReport> {
    let mut reports = Vec::with_capacity(table.headers.len());
    for (index, header) in table.headers.iter().enumerate() {
        let values = table.column_values(index);
        let question_type = registry.get_or_classify(header, &values);
        reports.push(analyze_column(header, &values, question_type, options));
    }
    reports
}

/// Derive the summary for one column with an already-resolved type.
pub fn analyze_column(
    raw_label: &str,
    values: &[Option<String>],
    question_type: QuestionType,
    options: &AnalysisOptions,
) -> ColumnReport {
    let label = normalize_label(raw_label);
    let non_null: Vec<&str> = values
        .iter()
        .filter_map(|value| value.as_deref())
        .collect();
    let respondents = non_null.len();
    let summary = summarize(&non_null, question_type, options);
    debug!(
        column = %label,
        question_type = %question_type,
        respondents,
        has_summary = summary.is_some(),
        "column analyzed"
    );
    ColumnReport {
        label,
        question_type,
        respondents,
        summary,
    }
}

fn summarize(
    non_null: &[&str],
    question_type: QuestionType,
    options: &AnalysisOptions,
) -> Option<AggregateResult> {
    if question_type.is_sensitive() {
        return None;
    }
    match question_type {
        QuestionType::Numeric | QuestionType::LinearScale => {
            numeric_summary(non_null).map(AggregateResult::Numeric)
        }
        QuestionType::MultipleChoice => {
            let observations = split_choices(non_null);
            Some(AggregateResult::Categories(category_frequency(
                &observations,
                options.top_n_categories,
            )))
        }
        QuestionType::SingleChoice | QuestionType::Other => Some(AggregateResult::Categories(
            category_frequency(non_null, options.top_n_categories),
        )),
        QuestionType::TextShort | QuestionType::TextLong => {
            let stopwords = default_stopwords();
            let tokens: Vec<String> = non_null
                .iter()
                .flat_map(|text| tokenize(text, options.min_token_length, &stopwords))
                .collect();
            Some(AggregateResult::Terms(term_frequency(
                &tokens,
                options.top_k_tokens,
            )))
        }
        // Timestamps carry no analyzable content at this layer.
        QuestionType::Timestamp => None,
        // Sensitive types are handled by the guard above.
        _ => None,
    }
}

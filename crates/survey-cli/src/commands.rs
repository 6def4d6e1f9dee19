//! Command implementations.

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, trace, warn};

use survey_cli::logging::redact_answer;
use survey_core::{ColumnReport, TypeRegistry, analyze_table};
use survey_ingest::read_survey_csv;
use survey_model::{AnalysisOptions, QuestionType};
use survey_report::render_document;

use crate::cli::AnalyzeArgs;
use crate::summary::{apply_table_style, header_cell, print_reports};

/// List the closed question type enumeration.
pub fn run_types() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Sensitive"),
    ]);
    apply_table_style(&mut table);
    for ty in QuestionType::ALL {
        table.add_row(vec![
            ty.key().to_string(),
            ty.label().to_string(),
            if ty.is_sensitive() { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Analyze one export: ingest, apply overrides, classify, summarize.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<Vec<ColumnReport>> {
    let span = info_span!("analyze", csv = %args.csv_path.display());
    let _guard = span.enter();

    let table = read_survey_csv(&args.csv_path)
        .with_context(|| format!("load survey export {}", args.csv_path.display()))?;
    for (index, header) in table.headers.iter().enumerate() {
        if let Some(sample) = table.column_values(index).iter().flatten().next() {
            trace!(column = %header, sample = %redact_answer(sample), "column sample");
        }
    }

    // One registry per analysis session; overrides recorded up front win
    // over auto-classification.
    let mut registry = TypeRegistry::new();
    for entry in &args.overrides {
        let Some((column, key)) = entry.split_once('=') else {
            bail!("invalid --set value '{entry}': expected COLUMN=TYPE");
        };
        let assigned = registry
            .set_key(column.trim(), key.trim())
            .with_context(|| format!("override for column '{}'", column.trim()))?;
        info!(column = column.trim(), question_type = %assigned, "type override applied");
    }

    let options = AnalysisOptions::new()
        .with_top_n_categories(args.top_categories)
        .with_top_k_tokens(args.top_tokens as usize)
        .with_min_token_length(args.min_token_len as usize)
        .with_reference_chart(args.reference_chart);

    let reports = analyze_table(&table, &mut registry, &options);
    info!(columns = reports.len(), rows = table.row_count(), "analysis complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_reports(&reports);
    }

    if let Some(path) = &args.export {
        let document = render_document(&reports, &options);
        std::fs::write(path, document)
            .with_context(|| format!("write analysis document {}", path.display()))?;
        info!(path = %path.display(), "analysis document written");
    }

    let unresolved = reports
        .iter()
        .filter(|report| report.question_type == QuestionType::Other)
        .count();
    if unresolved > 0 {
        warn!(columns = unresolved, "columns classified as 'other'; consider --set overrides");
    }

    Ok(reports)
}

//! Terminal rendering of analysis results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_core::ColumnReport;
use survey_model::AggregateResult;

/// Print the per-column overview table followed by summary details.
pub fn print_reports(reports: &[ColumnReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Responses"),
        header_cell("Summary"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in reports {
        table.add_row(vec![
            Cell::new(&report.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format!(
                "{} ({})",
                report.question_type.label(),
                report.question_type.key()
            )),
            Cell::new(report.respondents),
            Cell::new(summary_line(report)),
        ]);
    }
    println!("{table}");

    for report in reports {
        print_detail(report);
    }
}

fn summary_line(report: &ColumnReport) -> String {
    match &report.summary {
        Some(AggregateResult::Numeric(summary)) => format!(
            "mean {:.2}, median {:.2}, sd {:.2} (n={})",
            summary.mean, summary.median, summary.std_dev, summary.count
        ),
        Some(AggregateResult::Categories(freq)) if !freq.is_empty() => {
            format!("{} categories, {} observations", freq.buckets.len(), freq.total)
        }
        Some(AggregateResult::Terms(freq)) if !freq.is_empty() => {
            format!("{} terms over {} tokens", freq.terms.len(), freq.total_tokens)
        }
        Some(_) => "no analyzable data".to_string(),
        None if report.question_type.is_sensitive() => "excluded (sensitive)".to_string(),
        None => "no analyzable data".to_string(),
    }
}

fn print_detail(report: &ColumnReport) {
    match &report.summary {
        Some(AggregateResult::Categories(freq)) if !freq.is_empty() => {
            println!();
            println!("{}:", report.label);
            for bucket in &freq.buckets {
                let marker = if bucket.is_other { "*" } else { " " };
                println!("  {marker}{:<24} {}", bucket.value, bucket.count);
            }
        }
        Some(AggregateResult::Terms(freq)) if !freq.is_empty() => {
            println!();
            println!("{} (top terms):", report.label);
            for term in &freq.terms {
                println!("   {:<24} {}", term.term, term.count);
            }
        }
        _ => {}
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

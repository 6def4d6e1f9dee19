//! Plain structured-text rendering of computed analysis results.
//!
//! Pure formatting over already-computed `ColumnReport` data: no
//! recomputation, no I/O. The per-type usage tips are product content for
//! teachers reviewing their own form results.

use std::fmt::Write as _;

use survey_core::ColumnReport;
use survey_model::{AggregateResult, AnalysisOptions, QuestionType};

/// Shown when a column produced no analyzable summary.
const NO_SUMMARY_NOTE: &str = "분석 가능한 데이터가 없습니다.";
/// Shown for columns excluded due to personally identifying content.
const SENSITIVE_NOTE: &str = "개인 식별 정보 유형이므로 분석에서 제외되었습니다.";

/// Render the full analysis document for one session.
pub fn render_document(reports: &[ColumnReport], options: &AnalysisOptions) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "설문 자동 분석 결과");
    let _ = writeln!(doc, "====================");
    let _ = writeln!(doc, "문항 수: {}", reports.len());
    let _ = writeln!(doc);
    for report in reports {
        render_column(&mut doc, report);
        let _ = writeln!(doc);
    }
    if options.include_reference_chart {
        let _ = writeln!(doc, "(참고 차트는 화면에서 확인하세요.)");
    }
    doc
}

fn render_column(doc: &mut String, report: &ColumnReport) {
    let _ = writeln!(doc, "## {}", report.label);
    let _ = writeln!(
        doc,
        "유형: {} ({}) / 응답 {}건",
        report.question_type.label(),
        report.question_type.key(),
        report.respondents
    );

    match &report.summary {
        Some(AggregateResult::Categories(freq)) if !freq.is_empty() => {
            let _ = writeln!(doc, "선택 빈도 (총 {}건):", freq.total);
            for bucket in &freq.buckets {
                let _ = writeln!(doc, "  - {}: {}건", bucket.value, bucket.count);
            }
        }
        Some(AggregateResult::Numeric(summary)) => {
            let _ = writeln!(
                doc,
                "기술 통계: 평균 {:.2} / 중앙값 {:.2} / 표준편차 {:.2} / 유효 응답 {}건",
                summary.mean, summary.median, summary.std_dev, summary.count
            );
        }
        Some(AggregateResult::Terms(freq)) if !freq.is_empty() => {
            let _ = writeln!(doc, "자주 나온 단어 (토큰 {}개):", freq.total_tokens);
            for term in &freq.terms {
                let _ = writeln!(doc, "  - {}: {}회", term.term, term.count);
            }
        }
        Some(_) => {
            let _ = writeln!(doc, "{NO_SUMMARY_NOTE}");
        }
        None if report.question_type.is_sensitive() => {
            let _ = writeln!(doc, "{SENSITIVE_NOTE}");
        }
        None => {
            let _ = writeln!(doc, "{NO_SUMMARY_NOTE}");
        }
    }

    if let Some(tip) = usage_tip(report.question_type) {
        let _ = writeln!(doc, "활용 팁: {tip}");
    }
}

/// Per-type guidance appended to each section.
fn usage_tip(question_type: QuestionType) -> Option<&'static str> {
    match question_type {
        QuestionType::Numeric | QuestionType::LinearScale => {
            Some("평균과 분포를 함께 보며 극단 응답 여부를 확인하세요.")
        }
        QuestionType::SingleChoice => {
            Some("상위 선택지가 전체의 절반을 넘는지 확인해 보세요.")
        }
        QuestionType::MultipleChoice => {
            Some("복수 선택 문항은 응답 수가 인원 수보다 많을 수 있습니다.")
        }
        QuestionType::TextShort | QuestionType::TextLong => {
            Some("자주 나온 단어를 실마리로 원문 응답을 다시 읽어 보세요.")
        }
        QuestionType::Timestamp => Some("제출 시각은 응답 경향 파악에만 참고하세요."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_core::TypeRegistry;
    use survey_core::analyze_table;
    use survey_model::RawTable;

    fn sample_reports() -> Vec<ColumnReport> {
        let mut table = RawTable::new(vec!["만족도".to_string(), "이메일 주소".to_string()]);
        for score in ["5", "4", "5"] {
            table.push_row(vec![
                Some(score.to_string()),
                Some("student@school.kr".to_string()),
            ]);
        }
        let mut registry = TypeRegistry::new();
        registry.set("이메일 주소", QuestionType::Email);
        analyze_table(&table, &mut registry, &AnalysisOptions::default())
    }

    #[test]
    fn test_document_contains_numeric_section() {
        let doc = render_document(&sample_reports(), &AnalysisOptions::default());
        assert!(doc.contains("## 만족도"));
        assert!(doc.contains("평균 4.67"));
        assert!(doc.contains("유효 응답 3건"));
    }

    #[test]
    fn test_sensitive_column_renders_exclusion_note() {
        let doc = render_document(&sample_reports(), &AnalysisOptions::default());
        assert!(doc.contains("## 이메일 주소"));
        assert!(doc.contains(SENSITIVE_NOTE));
        assert!(!doc.contains("student@school.kr"));
    }

    #[test]
    fn test_reference_chart_note_is_display_only() {
        let reports = sample_reports();
        let without = render_document(&reports, &AnalysisOptions::default());
        let with = render_document(
            &reports,
            &AnalysisOptions::default().with_reference_chart(true),
        );
        assert!(with.contains("참고 차트"));
        // Same computed content either way.
        assert!(with.starts_with(without.as_str()));
    }
}

//! CSV loading into a raw table.

use std::path::Path;

use tracing::info;

use survey_model::RawTable;

use crate::encoding::decode_export;
use crate::error::{IngestError, Result};

/// Load one survey export into a `RawTable`.
///
/// Reads the file bytes, resolves the encoding through the candidate list,
/// and parses the decoded text as CSV. The first record becomes the header
/// row; empty and missing cells become `None`. Rows are kept positionally
/// aligned with the headers (flexible records tolerated, extra cells
/// dropped, short rows padded with `None`).
pub fn read_survey_csv(path: &Path) -> Result<RawTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let (text, encoding) = decode_export(path, &bytes)?;
    let table = parse_csv_text(path, &text)?;
    info!(
        path = %path.display(),
        encoding,
        columns = table.headers.len(),
        rows = table.row_count(),
        "survey export loaded"
    );
    Ok(table)
}

/// Parse already-decoded CSV text.
pub fn parse_csv_text(path: &Path, text: &str) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = RawTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<Option<String>> = (0..table.headers.len())
            .map(|idx| {
                record
                    .get(idx)
                    .map(str::trim)
                    .filter(|cell| !cell.is_empty())
                    .map(ToString::to_string)
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_utf8_export() {
        let file = create_temp_csv("이름,점수\n학생A,5\n학생B,\n".as_bytes());
        let table = read_survey_csv(file.path()).unwrap();

        assert_eq!(table.headers, vec!["이름", "점수"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1][1], None);
    }

    #[test]
    fn test_read_euc_kr_export() {
        let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode("문항,응답\n질문1,예\n");
        assert!(!had_errors);
        let file = create_temp_csv(&bytes);
        let table = read_survey_csv(file.path()).unwrap();

        assert_eq!(table.headers, vec!["문항", "응답"]);
        assert_eq!(table.rows[0][1], Some("예".to_string()));
    }

    #[test]
    fn test_short_rows_padded_with_none() {
        let file = create_temp_csv(b"A,B,C\n1,2\n");
        let table = read_survey_csv(file.path()).unwrap();

        assert_eq!(table.rows[0], vec![Some("1".to_string()), Some("2".to_string()), None]);
    }

    #[test]
    fn test_empty_file_is_terminal() {
        let file = create_temp_csv(b"");
        let result = read_survey_csv(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_undecodable_file_is_terminal() {
        let file = create_temp_csv(&[0xFF, 0xFF, 0xFF]);
        let result = read_survey_csv(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_survey_csv(Path::new("/nonexistent/responses.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}

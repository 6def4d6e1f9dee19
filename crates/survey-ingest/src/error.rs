//! Error types for survey export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a survey export.
///
/// Any of these is terminal for the upload attempt: no partial table is
/// produced.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Export file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file bytes.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// None of the candidate encodings produced a clean decode.
    #[error("could not decode {path}: tried {tried}")]
    UnsupportedEncoding { path: PathBuf, tried: String },

    /// Failed to parse the decoded text as CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Export contains no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/responses.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/responses.csv");
    }
}

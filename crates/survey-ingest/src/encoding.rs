//! Candidate-encoding detection for survey exports.
//!
//! Form tools in the wild hand out UTF-8 with a BOM, plain UTF-8, or the
//! legacy Korean codepage depending on which spreadsheet application last
//! touched the file. Candidates are tried strictly, in order; the first
//! clean decode wins, and a file no candidate can decode is reported once
//! as a single unreadable-file condition.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Ordered list of candidate encodings, by observed frequency.
const CANDIDATE_ENCODINGS: [&str; 2] = ["UTF-8", "EUC-KR"];

/// Decode raw export bytes into text.
///
/// Returns the decoded text and the name of the matching candidate.
pub fn decode_export(path: &Path, bytes: &[u8]) -> Result<(String, &'static str)> {
    // UTF-8 first, BOM tolerated.
    let without_bom = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        debug!(path = %path.display(), encoding = "UTF-8", "decoded export");
        return Ok((text.to_string(), "UTF-8"));
    }

    // Then the fixed-width Korean codepage.
    if let Some(text) = decode_euc_kr(bytes) {
        debug!(path = %path.display(), encoding = "EUC-KR", "decoded export");
        return Ok((text.into_owned(), "EUC-KR"));
    }

    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        tried: CANDIDATE_ENCODINGS.join(", "),
    })
}

/// Strict EUC-KR decode; `None` on any malformed sequence.
fn decode_euc_kr(bytes: &[u8]) -> Option<Cow<'_, str>> {
    encoding_rs::EUC_KR.decode_without_bom_handling_and_without_replacement(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("responses.csv")
    }

    #[test]
    fn test_plain_utf8() {
        let (text, encoding) = decode_export(&path(), "이름,점수\n".as_bytes()).unwrap();
        assert_eq!(text, "이름,점수\n");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_utf8_with_bom() {
        let mut bytes = b"\xef\xbb\xbf".to_vec();
        bytes.extend_from_slice("A,B\n".as_bytes());
        let (text, encoding) = decode_export(&path(), &bytes).unwrap();
        assert_eq!(text, "A,B\n");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_euc_kr_fallback() {
        let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode("이름,점수\n학생,5\n");
        assert!(!had_errors);
        let (text, encoding) = decode_export(&path(), &bytes).unwrap();
        assert_eq!(text, "이름,점수\n학생,5\n");
        assert_eq!(encoding, "EUC-KR");
    }

    #[test]
    fn test_undecodable_bytes_reported_once() {
        // 0xFF is not a valid lead byte in UTF-8 or EUC-KR.
        let err = decode_export(&path(), &[0xFF, 0xFF, 0x00]).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedEncoding { .. }));
        assert!(err.to_string().contains("EUC-KR"));
    }
}

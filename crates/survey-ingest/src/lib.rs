//! Survey export ingestion.
//!
//! Loads one uploaded CSV into the raw table consumed by `survey-core`,
//! resolving the text encoding through an ordered candidate list
//! (UTF-8 with or without a BOM, then EUC-KR).

pub mod encoding;
pub mod error;
pub mod reader;

pub use encoding::decode_export;
pub use error::{IngestError, Result};
pub use reader::{parse_csv_text, read_survey_csv};

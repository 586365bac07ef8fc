//! Spreadsheet IO.
//!
//! - `rent_roll_reader`: uploaded xlsx bytes into a [`RentRoll`](crate::models::rent_roll::RentRoll)
//! - `template`: the underwriting template and its fixed output cells

pub mod rent_roll_reader;
pub mod template;

use std::path::PathBuf;
use umya_spreadsheet::XlsxError;

/// Errors raised while reading or writing workbooks.
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("Could not read the rent roll workbook: {0}")]
    UnreadableUpload(#[source] XlsxError),

    #[error("The rent roll workbook has no worksheets")]
    NoWorksheet,

    #[error("Template {path} is not available: {source}")]
    TemplateUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template could not be parsed: {0}")]
    TemplateUnreadable(#[source] XlsxError),

    #[error("Template has no worksheets")]
    TemplateMissingSheet,

    #[error("Could not serialize the filled template: {0}")]
    Write(#[source] XlsxError),
}

impl WorkbookError {
    /// True when the caller sent a bad file, false when the server side failed.
    pub fn is_upload_error(&self) -> bool {
        matches!(
            self,
            WorkbookError::UnreadableUpload(_) | WorkbookError::NoWorksheet
        )
    }
}

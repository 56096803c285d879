//! Upload file-type gate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};

/// What the engine does with an uploaded file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// `.xlsx`, `.xls` or `.csv`: read into a table and imported here.
    Spreadsheet,
    /// `.pdf`: accepted, but handed off for processing elsewhere.
    Pdf,
}

impl UploadKind {
    /// Classifies an upload by file name. Extensions are matched
    /// case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use schedule_import::import::UploadKind;
    ///
    /// assert_eq!(UploadKind::from_file_name("Week 21.XLSX").unwrap(), UploadKind::Spreadsheet);
    /// assert!(UploadKind::from_file_name("notes.txt").is_err());
    /// ```
    pub fn from_file_name(file_name: &str) -> ImportResult<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("xlsx" | "xls" | "csv") => Ok(UploadKind::Spreadsheet),
            Some("pdf") => Ok(UploadKind::Pdf),
            _ => Err(ImportError::UnsupportedFileType {
                file_name: file_name.to_string(),
            }),
        }
    }

    /// True when this engine cannot read the file itself.
    pub fn requires_server_processing(&self) -> bool {
        matches!(self, UploadKind::Pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_extensions() {
        for name in ["schedule.xlsx", "old.xls", "export.csv", "UPPER.CSV"] {
            assert_eq!(UploadKind::from_file_name(name).unwrap(), UploadKind::Spreadsheet);
        }
    }

    #[test]
    fn test_pdf_is_passed_on() {
        let kind = UploadKind::from_file_name("roster.pdf").unwrap();
        assert_eq!(kind, UploadKind::Pdf);
        assert!(kind.requires_server_processing());
        assert!(!UploadKind::Spreadsheet.requires_server_processing());
    }

    #[test]
    fn test_unsupported_types() {
        for name in ["image.png", "noextension", "archive.xlsx.zip", ".csv"] {
            match UploadKind::from_file_name(name) {
                Err(ImportError::UnsupportedFileType { file_name }) => assert_eq!(file_name, name),
                other => panic!("Expected UnsupportedFileType for {}, got {:?}", name, other),
            }
        }
    }
}

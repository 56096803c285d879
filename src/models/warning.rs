//! Non-fatal import warnings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of issue a warning reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The column mapping names no day column; every record applies to all days.
    MissingDayColumn,
    /// A time token matched no known format and was passed through.
    UnrecognizedTime,
    /// A day token matched no known day.
    UnrecognizedDay,
    /// A row was skipped because its employee name was empty after sanitizing.
    SkippedRow,
}

/// A problem worth showing to the reviewer that does not abort the import.
///
/// `Display` renders the message, so callers that only want strings can use
/// `warning.to_string()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportWarning {
    /// What kind of issue this is.
    pub kind: WarningKind,
    /// Human-readable description.
    pub message: String,
    /// Zero-based row index the warning refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Column header the warning refers to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl ImportWarning {
    /// The mapping has no day column.
    pub fn missing_day_column() -> Self {
        Self {
            kind: WarningKind::MissingDayColumn,
            message: "No day column mapped; shifts will apply to all days".to_string(),
            row: None,
            column: None,
        }
    }

    /// A mapped day column is absent from the table.
    pub fn day_column_not_found(header: &str) -> Self {
        Self {
            kind: WarningKind::MissingDayColumn,
            message: format!(
                "Day column '{}' not found; shifts will apply to all days",
                header
            ),
            row: None,
            column: Some(header.to_string()),
        }
    }

    /// A time token could not be normalized.
    pub fn unrecognized_time(row: usize, column: &str, raw: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedTime,
            message: format!(
                "Row {}: unrecognized time '{}' in column '{}'",
                row + 1,
                raw,
                column
            ),
            row: Some(row),
            column: Some(column.to_string()),
        }
    }

    /// A day token could not be normalized.
    pub fn unrecognized_day(row: usize, column: &str, raw: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedDay,
            message: format!(
                "Row {}: unrecognized day '{}' in column '{}'",
                row + 1,
                raw,
                column
            ),
            row: Some(row),
            column: Some(column.to_string()),
        }
    }

    /// A roster column header carries a day token that names no day.
    pub fn unrecognized_day_header(column: &str, raw: &str) -> Self {
        Self {
            kind: WarningKind::UnrecognizedDay,
            message: format!(
                "Column '{}': unrecognized day '{}'; its shifts will apply to all days",
                column, raw
            ),
            row: None,
            column: Some(column.to_string()),
        }
    }

    /// A row was skipped for having no employee name.
    pub fn skipped_row(row: usize) -> Self {
        Self {
            kind: WarningKind::SkippedRow,
            message: format!("Row {}: skipped, no employee name", row + 1),
            row: Some(row),
            column: None,
        }
    }
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

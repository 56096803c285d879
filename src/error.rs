//! Error types for the schedule import engine.
//!
//! Only structural problems are errors. Per-cell parse misses are reported as
//! [`ImportWarning`](crate::models::ImportWarning)s alongside a successful result.

use thiserror::Error;

/// The main error type for the schedule import engine.
///
/// # Example
///
/// ```
/// use schedule_import::error::ImportError;
///
/// let error = ImportError::MissingColumns {
///     missing: vec!["Area".to_string(), "Day".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing required columns: Area, Day");
/// ```
#[derive(Debug, Error)]
pub enum ImportError {
    /// The uploaded table contained no rows.
    #[error("The uploaded file contains no rows")]
    EmptyTable,

    /// Parsing finished but no shift could be extracted.
    #[error("No shifts could be extracted from the uploaded file")]
    NoShiftsFound,

    /// One or more mapped columns are absent from the table headers.
    #[error("Missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// The mapped header names that were not found.
        missing: Vec<String>,
    },

    /// A column-format table has no header mentioning an employee or name.
    #[error("No employee name column found (expected a header containing 'employee' or 'name')")]
    MissingEmployeeColumn,

    /// A weekly-roster table has no usable employee name column.
    #[error("Could not identify the employee name column in the weekly roster")]
    MissingRosterNameColumn,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The uploaded file has an extension the importer does not handle.
    #[error("Unsupported file type: {file_name}")]
    UnsupportedFileType {
        /// The name of the rejected file.
        file_name: String,
    },

    /// An import session was asked to do something its current state forbids.
    #[error("Cannot {action} while import is {state}")]
    InvalidTransition {
        /// The state the session was in.
        state: String,
        /// The rejected action.
        action: String,
    },
}

/// A type alias for Results that return ImportError.
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_message() {
        assert_eq!(
            ImportError::EmptyTable.to_string(),
            "The uploaded file contains no rows"
        );
    }

    #[test]
    fn test_missing_columns_lists_every_header() {
        let error = ImportError::MissingColumns {
            missing: vec!["Start".to_string(), "Area".to_string()],
        };
        assert_eq!(error.to_string(), "Missing required columns: Start, Area");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ImportError::ConfigParseError {
            path: "/config/departments.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/departments.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unsupported_file_type_displays_name() {
        let error = ImportError::UnsupportedFileType {
            file_name: "roster.docx".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported file type: roster.docx");
    }

    #[test]
    fn test_invalid_transition_displays_state_and_action() {
        let error = ImportError::InvalidTransition {
            state: "idle".to_string(),
            action: "confirm".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot confirm while import is idle");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ImportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty() -> ImportResult<()> {
            Err(ImportError::EmptyTable)
        }

        fn propagates_error() -> ImportResult<()> {
            returns_empty()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(ImportError::EmptyTable)));
    }
}

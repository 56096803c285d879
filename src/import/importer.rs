//! Import orchestration.
//!
//! Runs detection, validation and parsing in order and packages the result as
//! a [`PendingImport`] for review.

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ImportConfig;
use crate::error::{ImportError, ImportResult};
use crate::models::{ColumnMapping, RawTable};
use crate::parsing::{
    ParsedShifts, ScheduleFormat, detect_format_excluding, find_name_column,
    has_employee_column, parse_column_schedule_with, parse_weekly_roster_with, validate_mapping,
};

use super::pending::PendingImport;

/// Imports a table with the default configuration.
///
/// # Errors
///
/// Fails on structural problems: an empty table, a column-format table
/// without an employee column or missing a mapped column, a weekly roster
/// without an identifiable name column, or a table that yields no shifts.
///
/// # Example
///
/// ```
/// use schedule_import::import::import_schedule;
/// use schedule_import::models::{ColumnMapping, RawTable};
///
/// let table = RawTable::from_grid(
///     vec!["Name", "Start", "End", "Area", "Day"],
///     vec![vec![
///         "Jane Doe".into(),
///         "12:00 PM".into(),
///         "8:00 PM".into(),
///         "Drive Thru".into(),
///         "Tuesday".into(),
///     ]],
/// );
///
/// let pending = import_schedule(&table, &ColumnMapping::default()).unwrap();
/// assert_eq!(pending.records().len(), 1);
/// let records = pending.commit();
/// assert_eq!(records[0].time_block, "12:00 - 20:00");
/// ```
pub fn import_schedule(table: &RawTable, mapping: &ColumnMapping) -> ImportResult<PendingImport> {
    Importer::default().import(table, mapping)
}

/// Runs imports against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    config: ImportConfig,
}

impl Importer {
    /// Creates an importer with the given configuration.
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Detects, validates and parses `table`.
    ///
    /// Neither the table nor the mapping is modified.
    pub fn import(&self, table: &RawTable, mapping: &ColumnMapping) -> ImportResult<PendingImport> {
        let import_id = Uuid::new_v4();
        info!(import_id = %import_id, rows = table.len(), "Starting schedule import");

        let result = self.check_not_empty(table).and_then(|_| {
            let format = self.detect(table, mapping);
            self.validate(table, mapping, format)?;
            let parsed = self.parse(table, mapping, format)?;
            self.finish(import_id, table, format, parsed)
        });

        if let Err(err) = &result {
            warn!(import_id = %import_id, error = %err, "Schedule import failed");
        }
        result
    }

    pub(crate) fn check_not_empty(&self, table: &RawTable) -> ImportResult<()> {
        if table.is_empty() {
            return Err(ImportError::EmptyTable);
        }
        Ok(())
    }

    /// The mapped start and end columns are never sampled for embedded
    /// shift text.
    pub(crate) fn detect(&self, table: &RawTable, mapping: &ColumnMapping) -> ScheduleFormat {
        let time_columns = [mapping.start_time.as_str(), mapping.end_time.as_str()];
        detect_format_excluding(table, &self.config.detection, &time_columns)
    }

    pub(crate) fn validate(
        &self,
        table: &RawTable,
        mapping: &ColumnMapping,
        format: ScheduleFormat,
    ) -> ImportResult<()> {
        match format {
            ScheduleFormat::Column => {
                if !has_employee_column(table) {
                    return Err(ImportError::MissingEmployeeColumn);
                }
                validate_mapping(table, mapping)
            }
            ScheduleFormat::WeeklyRoster => {
                find_name_column(table, &self.config.detection)?;
                Ok(())
            }
        }
    }

    pub(crate) fn parse(
        &self,
        table: &RawTable,
        mapping: &ColumnMapping,
        format: ScheduleFormat,
    ) -> ImportResult<ParsedShifts> {
        match format {
            ScheduleFormat::Column => {
                parse_column_schedule_with(table, mapping, &self.config.departments.column)
            }
            ScheduleFormat::WeeklyRoster => parse_weekly_roster_with(table, &self.config),
        }
    }

    pub(crate) fn finish(
        &self,
        import_id: Uuid,
        table: &RawTable,
        format: ScheduleFormat,
        parsed: ParsedShifts,
    ) -> ImportResult<PendingImport> {
        if parsed.records.is_empty() {
            return Err(ImportError::NoShiftsFound);
        }

        info!(
            import_id = %import_id,
            %format,
            records = parsed.records.len(),
            warnings = parsed.warnings.len(),
            "Schedule import ready for review"
        );

        Ok(PendingImport::new(import_id, format, table, parsed))
    }
}

//! Column-format schedule parsing.
//!
//! One input row is one shift. The [`ColumnMapping`] names the headers for
//! employee, start, end, area and (optionally) day.

use tracing::{debug, warn};

use crate::config::KeywordSet;
use crate::error::{ImportError, ImportResult};
use crate::models::{
    ColumnMapping, ImportWarning, Normalized, RawTable, RecordOrigin, Row, ShiftRecord,
    SourceFormat,
};
use crate::normalize::{classify_department_with, normalize_day, normalize_time, sanitize_name};

use super::ParsedShifts;

/// Parses a column-format table with the built-in department keywords.
///
/// # Errors
///
/// Returns [`ImportError::MissingColumns`] naming every mapped name, start,
/// end or area header that the table lacks. A missing day column is only a
/// warning; the records then carry `day = None`.
///
/// # Example
///
/// ```
/// use schedule_import::models::{ColumnMapping, Day, Department, RawTable};
/// use schedule_import::parsing::parse_column_schedule;
///
/// let table = RawTable::from_grid(
///     vec!["Name", "Start", "End", "Area", "Day"],
///     vec![vec![
///         "Jane Doe (555) 123-4567".into(),
///         "12:00 PM".into(),
///         "8:00 PM".into(),
///         "Drive Thru".into(),
///         "Tuesday".into(),
///     ]],
/// );
///
/// let parsed = parse_column_schedule(&table, &ColumnMapping::default()).unwrap();
/// let record = &parsed.records[0];
/// assert_eq!(record.employee_name, "Jane Doe");
/// assert_eq!(record.time_block, "12:00 - 20:00");
/// assert_eq!(record.department, Department::Foh);
/// assert_eq!(record.day, Some(Day::Tuesday));
/// ```
pub fn parse_column_schedule(
    table: &RawTable,
    mapping: &ColumnMapping,
) -> ImportResult<ParsedShifts> {
    parse_column_schedule_with(table, mapping, &KeywordSet::column_defaults())
}

/// Parses a column-format table with the given department keywords.
pub fn parse_column_schedule_with(
    table: &RawTable,
    mapping: &ColumnMapping,
    keywords: &KeywordSet,
) -> ImportResult<ParsedShifts> {
    validate_mapping(table, mapping)?;

    let mut parsed = ParsedShifts::default();
    let day_column = resolve_day_column(table, mapping, &mut parsed.warnings);

    for (index, row) in table.rows().iter().enumerate() {
        let employee_name = sanitize_name(&row.cell(&mapping.employee_name).as_text());
        if employee_name.is_empty() {
            if !is_blank_row(row) {
                warn!(row = index, "Skipping row without employee name");
                parsed.warnings.push(ImportWarning::skipped_row(index));
            }
            continue;
        }

        let shift_start = normalize_time(row.cell(&mapping.start_time));
        let shift_end = normalize_time(row.cell(&mapping.end_time));
        let times = [
            (&mapping.start_time, &shift_start),
            (&mapping.end_time, &shift_end),
        ];
        for (column, time) in times {
            if let Normalized::Unrecognized(raw) = time {
                warn!(
                    row = index,
                    column = %column,
                    raw = %raw,
                    "Passing through unrecognized time"
                );
                parsed
                    .warnings
                    .push(ImportWarning::unrecognized_time(index, column, raw));
            }
        }

        let department = classify_department_with(&row.cell(&mapping.area).as_text(), keywords);

        let day = day_column.and_then(|column| {
            let token = row.cell(column).as_text();
            let day = normalize_day(&token);
            if day.is_none() && !token.trim().is_empty() {
                warn!(row = index, raw = %token, "Unrecognized day token");
                parsed
                    .warnings
                    .push(ImportWarning::unrecognized_day(index, column, token.trim()));
            }
            day
        });

        debug!(row = index, employee = %employee_name, %department, "Parsed column shift");

        parsed.records.push(ShiftRecord::new(
            employee_name,
            shift_start,
            shift_end,
            department,
            day,
            SourceFormat::Column,
            RecordOrigin {
                row: index,
                column: None,
            },
        ));
    }

    Ok(parsed)
}

/// Checks that the four required mapped headers exist.
pub(crate) fn validate_mapping(table: &RawTable, mapping: &ColumnMapping) -> ImportResult<()> {
    let missing: Vec<String> = mapping
        .required_headers()
        .into_iter()
        .filter(|header| !table.has_header(header))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingColumns { missing })
    }
}

fn resolve_day_column<'a>(
    table: &RawTable,
    mapping: &'a ColumnMapping,
    warnings: &mut Vec<ImportWarning>,
) -> Option<&'a str> {
    match mapping.day.as_deref() {
        None => {
            warnings.push(ImportWarning::missing_day_column());
            None
        }
        Some(header) if !table.has_header(header) => {
            warnings.push(ImportWarning::day_column_not_found(header));
            None
        }
        Some(header) => Some(header),
    }
}

fn is_blank_row(row: &Row) -> bool {
    row.iter().all(|(_, cell)| cell.is_blank())
}

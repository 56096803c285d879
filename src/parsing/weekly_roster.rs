//! Weekly-roster parsing.
//!
//! One row per employee, one column per day. A day column header looks like
//! `"Sun, 5/18/25"`; its cell holds newline-separated shift text such as
//! `"8:00 AM - 4:00 PM\nKitchen"`.
//!
//! Only the first time range in a cell is honored, even when the text holds
//! several. A cell therefore yields zero or one record.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::{DetectionConfig, ImportConfig, KeywordSet};
use crate::error::{ImportError, ImportResult};
use crate::models::{
    Day, ImportWarning, Normalized, RawTable, RecordOrigin, Row, ShiftRecord, SourceFormat,
};
use crate::normalize::{classify_text, normalize_day, normalize_time_str, sanitize_name};

use super::ParsedShifts;
use super::format_detection::is_day_date_header;

lazy_static! {
    static ref TIME_RANGE: Regex =
        Regex::new(r"(?i)(\d{1,2}:\d{2})\s?([ap]m)?\s*-\s*(\d{1,2}:\d{2})\s?([ap]m)?")
            .expect("Failed to compile TIME_RANGE regex");
}

/// A day column and the day its header names.
struct DayColumn<'a> {
    header: &'a str,
    day: Option<Day>,
}

/// Parses a weekly-roster table with the default configuration.
///
/// # Errors
///
/// Returns [`ImportError::MissingRosterNameColumn`] when the table has no
/// headers, or when no header names the employee column and the first column
/// is itself a day column.
///
/// # Example
///
/// ```
/// use schedule_import::models::{Day, Department, RawTable};
/// use schedule_import::parsing::parse_weekly_roster;
///
/// let table = RawTable::from_grid(
///     vec!["Employee", "Mon, 5/19/25", "Tue, 5/20/25"],
///     vec![vec![
///         "Bob Johnson".into(),
///         "8:00 AM - 4:00 PM\nKitchen".into(),
///         "".into(),
///     ]],
/// );
///
/// let parsed = parse_weekly_roster(&table).unwrap();
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.records[0].time_block, "08:00 - 16:00");
/// assert_eq!(parsed.records[0].department, Department::Boh);
/// assert_eq!(parsed.records[0].day, Some(Day::Monday));
/// ```
pub fn parse_weekly_roster(table: &RawTable) -> ImportResult<ParsedShifts> {
    parse_weekly_roster_with(table, &ImportConfig::default())
}

/// Parses a weekly-roster table with the given configuration.
pub fn parse_weekly_roster_with(
    table: &RawTable,
    config: &ImportConfig,
) -> ImportResult<ParsedShifts> {
    let name_column = find_name_column(table, &config.detection)?;
    let keywords = &config.departments.roster;

    let mut parsed = ParsedShifts::default();
    let day_columns = day_columns(table, name_column, &mut parsed.warnings);
    debug!(
        name_column,
        day_columns = day_columns.len(),
        "Resolved weekly roster columns"
    );

    for (index, row) in table.rows().iter().enumerate() {
        let employee_name = sanitize_name(&row.cell(name_column).as_text());
        if employee_name.is_empty() {
            if day_columns.iter().any(|c| !row.cell(c.header).is_blank()) {
                warn!(row = index, "Skipping roster row without employee name");
                parsed.warnings.push(ImportWarning::skipped_row(index));
            }
            continue;
        }

        for column in &day_columns {
            if let Some(record) =
                parse_cell(row, index, column, &employee_name, keywords, &mut parsed.warnings)
            {
                parsed.records.push(record);
            }
        }
    }

    Ok(parsed)
}

/// Finds the employee column: the first configured name header, else the
/// first column.
pub(crate) fn find_name_column<'a>(
    table: &'a RawTable,
    config: &DetectionConfig,
) -> ImportResult<&'a str> {
    let headers = table.headers();

    let named = headers.iter().find(|h| {
        let normalized = h.trim().to_lowercase();
        config
            .roster_name_headers
            .iter()
            .any(|n| n.to_lowercase() == normalized)
    });

    match named.or_else(|| headers.first()) {
        Some(header) if named.is_some() || !is_day_date_header(header) => Ok(header.as_str()),
        _ => Err(ImportError::MissingRosterNameColumn),
    }
}

fn day_columns<'a>(
    table: &'a RawTable,
    name_column: &str,
    warnings: &mut Vec<ImportWarning>,
) -> Vec<DayColumn<'a>> {
    table
        .headers()
        .iter()
        .filter(|h| h.as_str() != name_column && is_day_date_header(h))
        .map(|header| {
            let token = day_token(header);
            let day = normalize_day(token);
            if day.is_none() {
                warn!(column = %header, token, "Day column header names no day");
                warnings.push(ImportWarning::unrecognized_day_header(header, token.trim()));
            }
            DayColumn { header, day }
        })
        .collect()
}

/// Text before the first comma, or the whole header.
fn day_token(header: &str) -> &str {
    match header.split_once(',') {
        Some((token, _)) => token,
        None => header,
    }
}

fn parse_cell(
    row: &Row,
    index: usize,
    column: &DayColumn<'_>,
    employee_name: &str,
    keywords: &KeywordSet,
    warnings: &mut Vec<ImportWarning>,
) -> Option<ShiftRecord> {
    let cell = row.cell(column.header);
    if cell.is_blank() {
        return None;
    }

    let text = cell.as_text();
    let joined = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let Some((start_token, end_token)) = first_time_range(&joined) else {
        debug!(row = index, column = column.header, "No time range in roster cell");
        return None;
    };

    let shift_start = normalize_time_str(&start_token);
    let shift_end = normalize_time_str(&end_token);
    for time in [&shift_start, &shift_end] {
        if let Normalized::Unrecognized(raw) = time {
            warn!(
                row = index,
                column = column.header,
                raw = %raw,
                "Passing through unrecognized time"
            );
            warnings.push(ImportWarning::unrecognized_time(index, column.header, raw));
        }
    }

    let department = classify_text(&joined.to_lowercase(), keywords);

    debug!(
        row = index,
        column = column.header,
        employee = employee_name,
        %department,
        "Parsed roster shift"
    );

    Some(
        ShiftRecord::new(
            employee_name.to_string(),
            shift_start,
            shift_end,
            department,
            column.day,
            SourceFormat::WeeklyRoster,
            RecordOrigin {
                row: index,
                column: Some(column.header.to_string()),
            },
        )
        .with_source_row(row.clone()),
    )
}

/// Finds the first `H:MM[ am|pm] - H:MM[ am|pm]` range.
///
/// A meridiem written without a space (`8:00AM`) is re-attached with one so
/// the time normalizer accepts it.
fn first_time_range(text: &str) -> Option<(String, String)> {
    let caps = TIME_RANGE.captures(text)?;

    let token = |time: usize, meridiem: usize| match caps.get(meridiem) {
        Some(m) => format!("{} {}", &caps[time], m.as_str()),
        None => caps[time].to_string(),
    };

    Some((token(1, 2), token(3, 4)))
}
